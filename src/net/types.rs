//! Comment entity model and the JSON schema of the comments endpoint.
//!
//! DESIGN
//! ======
//! Identifiers and page tokens are opaque: the server has emitted both
//! integers and strings for them over time, so they are accepted as either
//! and held as strings. Nothing in the client parses or constructs them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(#[serde(deserialize_with = "deserialize_opaque")] String);

        impl $name {
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Server-assigned comment identifier.
    CommentId
);
opaque_id!(
    /// Identifier of the user who wrote a comment.
    AuthorId
);
opaque_id!(
    /// Identifier of the article a comment belongs to.
    ArticleId
);
opaque_id!(
    /// Cursor pointing at a neighbouring page of comments.
    PageToken
);

/// One server-persisted comment. Received only; never sent back.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Comment {
    /// Assigned by the server; never guessed client-side.
    pub id: CommentId,
    pub author_id: AuthorId,
    /// Username shown next to the comment.
    #[serde(rename = "author")]
    pub author_display_name: String,
    pub article_id: ArticleId,
    /// Raw markdown as written by the author.
    pub body: String,
    /// Creation time, formatted by the server for display.
    #[serde(rename = "timestamp", alias = "created_at")]
    pub created_at: String,
}

/// One fetched page of an article's comments.
///
/// Decoded through `CommentPageWire`, so the wire names (`prev`, `next`,
/// `count`) live there.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "CommentPageWire")]
pub struct CommentPage {
    /// Comments in server order.
    pub comments: Vec<Comment>,
    /// `prev` on the wire.
    pub previous_page_token: Option<PageToken>,
    /// `next` on the wire.
    pub next_page_token: Option<PageToken>,
    /// `count` on the wire, or the number of comments when absent. May
    /// exceed `comments.len()`.
    pub total_count: u64,
}

/// Accepted response shapes for a list request.
#[derive(Deserialize)]
#[serde(untagged)]
enum CommentPageWire {
    Paged {
        comments: Vec<Comment>,
        #[serde(default)]
        prev: Option<PageToken>,
        #[serde(default)]
        next: Option<PageToken>,
        #[serde(default)]
        count: Option<u64>,
    },
    Bare(Vec<Comment>),
}

impl From<CommentPageWire> for CommentPage {
    fn from(wire: CommentPageWire) -> Self {
        match wire {
            CommentPageWire::Paged { comments, prev, next, count } => {
                let total_count = count.unwrap_or(comments.len() as u64);
                Self { comments, previous_page_token: prev, next_page_token: next, total_count }
            }
            CommentPageWire::Bare(comments) => {
                let total_count = comments.len() as u64;
                Self { comments, previous_page_token: None, next_page_token: None, total_count }
            }
        }
    }
}

/// Body of a create request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub author_id: AuthorId,
    pub article_id: ArticleId,
    /// Already trimmed.
    pub body: String,
}

fn deserialize_opaque<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number identifier")),
    }
}
