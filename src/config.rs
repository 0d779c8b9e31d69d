//! Panel configuration read from the host page.
//!
//! The server-rendered article page carries everything the panel needs as
//! `data-*` attributes on its mount element:
//!
//! | attribute            | meaning                                   |
//! |----------------------|-------------------------------------------|
//! | `data-article-id`    | article whose comments are shown (required) |
//! | `data-user-id`       | signed-in author; blank for anonymous     |
//! | `data-api-base`      | articles collection URL, default `/api/articles` |
//! | `data-poll-interval` | reload period in ms; absent or `0` disables |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::ConfigError;
use crate::net::api::DEFAULT_ARTICLES_BASE;
use crate::net::types::{ArticleId, AuthorId};

/// Id of the element the panel mounts into.
pub const MOUNT_ELEMENT_ID: &str = "comment-box";

/// Everything needed to build one comment panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    /// Base of the articles collection, without a trailing slash.
    pub articles_base: String,
    pub article_id: ArticleId,
    /// `None` when nobody is signed in; the entry form stays disabled.
    pub author: Option<AuthorId>,
    pub poll_interval: Option<Duration>,
}

impl PanelConfig {
    /// Build a config from dataset lookups (camel-cased keys, as exposed by
    /// `HTMLElement.dataset`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingArticleId`] when no article id is given
    /// and [`ConfigError::InvalidPollInterval`] when the interval is not a
    /// whole number of milliseconds.
    pub fn from_dataset(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let article_id = non_blank(lookup("articleId")).ok_or(ConfigError::MissingArticleId)?;
        let author = non_blank(lookup("userId"));
        let articles_base = non_blank(lookup("apiBase")).unwrap_or_else(|| DEFAULT_ARTICLES_BASE.to_owned());
        let poll_interval = match non_blank(lookup("pollInterval")) {
            None => None,
            Some(raw) => {
                let millis = raw.parse::<u64>().map_err(|_| ConfigError::InvalidPollInterval(raw.clone()))?;
                (millis > 0).then_some(Duration::from_millis(millis))
            }
        };

        Ok(Self {
            articles_base: articles_base.trim_end_matches('/').to_owned(),
            article_id: ArticleId::from(article_id),
            author: author.map(AuthorId::from),
            poll_interval,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
