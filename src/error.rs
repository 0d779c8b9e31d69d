//! Error kinds surfaced by the comment panel.
//!
//! ERROR HANDLING
//! ==============
//! `PanelError` is what the panel shows and what callers branch on. It never
//! carries transport detail; that lives in `StoreError`, which the controller
//! logs before collapsing it into `FetchFailed` or `SubmitFailed`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Recoverable, panel-local failure kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    /// A local precondition failed; no request was sent.
    #[error("Write something and sign in before posting.")]
    ValidationFailed,
    /// The comment list could not be loaded.
    #[error("Comments could not be loaded.")]
    FetchFailed,
    /// The new comment was not accepted by the server.
    #[error("Your comment could not be posted.")]
    SubmitFailed,
}

/// Failure reported by a [`CommentStore`](crate::net::store::CommentStore).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No transport exists in this build (native/SSR).
    #[error("comment store is only available in the browser")]
    Unavailable,
}

/// Host-page configuration could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("host element has no data-article-id")]
    MissingArticleId,
    #[error("invalid data-poll-interval: {0:?}")]
    InvalidPollInterval(String),
}
