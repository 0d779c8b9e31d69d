//! Seam between the panel and wherever comments are persisted.
//!
//! The browser build talks HTTP (`net::api::HttpCommentStore`); tests plug in
//! scripted in-memory stores. Futures are not required to be `Send`: the
//! panel runs on a single-threaded executor.

use std::future::Future;

use super::types::{ArticleId, Comment, CommentPage, NewComment};
use crate::error::StoreError;

/// Remote collection of comments, scoped per article.
pub trait CommentStore {
    /// Fetch the current page of comments for `article_id`.
    fn list(&self, article_id: &ArticleId) -> impl Future<Output = Result<CommentPage, StoreError>>;

    /// Persist `comment` and return the server's copy, with its assigned id
    /// and timestamp.
    fn create(&self, article_id: &ArticleId, comment: &NewComment) -> impl Future<Output = Result<Comment, StoreError>>;
}
