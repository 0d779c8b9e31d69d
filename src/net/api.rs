//! HTTP comment store backed by the blog's REST API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call resolves to `StoreError::Unavailable`, which
//! keeps the crate testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, unexpected statuses and undecodable bodies are all
//! reported as `StoreError`; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::store::CommentStore;
use super::types::{ArticleId, Comment, CommentPage, NewComment};
use crate::error::StoreError;

/// Default collection base when the host page does not provide one.
pub const DEFAULT_ARTICLES_BASE: &str = "/api/articles";

/// Comment store speaking `GET`/`POST {base}/{article_id}/comments/`.
#[derive(Clone, Debug)]
pub struct HttpCommentStore {
    articles_base: String,
}

impl HttpCommentStore {
    #[must_use]
    pub fn new(articles_base: impl Into<String>) -> Self {
        Self { articles_base: articles_base.into() }
    }

    #[must_use]
    pub fn articles_base(&self) -> &str {
        &self.articles_base
    }
}

impl Default for HttpCommentStore {
    fn default() -> Self {
        Self::new(DEFAULT_ARTICLES_BASE)
    }
}

fn comments_endpoint(articles_base: &str, article_id: &ArticleId) -> String {
    format!("{}/{article_id}/comments/", articles_base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn is_list_success(status: u16) -> bool {
    status == 200
}

#[cfg(any(test, feature = "csr"))]
fn is_create_success(status: u16) -> bool {
    matches!(status, 200 | 201)
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: String) -> StoreError {
    let message = body.trim();
    let message = if message.is_empty() { "no diagnostic" } else { message };
    StoreError::Status { status, message: message.to_owned() }
}

impl CommentStore for HttpCommentStore {
    async fn list(&self, article_id: &ArticleId) -> Result<CommentPage, StoreError> {
        let url = comments_endpoint(&self.articles_base, article_id);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .header("Accept", "application/json")
                .header("Cache-Control", "no-cache")
                .send()
                .await
                .map_err(|e| StoreError::Network(e.to_string()))?;
            let status = resp.status();
            if !is_list_success(status) {
                let body = resp.text().await.unwrap_or_default();
                return Err(status_error(status, body));
            }
            resp.json::<CommentPage>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(StoreError::Unavailable)
        }
    }

    async fn create(&self, article_id: &ArticleId, comment: &NewComment) -> Result<Comment, StoreError> {
        let url = comments_endpoint(&self.articles_base, article_id);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .header("Accept", "application/json")
                .json(comment)
                .map_err(|e| StoreError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Network(e.to_string()))?;
            let status = resp.status();
            if !is_create_success(status) {
                let body = resp.text().await.unwrap_or_default();
                return Err(status_error(status, body));
            }
            resp.json::<Comment>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, comment);
            Err(StoreError::Unavailable)
        }
    }
}
