//! Authoritative comment collection for one article panel.
//!
//! DESIGN
//! ======
//! Transitions are plain synchronous methods so the controller only decides
//! *when* to apply them. The page only changes on a confirmed server
//! response: a successful load replaces it wholesale, a successful submit
//! appends exactly the server's comment. Failures touch `last_error` only.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::error::{PanelError, StoreError};
use crate::net::types::{ArticleId, AuthorId, Comment, CommentPage, NewComment};

/// Panel state: loaded page, in-flight bookkeeping, and the last failure.
///
/// Callers only ever see clones of this (see `CommentPanelController::snapshot`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    page: CommentPage,
    pending: bool,
    loads_in_flight: usize,
    has_loaded: bool,
    last_error: Option<PanelError>,
}

impl PanelState {
    #[must_use]
    pub fn page(&self) -> &CommentPage {
        &self.page
    }

    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.page.comments
    }

    /// True while a create request is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// True while at least one list request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loads_in_flight > 0
    }

    /// True once any load has succeeded.
    #[must_use]
    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    #[must_use]
    pub fn last_error(&self) -> Option<PanelError> {
        self.last_error
    }

    pub(crate) fn begin_load(&mut self) {
        self.loads_in_flight += 1;
    }

    pub(crate) fn finish_load(&mut self, result: Result<CommentPage, StoreError>) {
        self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
        match result {
            Ok(page) => {
                self.page = page;
                self.has_loaded = true;
                self.last_error = None;
            }
            Err(_) => self.last_error = Some(PanelError::FetchFailed),
        }
    }

    /// A load whose future was dropped before it settled.
    pub(crate) fn abandon_load(&mut self) {
        self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
    }

    /// Validate a submission and mark it pending.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::ValidationFailed`] when the trimmed body is
    /// empty, no author is signed in, or a load or submit is in flight. The
    /// state is left untouched in that case.
    pub(crate) fn begin_submit(
        &mut self,
        body: &str,
        author: Option<&AuthorId>,
        article_id: &ArticleId,
    ) -> Result<NewComment, PanelError> {
        let body = body.trim();
        let Some(author) = author else {
            return Err(PanelError::ValidationFailed);
        };
        if body.is_empty() || self.pending || self.is_loading() {
            return Err(PanelError::ValidationFailed);
        }
        self.pending = true;
        Ok(NewComment { author_id: author.clone(), article_id: article_id.clone(), body: body.to_owned() })
    }

    /// A submit whose future was dropped before it settled.
    pub(crate) fn abandon_submit(&mut self) {
        self.pending = false;
    }

    pub(crate) fn finish_submit(&mut self, result: Result<Comment, StoreError>) {
        self.pending = false;
        match result {
            Ok(comment) => {
                // A load that landed mid-submit may already include it.
                if !self.page.comments.iter().any(|c| c.id == comment.id) {
                    self.page.comments.push(comment);
                    self.page.total_count = self.page.total_count.saturating_add(1);
                }
                self.last_error = None;
            }
            Err(_) => self.last_error = Some(PanelError::SubmitFailed),
        }
    }
}
