//! Transient comment text owned by the entry form.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

/// Not-yet-submitted comment text and whether it may be posted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftComment {
    body: String,
    is_valid: bool,
}

impl DraftComment {
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Non-blank body and a signed-in author.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn on_body_change(&mut self, text: String, author_present: bool) {
        self.is_valid = author_present && !text.trim().is_empty();
        self.body = text;
    }

    /// Take the trimmed body for submission, emptying the draft.
    ///
    /// Returns `None` and keeps the text when the draft is invalid.
    pub fn take_submission(&mut self) -> Option<String> {
        if !self.is_valid {
            return None;
        }
        let body = self.body.trim().to_owned();
        *self = Self::default();
        Some(body)
    }
}
