use super::*;

// =============================================================
// Display
// =============================================================

#[test]
fn panel_error_messages_are_user_facing() {
    assert_eq!(PanelError::FetchFailed.to_string(), "Comments could not be loaded.");
    assert_eq!(PanelError::SubmitFailed.to_string(), "Your comment could not be posted.");
    assert!(!PanelError::ValidationFailed.to_string().is_empty());
}

#[test]
fn store_error_status_includes_code_and_diagnostic() {
    let err = StoreError::Status { status: 400, message: "Comment does not have a body".to_owned() };
    assert_eq!(err.to_string(), "server responded with 400: Comment does not have a body");
}

#[test]
fn config_error_quotes_bad_interval() {
    let err = ConfigError::InvalidPollInterval("soon".to_owned());
    assert_eq!(err.to_string(), "invalid data-poll-interval: \"soon\"");
}
