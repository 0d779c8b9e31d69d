use super::*;

fn draft(text: &str, author_present: bool) -> DraftComment {
    let mut draft = DraftComment::default();
    draft.on_body_change(text.to_owned(), author_present);
    draft
}

fn render(author_present: bool) -> String {
    Owner::new().with(|| {
        view! { <CommentEntry author_present=author_present busy=false on_submit=Callback::new(|_: String| {}) /> }
            .to_html()
    })
}

// =============================================================
// can_post
// =============================================================

#[test]
fn can_post_valid_idle_draft() {
    assert!(can_post(&draft("hello", true), false));
}

#[test]
fn cannot_post_while_busy() {
    assert!(!can_post(&draft("hello", true), true));
}

#[test]
fn cannot_post_invalid_draft() {
    assert!(!can_post(&draft("  ", true), false));
    assert!(!can_post(&draft("hello", false), false));
}

// =============================================================
// submit_intent
// =============================================================

#[test]
fn submit_intent_hands_over_trimmed_body_once() {
    let mut d = draft("  second \n", true);
    assert_eq!(submit_intent(&mut d, false), Some("second".to_owned()));
    assert_eq!(d, DraftComment::default());
    assert_eq!(submit_intent(&mut d, false), None);
}

#[test]
fn submit_intent_while_busy_keeps_text() {
    let mut d = draft("hello", true);
    assert_eq!(submit_intent(&mut d, true), None);
    assert_eq!(d.body(), "hello");
    assert!(d.is_valid());
}

#[test]
fn submit_intent_on_invalid_draft_keeps_text() {
    let mut d = draft("   ", true);
    assert_eq!(submit_intent(&mut d, false), None);
    assert_eq!(d.body(), "   ");

    let mut anonymous = draft("hello", false);
    assert_eq!(submit_intent(&mut anonymous, false), None);
    assert_eq!(anonymous.body(), "hello");
}

// =============================================================
// Markup
// =============================================================

#[test]
fn anonymous_entry_shows_sign_in_hint() {
    let html = render(false);
    assert!(html.contains("Sign in to leave a comment."));
    assert!(html.contains("comment-form__input"));
}

#[test]
fn signed_in_entry_has_no_hint() {
    let html = render(true);
    assert!(!html.contains("comment-form__hint"));
    assert!(html.contains("comment-form__submit"));
}
