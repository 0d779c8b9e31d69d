//! Comment entry form.
//!
//! Owns the draft text. Submitting hands the trimmed body to the panel and
//! empties the field straight away, whatever the request's eventual outcome.

#[cfg(test)]
#[path = "comment_entry_test.rs"]
mod comment_entry_test;

use leptos::prelude::*;

use crate::state::draft::DraftComment;

/// Whether the post button is enabled.
pub fn can_post(draft: &DraftComment, busy: bool) -> bool {
    draft.is_valid() && !busy
}

/// Body to hand to the panel for one submit intent.
///
/// While busy nothing is taken and the text stays put. Otherwise a valid
/// draft is emptied and its trimmed body returned.
pub fn submit_intent(draft: &mut DraftComment, busy: bool) -> Option<String> {
    if busy {
        return None;
    }
    draft.take_submission()
}

#[component]
pub fn CommentEntry(
    /// A signed-in author is known to the page.
    author_present: bool,
    /// A request is in flight; submits are refused and the text is kept.
    #[prop(into)]
    busy: Signal<bool>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let draft = RwSignal::new(DraftComment::default());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let busy = busy.get_untracked();
        let mut submission = None;
        draft.update(|d| submission = submit_intent(d, busy));
        if let Some(body) = submission {
            on_submit.run(body);
        }
    };

    view! {
        <div class="comment-form">
            <form class="comment-form__form" role="form" on:submit=on_form_submit>
                <input
                    class="comment-form__input"
                    type="text"
                    placeholder="Say something..."
                    disabled=!author_present
                    prop:value=move || draft.with(|d| d.body().to_owned())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        draft.update(|d| d.on_body_change(text, author_present));
                    }
                />
                <input
                    class="btn btn--primary comment-form__submit"
                    type="submit"
                    value="Post"
                    disabled=move || !draft.with(|d| can_post(d, busy.get()))
                />
            </form>
            {(!author_present)
                .then(|| view! { <p class="comment-form__hint">"Sign in to leave a comment."</p> })}
        </div>
    }
}
