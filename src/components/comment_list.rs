//! Comment list view: one keyed entry per comment, newest state in, HTML out.
//!
//! Holds no state and never touches the network. Failure notices live in
//! the panel; the list only distinguishes "still loading", "load failed
//! with nothing to show" and "genuinely empty".

#[cfg(test)]
#[path = "comment_list_test.rs"]
mod comment_list_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::error::PanelError;
use crate::net::types::Comment;
use crate::state::panel::PanelState;
use crate::util::markdown::MarkdownRenderer;

/// What the list area shows besides the comments themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    /// First load still in flight.
    Loading,
    /// Nothing loaded and the last load failed.
    Unavailable,
    /// Loaded, zero comments.
    Empty,
    /// At least one comment to show.
    Populated,
}

pub fn list_status(state: &PanelState) -> ListStatus {
    if !state.comments().is_empty() {
        ListStatus::Populated
    } else if state.last_error() == Some(PanelError::FetchFailed) {
        ListStatus::Unavailable
    } else if !state.has_loaded() {
        ListStatus::Loading
    } else {
        ListStatus::Empty
    }
}

#[component]
pub fn CommentList(#[prop(into)] state: Signal<PanelState>, renderer: Arc<dyn MarkdownRenderer>) -> impl IntoView {
    let status = move || state.with(list_status);

    view! {
        <ul class="comment-list">
            {move || match status() {
                ListStatus::Loading => {
                    Some(view! { <li class="comment-list__placeholder">"Loading comments..."</li> }.into_any())
                }
                ListStatus::Empty => {
                    Some(
                        view! { <li class="comment-list__placeholder comment-list__placeholder--empty">"No comments yet."</li> }
                            .into_any(),
                    )
                }
                ListStatus::Unavailable | ListStatus::Populated => None,
            }}
            <For
                each=move || state.with(|s| s.comments().to_vec())
                key=|comment: &Comment| comment.id.clone()
                children=move |comment: Comment| {
                    let rendered = renderer.render(&comment.body);
                    view! {
                        <li class="comment">
                            <span class="comment__author">{comment.author_display_name}</span>
                            <span class="comment__date">{comment.created_at}</span>
                            <div class="comment__body" inner_html=rendered></div>
                        </li>
                    }
                }
            />
        </ul>
    }
}
