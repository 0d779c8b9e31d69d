//! Comment panel: entry form above the list, wired to one controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is the only writer. This component mirrors its snapshots
//! into a signal, forwards form submits and retry clicks to it, and spawns
//! the request futures it returns.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::comment_entry::CommentEntry;
use crate::components::comment_list::CommentList;
use crate::controller::CommentPanelController;
use crate::error::PanelError;
use crate::net::store::CommentStore;
use crate::state::panel::PanelState;
use crate::util::markdown::MarkdownRenderer;
use crate::util::task::spawn_request;

#[component]
pub fn CommentPanel<S: CommentStore + 'static>(
    controller: CommentPanelController<S>,
    renderer: Arc<dyn MarkdownRenderer>,
) -> impl IntoView {
    let state = RwSignal::new(controller.snapshot());
    controller.on_change(move |snapshot| state.set(snapshot.clone()));

    let author_present = controller.author().is_some();
    let controller = StoredValue::new_local(controller);

    let on_submit = Callback::new(move |body: String| {
        controller.with_value(|c| match c.submit(&body) {
            Ok(request) => spawn_request(request),
            Err(e) => log::debug!("comment not submitted: {e}"),
        });
    });

    let on_retry = move |_| controller.with_value(|c| spawn_request(c.load()));

    let busy = Signal::derive(move || state.with(|s| s.is_pending() || s.is_loading()));

    view! {
        <div class="comment-box">
            <CommentEntry author_present=author_present busy=busy on_submit=on_submit/>
            {move || {
                state
                    .with(PanelState::last_error)
                    .map(|error| {
                        view! {
                            <div class="alert alert-warning comment-box__notice" role="alert">
                                <span>{error.to_string()}</span>
                                {(error == PanelError::FetchFailed)
                                    .then(|| {
                                        view! {
                                            <button class="btn btn-link comment-box__retry" on:click=on_retry>
                                                "Retry"
                                            </button>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
            <CommentList state=state renderer=renderer/>
        </div>
    }
}
