//! Root comment box component and the browser mount entry.
//!
//! The server-rendered article page includes an empty `#comment-box`
//! element; the WASM start hook reads its dataset and mounts the panel
//! into it.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use crate::components::comment_panel::CommentPanel;
use crate::config::PanelConfig;
use crate::controller::CommentPanelController;
use crate::net::api::HttpCommentStore;
use crate::net::store::CommentStore;
use crate::util::markdown::{MarkdownRenderer, PulldownMarkdown};
use crate::util::task::spawn_request;

/// Comment panel for one article, backed by the REST API.
#[component]
pub fn CommentBox(config: PanelConfig) -> impl IntoView {
    let store = Rc::new(HttpCommentStore::new(config.articles_base));
    let (controller, initial_load) = CommentPanelController::initialize(store, config.article_id, config.author);
    spawn_request(initial_load);

    if let Some(period) = config.poll_interval {
        start_polling(controller.clone(), period);
    }

    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(PulldownMarkdown);
    view! { <CommentPanel controller=controller renderer=renderer/> }
}

/// Reload on a fixed period until the owning component is cleaned up.
fn start_polling<S: CommentStore + 'static>(controller: CommentPanelController<S>, period: Duration) {
    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                controller.load().await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (controller, period);
    }
}

/// WASM start hook: install logging, then mount into `#comment-box`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_comment_box();
}

/// Mount the panel into the host element, if the page has one.
#[cfg(feature = "csr")]
pub fn mount_comment_box() {
    use wasm_bindgen::JsCast;

    use crate::config::MOUNT_ELEMENT_ID;

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID))
    else {
        log::debug!("no #{MOUNT_ELEMENT_ID} element on this page");
        return;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        log::warn!("#{MOUNT_ELEMENT_ID} is not an HTML element");
        return;
    };

    let dataset = element.dataset();
    let config = match PanelConfig::from_dataset(|key| dataset.get(key)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("comment panel not mounted: {e}");
            return;
        }
    };

    leptos::mount::mount_to(element, move || view! { <CommentBox config=config/> }).forget();
}
