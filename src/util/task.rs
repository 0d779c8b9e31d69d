//! Hand-off point for futures produced by the controller.
//!
//! In the browser they run on Leptos' local executor. Native builds have no
//! event loop to drive them, so they are dropped unpolled.

use std::future::Future;

pub fn spawn_request(request: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(request);
    #[cfg(not(feature = "csr"))]
    drop(request);
}
