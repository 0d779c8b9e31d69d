//! # comment-panel
//!
//! Leptos + WASM comment thread for blog articles: loads an article's
//! comments from the REST API, renders them as markdown, and posts new ones.
//!
//! The `controller` owns the authoritative collection and is independent of
//! the browser; `components` are thin views over its snapshots. Build with
//! the `csr` feature for the browser; native builds run the full state
//! machine in tests against in-memory stores.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod state;
pub mod util;
