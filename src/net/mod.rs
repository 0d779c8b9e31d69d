//! Networking modules for the comments REST endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `store` the async seam the controller
//! depends on, and `api` the browser HTTP implementation of that seam.

pub mod api;
pub mod store;
pub mod types;
