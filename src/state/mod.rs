//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `panel` is the authoritative collection owned by the controller; `draft`
//! is the entry form's private text buffer. Neither knows about networking.

pub mod draft;
pub mod panel;
