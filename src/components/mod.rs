//! Comment panel UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `comment_panel` composes `comment_entry` (the form) and `comment_list`
//! (the rendered thread) around a single controller.

pub mod comment_entry;
pub mod comment_list;
pub mod comment_panel;
