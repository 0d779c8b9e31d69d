//! Utility helpers shared across the panel modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser/environment concerns (task spawning, HTML rendering) are kept out
//! of the controller and views so both stay testable natively.

pub mod markdown;
pub mod task;
