//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so components stay readable and state modules stay browser-free.

pub mod resize;
pub mod viewport;
