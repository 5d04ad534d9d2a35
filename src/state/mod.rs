//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each widget's logic lives here as a plain state machine with no browser
//! dependency, so it can be unit tested natively. Components own an instance
//! and translate DOM events and API responses into its operations.

pub mod pane_geometry;
pub mod rename_map;
pub mod table_pager;
pub mod ui;
pub mod workflow;
