//! UI components for the workflow page.

pub mod module_library;
pub mod module_stack;
pub mod output_pane;
pub mod rename_entries;
pub mod table_view;
