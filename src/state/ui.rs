#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Layout state shared by the workflow page and the output pane.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Module library (sibling panel) expanded.
    pub library_open: bool,
    pub output_focus: bool,
    /// Output pane extends over the module column.
    pub output_overlapping: bool,
    /// Set by the toolbar to rebuild the rename map from every input column.
    pub load_all_columns: bool,
}
