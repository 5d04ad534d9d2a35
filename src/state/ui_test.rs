use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert!(!state.library_open);
    assert!(!state.output_focus);
    assert!(!state.output_overlapping);
    assert!(!state.load_all_columns);
}
