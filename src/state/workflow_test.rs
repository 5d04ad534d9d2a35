use super::*;
use crate::net::types::RenameParam;
use crate::state::rename_map::{RenameEffect, RenameMap};

fn module(id: ModuleId) -> WfModule {
    WfModule {
        id,
        name: format!("module {id}"),
        revision: 1,
        rename_param: None,
    }
}

fn workflow() -> WorkflowState {
    WorkflowState {
        modules: vec![module(10), module(20), module(30)],
        selected_module_id: Some(30),
        read_only: false,
    }
}

#[test]
fn workflow_state_defaults() {
    let state = WorkflowState::default();
    assert!(state.modules.is_empty());
    assert!(state.selected_module().is_none());
    assert!(!state.read_only);
}

#[test]
fn preceding_module_follows_sequence_order() {
    let state = workflow();
    assert_eq!(state.preceding_module(30), Some(20));
    assert_eq!(state.preceding_module(20), Some(10));
}

#[test]
fn first_module_has_no_predecessor() {
    let state = workflow();
    assert_eq!(state.preceding_module(10), None);
    assert_eq!(state.preceding_module(99), None);
}

#[test]
fn select_ignores_unknown_modules() {
    let mut state = workflow();
    state.select_module(99);
    assert_eq!(state.selected_module_id, Some(30));
    state.select_module(10);
    assert_eq!(state.selected_module().map(|m| m.id), Some(10));
}

#[test]
fn remove_selected_module_clears_selection() {
    let mut state = workflow();
    let removed = state.remove_module(30).expect("removed");
    assert_eq!(removed.id, 30);
    assert_eq!(state.modules.len(), 2);
    assert!(state.selected_module_id.is_none());
    assert!(state.remove_module(30).is_none());
}

#[test]
fn set_param_value_updates_matching_param_only() {
    let mut state = workflow();
    state.modules[1].rename_param = Some(RenameParam {
        id: 5,
        value: "{}".to_owned(),
    });
    state.set_param_value(5, r#"{"a":"b"}"#);
    state.set_param_value(6, "ignored");
    let param = state.modules[1].rename_param.as_ref().expect("param");
    assert_eq!(param.value, r#"{"a":"b"}"#);
}

// =============================================================
// Deleting an emptied rename module
// =============================================================

fn rename_module(id: ModuleId, value: &str) -> WfModule {
    WfModule {
        rename_param: Some(RenameParam {
            id: id * 10,
            value: value.to_owned(),
        }),
        ..module(id)
    }
}

#[test]
fn deleting_last_rename_entry_deletes_module_and_selects_previous() {
    let mut state = WorkflowState {
        modules: vec![module(10), rename_module(20, r#"{"a":"a"}"#), module(30)],
        selected_module_id: Some(20),
        read_only: false,
    };
    let mut map = RenameMap::parse(r#"{"a":"a"}"#);
    // Removing the only entry asks for module deletion, never a param write.
    assert_eq!(map.delete("a"), RenameEffect::DeleteModule);

    assert_eq!(state.delete_and_select_previous(20), Some(10));
    assert_eq!(state.selected_module_id, Some(10));
    let ids: Vec<ModuleId> = state.modules.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![10, 30]);
    // The rename param went with the module; nothing was rewritten.
    assert!(state.modules.iter().all(|m| m.rename_param.is_none()));
}

#[test]
fn deleting_first_module_leaves_selection_empty() {
    let mut state = WorkflowState {
        modules: vec![rename_module(10, r#"{"a":"a"}"#), module(20)],
        selected_module_id: Some(10),
        read_only: false,
    };
    assert_eq!(state.delete_and_select_previous(10), None);
    assert!(state.selected_module_id.is_none());
    assert_eq!(state.modules.len(), 1);
}

#[test]
fn deleting_unknown_module_changes_nothing() {
    let mut state = workflow();
    assert_eq!(state.delete_and_select_previous(99), None);
    assert_eq!(state.modules.len(), 3);
    assert_eq!(state.selected_module_id, Some(30));
}
