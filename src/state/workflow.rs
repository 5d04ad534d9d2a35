//! Workflow store: the ordered module sequence and current selection.
//!
//! Provided as `RwSignal<WorkflowState>` context from `App`.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use crate::net::types::{ModuleId, ParamId, WfModule};

#[derive(Clone, Debug, Default)]
pub struct WorkflowState {
    pub modules: Vec<WfModule>,
    pub selected_module_id: Option<ModuleId>,
    pub read_only: bool,
}

impl WorkflowState {
    pub fn module(&self, id: ModuleId) -> Option<&WfModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn selected_module(&self) -> Option<&WfModule> {
        self.selected_module_id.and_then(|id| self.module(id))
    }

    pub fn module_index(&self, id: ModuleId) -> Option<usize> {
        self.modules.iter().position(|m| m.id == id)
    }

    /// Module immediately before `id` in the sequence.
    pub fn preceding_module(&self, id: ModuleId) -> Option<ModuleId> {
        let idx = self.module_index(id)?;
        idx.checked_sub(1).map(|prev| self.modules[prev].id)
    }

    pub fn select_module(&mut self, id: ModuleId) {
        if self.module(id).is_some() {
            self.selected_module_id = Some(id);
        }
    }

    /// Remove a module from the sequence. Clears the selection if it pointed there.
    pub fn remove_module(&mut self, id: ModuleId) -> Option<WfModule> {
        let idx = self.module_index(id)?;
        if self.selected_module_id == Some(id) {
            self.selected_module_id = None;
        }
        Some(self.modules.remove(idx))
    }

    /// Drop a module the server deleted and select the module that preceded it.
    ///
    /// Returns the newly selected module. The first module has no
    /// predecessor, so the selection is left as `remove_module` leaves it.
    pub fn delete_and_select_previous(&mut self, id: ModuleId) -> Option<ModuleId> {
        let preceding = self.preceding_module(id);
        self.remove_module(id)?;
        let prev = preceding?;
        self.select_module(prev);
        Some(prev)
    }

    /// Record a parameter value the server accepted.
    pub fn set_param_value(&mut self, param_id: ParamId, value: &str) {
        for module in &mut self.modules {
            if let Some(param) = module.rename_param.as_mut() {
                if param.id == param_id {
                    value.clone_into(&mut param.value);
                }
            }
        }
    }
}
