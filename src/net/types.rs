//! Wire DTOs for the workbench REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON (`total_rows`, `end_row`, ...) so
//! responses decode without renaming. Row payloads stay as open JSON maps
//! because column sets are only known at runtime.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a workflow module.
pub type ModuleId = i64;

/// Identifier of a module parameter.
pub type ParamId = i64;

/// A single table row keyed by column name.
pub type Row = Map<String, Value>;

/// A window of rendered table rows returned by the render endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderResponse {
    /// Ordered column names of the whole table.
    #[serde(default)]
    pub columns: Vec<String>,
    /// Row count of the whole table, not just this window.
    pub total_rows: usize,
    /// First row index contained in `rows`.
    #[serde(default)]
    pub start_row: usize,
    /// One past the last row index contained in `rows`.
    pub end_row: usize,
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// Body of a parameter change request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamValue {
    pub value: String,
}

/// A module as listed in the workflow sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WfModule {
    pub id: ModuleId,
    pub name: String,
    /// Bumped by the server whenever this module's output changes.
    #[serde(default)]
    pub revision: i64,
    /// Parameter holding the serialized rename map, for rename modules.
    #[serde(default)]
    pub rename_param: Option<RenameParam>,
}

/// Rename-map parameter attached to a module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameParam {
    pub id: ParamId,
    #[serde(default)]
    pub value: String,
}

/// Response of the input-columns endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputColumns {
    #[serde(default)]
    pub columns: Vec<String>,
}

/// A workflow with its ordered module sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub wf_modules: Vec<WfModule>,
}
