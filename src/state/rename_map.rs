//! Column rename mapping owned by a rename module.
//!
//! DESIGN
//! ======
//! The mapping is persisted upstream as a JSON object string in a module
//! parameter. Local edits return a `RenameEffect` naming the upstream call to
//! make; the caller performs it. Entry order follows the serialized object so
//! the editor rows stay stable while the user works.
//!
//! ERROR HANDLING
//! ==============
//! A parameter that is not a JSON object of strings decodes to an empty map.
//! Bad upstream state must never take the editor down.

#[cfg(test)]
#[path = "rename_map_test.rs"]
mod rename_map_test;

use serde_json::{Map, Value};

/// Upstream call required after a local change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenameEffect {
    /// Nothing changed.
    None,
    /// Persist this serialized map to the rename parameter.
    WriteParam(String),
    /// The map is empty: delete the owning module.
    DeleteModule,
}

/// Ordered mapping from original column name to new name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenameMap {
    entries: Map<String, Value>,
}

impl RenameMap {
    /// Best-effort decode of a serialized parameter value.
    pub fn parse(raw: &str) -> Self {
        let Ok(entries) = serde_json::from_str::<Map<String, Value>>(raw) else {
            return Self::default();
        };
        if !entries.values().all(Value::is_string) {
            return Self::default();
        }
        Self { entries }
    }

    /// "Rename all": every input column mapped to itself.
    pub fn identity(columns: &[String]) -> Self {
        let entries = columns
            .iter()
            .map(|col| (col.clone(), Value::String(col.clone())))
            .collect();
        Self { entries }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| String::from("{}"))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).and_then(Value::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.as_str(), v)))
    }

    /// Map `original` to `renamed`. Unchanged values produce no write.
    pub fn rename(&mut self, original: &str, renamed: &str) -> RenameEffect {
        if self.get(original) == Some(renamed) {
            return RenameEffect::None;
        }
        self.entries
            .insert(original.to_owned(), Value::String(renamed.to_owned()));
        RenameEffect::WriteParam(self.to_json())
    }

    /// Drop the entry for `original`.
    pub fn delete(&mut self, original: &str) -> RenameEffect {
        if self.entries.shift_remove(original).is_none() {
            return RenameEffect::None;
        }
        if self.entries.is_empty() {
            RenameEffect::DeleteModule
        } else {
            RenameEffect::WriteParam(self.to_json())
        }
    }
}

/// Keystroke buffer for a single rename input.
///
/// Typing only touches the buffer. `confirm` (blur or Enter) yields the value
/// to write when it differs from the last known upstream value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryDraft {
    committed: String,
    buffer: String,
}

impl EntryDraft {
    pub fn new(committed: &str) -> Self {
        Self {
            committed: committed.to_owned(),
            buffer: committed.to_owned(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer != self.committed
    }

    pub fn edit(&mut self, value: String) {
        self.buffer = value;
    }

    pub fn confirm(&mut self) -> Option<String> {
        if !self.is_dirty() {
            return None;
        }
        self.committed.clone_from(&self.buffer);
        Some(self.buffer.clone())
    }

    /// Adopt a new upstream value, discarding local typing if it changed.
    pub fn sync_upstream(&mut self, upstream: &str) {
        if self.committed != upstream {
            self.committed = upstream.to_owned();
            self.buffer = upstream.to_owned();
        }
    }
}
