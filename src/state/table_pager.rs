//! Incremental row loading for the output table.
//!
//! DESIGN
//! ======
//! The pager never performs I/O. Operations that need rows hand back a
//! `FetchTicket`; the owning component runs it against the render API and
//! reports the outcome through `complete` or `fail`. The fetch gate lives in
//! the pager rather than in a reactive view snapshot, so `get_row` can read it
//! synchronously on every call the grid makes.
//!
//! Each ticket carries a sequence number. Only the outstanding ticket is ever
//! applied, so a response issued for an older table identity or revision is
//! dropped instead of overwriting newer rows.

#[cfg(test)]
#[path = "table_pager_test.rs"]
mod table_pager_test;

use serde_json::Value;

use crate::net::types::{ModuleId, RenderResponse, Row};

/// Rows requested on mount and on every full reload.
pub const INITIAL_ROWS: usize = 120;
/// Start fetching once the grid asks for a row this close to the loaded edge.
pub const PRELOAD_ROWS: usize = 20;
/// Rows requested per incremental fetch.
pub const DELTA_ROWS: usize = 100;

/// Window sizes used by the pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerConfig {
    pub initial_rows: usize,
    pub preload_rows: usize,
    pub delta_rows: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            initial_rows: INITIAL_ROWS,
            preload_rows: PRELOAD_ROWS,
            delta_rows: DELTA_ROWS,
        }
    }
}

/// Identity of the table being shown: the module and its output revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableKey {
    pub module_id: ModuleId,
    pub revision: i64,
}

/// How a fetched window combines with the rows already loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchMode {
    /// Extend the loaded rows.
    Append,
    /// Discard the loaded rows and start over.
    Replace,
}

/// A row fetch the component must execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub key: TableKey,
    pub from_row: usize,
    pub to_row: usize,
    pub mode: FetchMode,
}

/// Fetch gate. At most one ticket is outstanding at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Fetching(FetchTicket),
    /// The last fetch failed; incremental loads stay off until a reload.
    Failed,
}

/// The loaded portion of a table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableWindow {
    pub columns: Vec<String>,
    pub total_rows: usize,
    pub start_row: usize,
    pub end_row: usize,
    pub rows: Vec<Row>,
}

impl From<RenderResponse> for TableWindow {
    fn from(resp: RenderResponse) -> Self {
        Self {
            columns: resp.columns,
            total_rows: resp.total_rows,
            start_row: resp.start_row,
            end_row: resp.end_row,
            rows: resp.rows,
        }
    }
}

impl TableWindow {
    /// A row with every known column set to null.
    pub fn placeholder_row(&self) -> Row {
        self.columns
            .iter()
            .map(|col| (col.clone(), Value::Null))
            .collect()
    }

    fn append(&mut self, resp: RenderResponse) {
        self.rows.extend(resp.rows);
        self.columns = resp.columns;
        self.total_rows = resp.total_rows;
        self.start_row = 0;
        self.end_row = resp.end_row;
    }
}

/// Result of asking the pager for a row.
#[derive(Clone, Debug, PartialEq)]
pub enum RowLookup<'a> {
    /// No table has loaded yet.
    NoData,
    Loaded(&'a Row),
    /// The row is not loaded yet; all columns are null.
    Placeholder(Row),
}

impl RowLookup<'_> {
    /// Cell value for `column`, or `None` when there is no data at all.
    pub fn cell(&self, column: &str) -> Option<&Value> {
        match self {
            Self::NoData => None,
            Self::Loaded(row) => row.get(column),
            Self::Placeholder(row) => row.get(column),
        }
    }
}

/// Incremental loader for a single table identity.
#[derive(Clone, Debug, Default)]
pub struct TablePager {
    config: PagerConfig,
    key: Option<TableKey>,
    window: Option<TableWindow>,
    fetch: FetchState,
    next_seq: u64,
}

impl TablePager {
    pub fn new(config: PagerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn key(&self) -> Option<TableKey> {
        self.key
    }

    pub fn window(&self) -> Option<&TableWindow> {
        self.window.as_ref()
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetch
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchState::Fetching(_))
    }

    /// One past the last row loaded so far.
    pub fn last_loaded_row(&self) -> usize {
        self.window.as_ref().map_or(0, |w| w.end_row)
    }

    /// First attach: load the initial window for `key`, if any.
    pub fn mount(&mut self, key: Option<TableKey>) -> Option<FetchTicket> {
        self.key = key;
        self.load(self.config.initial_rows)
    }

    /// Fetch rows from the loaded edge up to `through_row`.
    ///
    /// Returns `None` while another fetch is outstanding, after a failure, or
    /// when there is no table to load.
    pub fn load(&mut self, through_row: usize) -> Option<FetchTicket> {
        if self.fetch != FetchState::Idle {
            return None;
        }
        let key = self.key?;
        let from_row = self.last_loaded_row();
        Some(self.issue(key, from_row, through_row, FetchMode::Append))
    }

    /// Start over with a fresh initial window for `key`.
    ///
    /// Loaded rows stay in place until the response arrives. Any outstanding
    /// fetch is superseded.
    pub fn reload(&mut self, key: TableKey) -> FetchTicket {
        self.key = Some(key);
        self.issue(key, 0, self.config.initial_rows, FetchMode::Replace)
    }

    /// React to new props. Reloads only when the identity or revision changed.
    pub fn update(&mut self, key: Option<TableKey>) -> Option<FetchTicket> {
        if key == self.key {
            return None;
        }
        if let Some(key) = key {
            Some(self.reload(key))
        } else {
            self.key = None;
            self.window = None;
            self.fetch = FetchState::Idle;
            None
        }
    }

    /// Row accessor for the grid.
    ///
    /// Asking for a row within `preload_rows` of the loaded edge also yields the
    /// next fetch to run, unless one is already outstanding.
    pub fn get_row(&mut self, index: usize) -> (RowLookup<'_>, Option<FetchTicket>) {
        let ticket = self.preload_for(index);
        let lookup = match &self.window {
            None => RowLookup::NoData,
            Some(window) => match window.rows.get(index) {
                Some(row) if index < window.end_row => RowLookup::Loaded(row),
                _ => RowLookup::Placeholder(window.placeholder_row()),
            },
        };
        (lookup, ticket)
    }

    /// Apply a fetched window. Returns `false` if the ticket is stale.
    pub fn complete(&mut self, ticket: FetchTicket, response: RenderResponse) -> bool {
        if self.fetch != FetchState::Fetching(ticket) {
            return false;
        }
        self.fetch = FetchState::Idle;
        match (ticket.mode, self.window.as_mut()) {
            (FetchMode::Append, Some(window)) => window.append(response),
            _ => self.window = Some(TableWindow::from(response)),
        }
        true
    }

    /// Record a failed fetch. Returns `false` if the ticket is stale.
    pub fn fail(&mut self, ticket: FetchTicket) -> bool {
        if self.fetch != FetchState::Fetching(ticket) {
            return false;
        }
        self.fetch = FetchState::Failed;
        true
    }

    fn preload_for(&mut self, index: usize) -> Option<FetchTicket> {
        let window = self.window.as_ref()?;
        let loaded = window.end_row;
        let total = window.total_rows;
        let target = index.saturating_add(self.config.preload_rows).min(total);
        if target <= loaded {
            return None;
        }
        self.load((loaded + self.config.delta_rows).min(total))
    }

    fn issue(&mut self, key: TableKey, from_row: usize, to_row: usize, mode: FetchMode) -> FetchTicket {
        self.next_seq += 1;
        let ticket = FetchTicket {
            seq: self.next_seq,
            key,
            from_row,
            to_row,
            mode,
        };
        self.fetch = FetchState::Fetching(ticket);
        ticket
    }
}
