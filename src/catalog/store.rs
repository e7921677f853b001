use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::{BookRecord, Draft};

/// Whether empty fields block add and update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitGuard {
    /// Reject drafts with any empty (trimmed) field
    #[default]
    Enforce,
    /// Accept any draft, empty fields included
    Off,
}

/// Ordered in-memory list of book records
///
/// Every record's sequence number is its 1-based position. Appends number
/// the new record `len + 1`, removals renumber everything after the hole.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<BookRecord>,
    editing: Option<usize>,
    guard: SubmitGuard,
}

impl CatalogStore {
    /// Create an empty store that enforces the empty-field guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with an explicit guard
    pub fn with_guard(guard: SubmitGuard) -> Self {
        Self {
            guard,
            ..Self::default()
        }
    }

    pub fn guard(&self) -> SubmitGuard {
        self.guard
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&BookRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the record being edited, if any
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn is_editing(&self, index: usize) -> bool {
        self.editing == Some(index)
    }

    /// Button state for a draft: false means add/update is disabled
    pub fn can_submit(&self, draft: &Draft) -> bool {
        match self.guard {
            SubmitGuard::Enforce => draft.is_complete(),
            SubmitGuard::Off => true,
        }
    }

    /// Append a record built from `draft`
    ///
    /// Returns the new sequence number, or `None` when the guard rejects the
    /// draft. Rejection leaves the store untouched.
    pub fn append(&mut self, draft: &Draft) -> Option<u32> {
        if !self.can_submit(draft) {
            debug!(missing = ?draft.missing_fields(), "append rejected by submit guard");
            return None;
        }

        let sequence_number = self.next_sequence_number();
        self.records.push(BookRecord::from_draft(sequence_number, draft));
        debug!(sequence_number, title = %draft.title, "appended record");
        Some(sequence_number)
    }

    /// Mark `index` as the edit target and copy its fields into a draft
    pub fn begin_edit(&mut self, index: usize) -> Option<Draft> {
        let draft = match self.records.get(index) {
            Some(record) => record.to_draft(),
            None => {
                debug!(index, len = self.records.len(), "begin_edit out of range");
                return None;
            }
        };
        self.editing = Some(index);
        debug!(index, "editing record");
        Some(draft)
    }

    /// Replace the textual fields at `index`, keeping its position number
    ///
    /// A draft the guard rejects is a no-op and edit mode stays active.
    /// Otherwise edit mode is cleared, even when `index` is out of range.
    pub fn commit_edit(&mut self, index: usize, draft: &Draft) -> bool {
        if !self.can_submit(draft) {
            debug!(index, missing = ?draft.missing_fields(), "commit rejected by submit guard");
            return false;
        }

        self.editing = None;
        if index >= self.records.len() {
            debug!(index, len = self.records.len(), "commit_edit out of range");
            return false;
        }

        self.records[index] = BookRecord::from_draft(position_number(index), draft);
        debug!(index, "committed edit");
        true
    }

    /// Leave edit mode without touching the list
    pub fn cancel_edit(&mut self) {
        if let Some(index) = self.editing.take() {
            debug!(index, "edit cancelled");
        }
    }

    /// Delete the record at `index` and renumber the rest
    ///
    /// The edit target is not adjusted: removing the row being edited (or one
    /// above it) leaves edit mode pointing at whatever now sits at that index.
    pub fn remove(&mut self, index: usize) -> Option<BookRecord> {
        if index >= self.records.len() {
            debug!(index, len = self.records.len(), "remove out of range");
            return None;
        }

        let removed = self.records.remove(index);
        self.renumber();
        debug!(
            index,
            sequence_number = removed.sequence_number(),
            remaining = self.records.len(),
            "removed record"
        );
        Some(removed)
    }

    fn renumber(&mut self) {
        for (position, record) in self.records.iter_mut().enumerate() {
            record.renumber(position_number(position));
        }
    }

    fn next_sequence_number(&self) -> u32 {
        position_number(self.records.len())
    }
}

fn position_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
