use itertools::Itertools;

use crate::{HistoryEntry, HistoryStore};

/// In-memory history owned by a single interactive session.
///
/// Grows without bound within the session and is discarded with it; there is
/// no durable persistence.
#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for SessionHistory {
    fn append(&mut self, entry: HistoryEntry) {
        tracing::debug!(title = %entry.title, "Appending history entry");
        self.entries.push(entry);
    }

    fn clear(&mut self) {
        tracing::debug!(count = self.entries.len(), "Clearing history");
        self.entries.clear();
    }

    fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    fn export_text(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        Some(self.entries.iter().map(HistoryEntry::export_block).join("\n\n"))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
