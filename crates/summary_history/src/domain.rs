use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Number of input characters kept when deriving a history entry title.
const TITLE_CHARS: usize = 30;

/// Which summarization path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceMode {
    Local,
    Remote,
}

/// A successfully generated summary. Created once per request and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary_text: String,
    pub word_count: usize,
    pub generated_at: DateTime<Utc>,
    pub source_mode: SourceMode,
}

impl SummaryResult {
    /// Wraps freshly generated summary text, counting its
    /// whitespace-delimited words.
    pub fn new(summary_text: impl Into<String>, source_mode: SourceMode) -> Self {
        let summary_text = summary_text.into();
        let word_count = summary_text.split_whitespace().count();

        SummaryResult {
            summary_text,
            word_count,
            generated_at: Utc::now(),
            source_mode,
        }
    }
}

/// One history record, owned exclusively by the session history. Appended on
/// success, removable only by a full clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub summary: SummaryResult,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Builds an entry for the given source text, deriving the title from
    /// its leading characters.
    pub fn new(raw_text: &str, summary: SummaryResult) -> Self {
        HistoryEntry {
            title: derive_title(raw_text),
            summary,
            timestamp: Utc::now(),
        }
    }

    /// Renders the three-line export block for this entry.
    ///
    /// Titles and summaries are flattened onto a single line each so the
    /// `Title / Summary / Timestamp` shape survives multi-line summaries.
    pub fn export_block(&self) -> String {
        format!(
            "Title: {}\nSummary: {}\nTimestamp: {}",
            self.title,
            flatten_whitespace(&self.summary.summary_text),
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

fn derive_title(raw_text: &str) -> String {
    let mut title: String = flatten_whitespace(raw_text).chars().take(TITLE_CHARS).collect();
    title.push_str("...");
    title
}

fn flatten_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}
