//! # Summary History
//!
//! This crate provides session-scoped bookkeeping for generated summaries:
//! the domain types produced by a summarization run, and an ordered
//! in-memory history of them.
//!
//! A history lives only for the duration of one interactive session. It is
//! appended to on every successful summary, cleared on explicit user action,
//! and can be exported as a plain-text artifact.

mod domain;
mod store;

pub use domain::{HistoryEntry, SourceMode, SummaryResult};
pub use store::memory::SessionHistory;
pub use store::HistoryStore;
