pub mod embedding;
mod error;
mod llm;
mod session;
pub mod text;
pub mod tracing;
pub mod types;

pub use error::SummaryError;
pub use llm::gemini;
pub use llm::{RemoteFailure, RemoteSummarizer, RemoteSummary};
pub use session::{builder::SummarySessionBuilder, SummarySession};
pub use text::{LocalSummarizer, TextRankSummarizer};
