pub mod gemini;
mod summarizer;
mod tokens;

pub(crate) use tokens::token_count;
pub use summarizer::{RemoteFailure, RemoteSummarizer, RemoteSummary};
