use std::fmt::{Debug, Display};

/// An extractive summarizer running entirely in-process.
///
/// Given source text and a retention ratio, implementations return a reduced
/// text made of the highest-ranked sentences. An empty return value means the
/// input was too short (or the ratio too low) to keep anything; that is an
/// expected outcome, not an error.
pub trait LocalSummarizer {
    type Error: Debug + Display;

    fn summarize(&self, text: &str, ratio: f32) -> Result<String, Self::Error>;
}
