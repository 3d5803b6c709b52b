/// Failure outcomes of a summary request.
///
/// Every request ends in either a `SummaryResult` or one of these variants;
/// nothing escapes the orchestration boundary as a panic. Each variant
/// carries a message fit for direct display to the user.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// The request itself was unusable: empty input or an out-of-range
    /// configuration value.
    #[error("invalid request: {0}")]
    Validation(String),
    /// The summarizer ran but produced nothing usable. Recoverable by
    /// retrying with a higher ratio or longer input.
    #[error("no summary generated: {0}")]
    EmptyOutput(String),
    /// The remote provider or the transport to it failed.
    #[error("remote summarization failed: {0}")]
    Remote(String),
    /// The local summarization adapter reported an unexpected condition.
    #[error("local summarization failed: {0}")]
    Adapter(String),
}
