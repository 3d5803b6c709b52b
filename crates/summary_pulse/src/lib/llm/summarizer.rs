use std::fmt::Debug;
use std::future::Future;

/// A hosted generative model that turns an instruction into free text.
pub trait RemoteSummarizer {
    /// Model identifier sent to the provider.
    const MODEL: &'static str;
    /// Input token budget, with room reserved for the model's reply.
    const CONTEXT_WINDOW_LIMIT: usize = 128_000;

    type Error: Debug + Into<RemoteFailure>;

    fn summarize(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<RemoteSummary, Self::Error>>;
}

/// The provider's reply, reduced to the part this system consumes.
#[derive(Debug, Clone)]
pub struct RemoteSummary {
    pub text: String,
}

/// Classified remote-call outcomes, shared by every provider client.
///
/// `EmptyResponse` is kept apart from `MalformedResponse` on purpose: a
/// structurally valid reply without text is a retry-with-other-parameters
/// situation, while a payload we cannot decode is a provider-side fault.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoteFailure {
    #[error("the provider returned no summary text")]
    EmptyResponse,
    #[error("the request timed out")]
    Timeout,
    #[error("provider error: {status} - {message}")]
    Provider { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unrecognized response payload: {0}")]
    MalformedResponse(String),
}
