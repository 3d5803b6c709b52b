pub mod builder;

use summary_history::{HistoryEntry, HistoryStore, SourceMode, SummaryResult};

use crate::embedding::{EmbeddingConfig, SentenceModel};
use crate::llm::{token_count, RemoteFailure, RemoteSummarizer};
use crate::text::{tokenize, LocalSummarizer};
use crate::types::{
    LocalStyle, RemoteStyle, SummaryMode, SummaryRequest, LOCAL_RATIO_BOUNDS,
    REMOTE_LENGTH_BOUNDS,
};
use crate::SummaryError;

/// One user's summarization session: the two summarization paths, their
/// shared validation, and the session-scoped history.
///
/// All state lives here; there is no ambient global. A session is created
/// when the user arrives and dropped when they leave.
pub struct SummarySession<L, R, H>
where
    L: LocalSummarizer + Send + Sync + 'static,
    R: RemoteSummarizer + Send + Sync + 'static,
    H: HistoryStore + Send + Sync + 'static,
{
    local: L,
    remote: R,
    history: H,
    embedding_config: EmbeddingConfig,
}

impl<L, R, H> SummarySession<L, R, H>
where
    L: LocalSummarizer + Send + Sync + 'static,
    R: RemoteSummarizer + Send + Sync + 'static,
    H: HistoryStore + Send + Sync + 'static,
{
    /// Produces a summary for `request` over the given path.
    ///
    /// On success the result is appended to the session history. Failures
    /// leave the session untouched and are returned as typed
    /// [`SummaryError`] values; nothing here panics on user input.
    #[tracing::instrument(skip(self, request))]
    pub async fn produce_summary(
        &mut self,
        request: &SummaryRequest,
        mode: SummaryMode,
    ) -> Result<SummaryResult, SummaryError> {
        let text = request.raw_text.trim();
        if text.is_empty() {
            return Err(SummaryError::Validation(
                "please enter some text before summarizing".into(),
            ));
        }
        if !request.ratio.is_finite() {
            return Err(SummaryError::Validation(format!(
                "ratio must be a finite number, got {}",
                request.ratio
            )));
        }

        let result = match mode {
            SummaryMode::Local { style } => self.summarize_local(text, request.ratio, style)?,
            SummaryMode::Remote { style } => {
                self.summarize_remote(text, request.ratio, style).await?
            }
        };

        self.history
            .append(HistoryEntry::new(&request.raw_text, result.clone()));

        Ok(result)
    }

    fn summarize_local(
        &self,
        text: &str,
        ratio: f32,
        style: LocalStyle,
    ) -> Result<SummaryResult, SummaryError> {
        let ratio = LOCAL_RATIO_BOUNDS.clamp(ratio);
        tracing::debug!(style = style.as_str(), ratio, "Running extractive summarization");

        let summary = self
            .local
            .summarize(text, ratio)
            .map_err(|e| SummaryError::Adapter(e.to_string()))?;

        if summary.trim().is_empty() {
            return Err(SummaryError::EmptyOutput(
                "no sentences were retained; try increasing the ratio or providing a longer text"
                    .into(),
            ));
        }

        Ok(SummaryResult::new(summary, SourceMode::Local))
    }

    async fn summarize_remote(
        &self,
        text: &str,
        length_factor: f32,
        style: RemoteStyle,
    ) -> Result<SummaryResult, SummaryError> {
        let length_factor = REMOTE_LENGTH_BOUNDS.clamp(length_factor);
        let prompt = build_instruction(text, style, length_factor);

        let prompt_tokens = token_count(&prompt);
        if prompt_tokens > R::CONTEXT_WINDOW_LIMIT {
            return Err(SummaryError::Validation(format!(
                "input is too long for {}: {} tokens exceed the {}-token budget",
                R::MODEL,
                prompt_tokens,
                R::CONTEXT_WINDOW_LIMIT
            )));
        }

        tracing::debug!(style = style.as_str(), prompt_tokens, "Requesting remote summary");

        match self.remote.summarize(&prompt).await {
            Ok(reply) if reply.text.trim().is_empty() => Err(SummaryError::EmptyOutput(
                "the provider returned no summary text".into(),
            )),
            Ok(reply) => Ok(SummaryResult::new(
                reply.text.trim().to_string(),
                SourceMode::Remote,
            )),
            Err(e) => match e.into() {
                RemoteFailure::EmptyResponse => Err(SummaryError::EmptyOutput(
                    "the provider returned no summary text".into(),
                )),
                failure => Err(SummaryError::Remote(failure.to_string())),
            },
        }
    }

    /// Trains the per-request embedding model used for similar-word lookups
    /// in local mode. The model covers exactly the vocabulary of `raw_text`.
    #[tracing::instrument(skip_all)]
    pub fn train_embedding_model(&self, raw_text: &str) -> Result<SentenceModel, SummaryError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(SummaryError::Validation(
                "please enter some text before training embeddings".into(),
            ));
        }

        let sentences = tokenize::tokenized_sentences(text);
        SentenceModel::train(&sentences, &self.embedding_config)
            .map_err(|e| SummaryError::Adapter(e.to_string()))
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// The natural-language instruction sent to the remote provider, embedding
/// the style label and the length factor as an integer percentage.
fn build_instruction(text: &str, style: RemoteStyle, length_factor: f32) -> String {
    let percent = (length_factor * 100.0).round() as u32;
    format!(
        "Summarize the following text in a {} manner with about {}% of the original content:\n\n{}",
        style.as_str(),
        percent,
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_embeds_style_and_rounded_percentage() {
        let prompt = build_instruction("Some text.", RemoteStyle::Brief, 0.5);
        assert!(prompt.starts_with(
            "Summarize the following text in a brief manner with about 50% of the original content:"
        ));
        assert!(prompt.ends_with("Some text."));
    }

    #[test]
    fn percentage_rounds_to_nearest_integer() {
        let prompt = build_instruction("t", RemoteStyle::Concise, 0.333);
        assert!(prompt.contains("about 33%"));

        let prompt = build_instruction("t", RemoteStyle::Detailed, 0.666);
        assert!(prompt.contains("about 67%"));
    }
}
