use summary_history::HistoryStore;

use crate::embedding::EmbeddingConfig;
use crate::llm::RemoteSummarizer;
use crate::text::LocalSummarizer;
use crate::SummarySession;

/// Assembles a [`SummarySession`] from its three seams. Each component must
/// be supplied exactly once before `build` becomes available.
pub struct SummarySessionBuilder<L = (), R = (), H = ()> {
    local: L,
    remote: R,
    history: H,
    embedding_config: EmbeddingConfig,
}

impl SummarySessionBuilder {
    pub fn new() -> Self {
        Self {
            local: (),
            remote: (),
            history: (),
            embedding_config: EmbeddingConfig::default(),
        }
    }
}

impl Default for SummarySessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R, H> SummarySessionBuilder<L, R, H> {
    pub fn local_summarizer<L2: LocalSummarizer + Send + Sync + 'static>(
        self,
        local: L2,
    ) -> SummarySessionBuilder<L2, R, H> {
        SummarySessionBuilder {
            local,
            remote: self.remote,
            history: self.history,
            embedding_config: self.embedding_config,
        }
    }

    pub fn remote_summarizer<R2: RemoteSummarizer + Send + Sync + 'static>(
        self,
        remote: R2,
    ) -> SummarySessionBuilder<L, R2, H> {
        SummarySessionBuilder {
            local: self.local,
            remote,
            history: self.history,
            embedding_config: self.embedding_config,
        }
    }

    pub fn history<H2: HistoryStore + Send + Sync + 'static>(
        self,
        history: H2,
    ) -> SummarySessionBuilder<L, R, H2> {
        SummarySessionBuilder {
            local: self.local,
            remote: self.remote,
            history,
            embedding_config: self.embedding_config,
        }
    }

    pub fn embedding_config(mut self, embedding_config: EmbeddingConfig) -> Self {
        self.embedding_config = embedding_config;
        self
    }
}

impl<L, R, H> SummarySessionBuilder<L, R, H>
where
    L: LocalSummarizer + Send + Sync + 'static,
    R: RemoteSummarizer + Send + Sync + 'static,
    H: HistoryStore + Send + Sync + 'static,
{
    pub fn build(self) -> SummarySession<L, R, H> {
        SummarySession {
            local: self.local,
            remote: self.remote,
            history: self.history,
            embedding_config: self.embedding_config,
        }
    }
}
