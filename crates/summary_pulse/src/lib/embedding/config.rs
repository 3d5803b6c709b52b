/// Trainer hyperparameters. These are fixed constants in the application;
/// the defaults mirror the values the original UI always trained with.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// Dimensionality of the learned vectors.
    pub vector_size: usize,
    /// Maximum context window on each side of the center word.
    pub window: usize,
    /// Words occurring fewer times than this are dropped from the vocabulary.
    pub min_count: usize,
    /// Threads used for vocabulary-wide similarity scans.
    pub workers: usize,
    /// Passes over the corpus.
    pub epochs: usize,
    /// Negative samples drawn per context pair.
    pub negative_samples: usize,
    /// SGD step size.
    pub learning_rate: f32,
    /// Seed for reproducible initialization and sampling.
    pub seed: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        EmbeddingConfig {
            vector_size: 100,
            window: 5,
            min_count: 1,
            workers: 4,
            epochs: 5,
            negative_samples: 5,
            learning_rate: 0.025,
            seed: 1,
        }
    }
}
