use std::collections::HashMap;

use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::EmbeddingConfig;

#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    /// The queried word never made it into the trained vocabulary. Expected
    /// for any word outside the request's text; informational, not fatal.
    #[error("'{0}' is not in the model vocabulary")]
    UnknownWord(String),
    /// Nothing survived tokenization and frequency filtering.
    #[error("no trainable words in the input text")]
    EmptyVocabulary,
    #[error("failed to start similarity worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Word embeddings trained on the tokenized sentences of one text.
///
/// Training is a single-threaded skip-gram pass with negative sampling and a
/// fixed seed, so the same text always yields the same model. Similarity
/// scans over the vocabulary run on a worker pool sized by the config.
#[derive(Debug)]
pub struct SentenceModel {
    vocab: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Vec<Vec<f32>>,
    pool: ThreadPool,
}

impl SentenceModel {
    pub fn train(
        sentences: &[Vec<String>],
        config: &EmbeddingConfig,
    ) -> Result<Self, EmbeddingError> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for sentence in sentences {
            for word in sentence {
                *counts.entry(word.as_str()).or_default() += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = counts
            .into_iter()
            .filter(|(_, count)| *count >= config.min_count)
            .collect();
        // Deterministic vocabulary order: frequency first, then the word.
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        if ranked.is_empty() {
            return Err(EmbeddingError::EmptyVocabulary);
        }

        let vocab: Vec<String> = ranked.iter().map(|(w, _)| w.to_string()).collect();
        let index: HashMap<String, usize> = vocab
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();

        let corpus: Vec<Vec<usize>> = sentences
            .iter()
            .map(|sentence| {
                sentence
                    .iter()
                    .filter_map(|w| index.get(w.as_str()).copied())
                    .collect()
            })
            .collect();

        let sampling_table = unigram_table(&ranked);
        let mut rng = StdRng::seed_from_u64(config.seed);

        let dim = config.vector_size;
        let mut input: Vec<Vec<f32>> = (0..vocab.len())
            .map(|_| {
                (0..dim)
                    .map(|_| rng.gen_range(-0.5_f32..0.5_f32) / dim as f32)
                    .collect()
            })
            .collect();
        let mut output: Vec<Vec<f32>> = vec![vec![0.0; dim]; vocab.len()];

        for _ in 0..config.epochs {
            for sentence in &corpus {
                for (pos, &center) in sentence.iter().enumerate() {
                    let reach = rng.gen_range(1..=config.window.max(1));
                    let start = pos.saturating_sub(reach);
                    let end = (pos + reach + 1).min(sentence.len());

                    for ctx_pos in start..end {
                        if ctx_pos == pos {
                            continue;
                        }
                        let context = sentence[ctx_pos];

                        let mut gradient = vec![0.0_f32; dim];
                        for k in 0..=config.negative_samples {
                            let (target, label) = if k == 0 {
                                (context, 1.0)
                            } else {
                                let sampled = sample(&sampling_table, &mut rng);
                                if sampled == context {
                                    continue;
                                }
                                (sampled, 0.0)
                            };

                            let dot: f32 = input[center]
                                .iter()
                                .zip(&output[target])
                                .map(|(a, b)| a * b)
                                .sum();
                            let g = (label - sigmoid(dot)) * config.learning_rate;

                            for d in 0..dim {
                                gradient[d] += g * output[target][d];
                                output[target][d] += g * input[center][d];
                            }
                        }

                        for d in 0..dim {
                            input[center][d] += gradient[d];
                        }
                    }
                }
            }
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()?;

        Ok(SentenceModel {
            vocab,
            index,
            vectors: input,
            pool,
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn vocab(&self) -> &[String] {
        &self.vocab
    }

    /// Nearest neighbors of `word` by cosine similarity, descending score.
    /// The query word itself is excluded from the results.
    pub fn most_similar(
        &self,
        word: &str,
        top_n: usize,
    ) -> Result<Vec<(String, f32)>, EmbeddingError> {
        let idx = *self
            .index
            .get(word)
            .ok_or_else(|| EmbeddingError::UnknownWord(word.to_string()))?;
        let query = &self.vectors[idx];

        let mut scored: Vec<(usize, f32)> = self.pool.install(|| {
            self.vectors
                .par_iter()
                .enumerate()
                .filter(|(i, _)| *i != idx)
                .map(|(i, v)| (i, cosine_similarity(query, v)))
                .collect()
        });

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_n);

        Ok(scored
            .into_iter()
            .map(|(i, score)| (self.vocab[i].clone(), score))
            .collect())
    }
}

fn sigmoid(x: f32) -> f32 {
    let x = x.clamp(-6.0, 6.0);
    1.0 / (1.0 + (-x).exp())
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Cumulative distribution over the vocabulary, counts raised to 3/4 as in
/// the classic negative-sampling formulation.
fn unigram_table(ranked: &[(&str, usize)]) -> Vec<f32> {
    let total: f32 = ranked.iter().map(|(_, c)| (*c as f32).powf(0.75)).sum();

    let mut cumulative = 0.0;
    ranked
        .iter()
        .map(|(_, c)| {
            cumulative += (*c as f32).powf(0.75) / total;
            cumulative
        })
        .collect()
}

fn sample(table: &[f32], rng: &mut StdRng) -> usize {
    let r: f32 = rng.gen();
    table.partition_point(|&c| c < r).min(table.len() - 1)
}
