use std::collections::HashSet;
use std::convert::Infallible;

use itertools::Itertools;

use crate::text::{tokenize, Language, LocalSummarizer};

/// Extractive summarizer that scores sentences with a TextRank-style graph
/// walk and keeps the highest-ranked ones.
///
/// Sentences are nodes; edge weights are content-word overlap normalized by
/// log sentence length. The kept sentences are re-emitted in their original
/// order, so the summary reads as a subsequence of the input.
#[derive(Debug, Clone, Default)]
pub struct TextRankSummarizer {
    language: Language,
}

impl TextRankSummarizer {
    const DAMPING: f32 = 0.85;
    const CONVERGENCE: f32 = 1e-4;
    const MAX_ITERATIONS: usize = 100;

    pub fn new(language: Language) -> Self {
        TextRankSummarizer { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn content_words(&self, sentence: &str) -> HashSet<String> {
        tokenize::words(sentence)
            .into_iter()
            .map(|w| w.to_lowercase())
            .filter(|w| !self.language.is_stopword(w))
            .collect()
    }

    /// Overlap similarity of two sentences, normalized by log lengths so
    /// long sentences do not dominate the graph.
    fn similarity(a: &HashSet<String>, b: &HashSet<String>) -> f32 {
        if a.len() <= 1 || b.len() <= 1 {
            return 0.0;
        }

        let overlap = a.intersection(b).count();
        if overlap == 0 {
            return 0.0;
        }

        overlap as f32 / ((a.len() as f32).ln() + (b.len() as f32).ln())
    }

    /// Damped power iteration over the similarity graph.
    fn rank(weights: &[Vec<f32>]) -> Vec<f32> {
        let n = weights.len();
        let base = (1.0 - Self::DAMPING) / n as f32;
        let out_sums: Vec<f32> = weights.iter().map(|row| row.iter().sum()).collect();

        let mut scores = vec![1.0 / n as f32; n];
        for _ in 0..Self::MAX_ITERATIONS {
            let mut next = vec![base; n];
            for j in 0..n {
                if out_sums[j] <= f32::EPSILON {
                    continue;
                }
                for i in 0..n {
                    if weights[j][i] > 0.0 {
                        next[i] += Self::DAMPING * scores[j] * weights[j][i] / out_sums[j];
                    }
                }
            }

            let delta = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .fold(0.0_f32, f32::max);
            scores = next;
            if delta < Self::CONVERGENCE {
                break;
            }
        }

        scores
    }
}

impl LocalSummarizer for TextRankSummarizer {
    type Error = Infallible;

    fn summarize(&self, text: &str, ratio: f32) -> Result<String, Self::Error> {
        let sentences = tokenize::sentences(text);
        let n = sentences.len();

        // Short input or a low ratio legitimately keeps nothing; the caller
        // surfaces that as an empty-output condition.
        let keep = (n as f32 * ratio).floor() as usize;
        if keep == 0 {
            return Ok(String::new());
        }
        if keep >= n {
            return Ok(sentences.join("\n"));
        }

        let token_sets: Vec<HashSet<String>> =
            sentences.iter().map(|s| self.content_words(s)).collect();

        let mut weights = vec![vec![0.0_f32; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let w = Self::similarity(&token_sets[i], &token_sets[j]);
                weights[i][j] = w;
                weights[j][i] = w;
            }
        }

        let scores = Self::rank(&weights);

        let summary = scores
            .iter()
            .enumerate()
            .sorted_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal))
            .take(keep)
            .map(|(i, _)| i)
            .sorted_unstable()
            .map(|i| sentences[i])
            .join("\n");

        Ok(summary)
    }
}
