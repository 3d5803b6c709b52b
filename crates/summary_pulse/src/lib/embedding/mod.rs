//! Per-request word embeddings.
//!
//! A [`SentenceModel`] is trained from the tokenized sentences of a single
//! request's text and answers nearest-neighbor queries over the words seen
//! there. Models are not shared across requests and are discarded with the
//! request.

mod config;
mod model;

pub use config::EmbeddingConfig;
pub use model::{EmbeddingError, SentenceModel};
