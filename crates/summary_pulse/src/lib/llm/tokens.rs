use std::sync::OnceLock;

use another_tiktoken_rs::{cl100k_base, CoreBPE};

fn encoder() -> Option<&'static CoreBPE> {
    static BPE: OnceLock<Option<CoreBPE>> = OnceLock::new();
    BPE.get_or_init(|| {
        cl100k_base()
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load BPE encoder"))
            .ok()
    })
    .as_ref()
}

/// Token count of `text` for context-window budgeting. Falls back to a
/// character-based estimate if the encoder cannot be loaded.
pub(crate) fn token_count(text: &str) -> usize {
    match encoder() {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => text.chars().count() / 4,
    }
}
