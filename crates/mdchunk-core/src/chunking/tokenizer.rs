use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tiktoken_rs::CoreBPE;

/// Wrap raw text in the chat boundary markers a real completion call would
/// carry, so counts match what a downstream API call actually consumes.
fn format_for_model(text: &str) -> String {
    format!(
        "<|im_start|>user\n{}<|im_end|>\n<|im_start|>assistant<|im_end|>",
        text
    )
}

/// Token counter for one model's encoding.
pub struct TokenCounter {
    bpe: CoreBPE,
    overhead: usize,
}

impl TokenCounter {
    /// Resolve the BPE for `model`. Unknown model names fail here, before
    /// any chunk is produced.
    pub fn for_model(model: &str) -> Result<Self> {
        let bpe = tiktoken_rs::get_bpe_from_model(model)
            .with_context(|| format!("failed to initialize tokenizer for model '{}'", model))?;
        let overhead = bpe.encode_with_special_tokens(&format_for_model("")).len();
        Ok(Self { bpe, overhead })
    }

    /// Tokens consumed by `text` once wrapped in the boundary markers.
    pub fn count(&self, text: &str) -> usize {
        self.bpe
            .encode_with_special_tokens(&format_for_model(text))
            .len()
    }

    /// Token cost of the empty wrapper alone.
    pub fn overhead(&self) -> usize {
        self.overhead
    }
}

/// Per-model tokenizer cache.
///
/// BPE construction is expensive, so counters are built once per model name
/// and handed out as shared references. The cache is owned and passed in
/// explicitly rather than living in process-global state.
#[derive(Default)]
pub struct TokenizerCache {
    counters: Mutex<HashMap<String, Arc<TokenCounter>>>,
}

impl TokenizerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, model: &str) -> Result<Arc<TokenCounter>> {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(counter) = counters.get(model) {
            return Ok(Arc::clone(counter));
        }
        let counter = Arc::new(TokenCounter::for_model(model)?);
        counters.insert(model.to_string(), Arc::clone(&counter));
        Ok(counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_fails_initialization() {
        assert!(TokenCounter::for_model("not-a-real-model").is_err());
    }

    #[test]
    fn overhead_is_positive_and_matches_empty_count() {
        let counter = TokenCounter::for_model("gpt-4o").unwrap();
        assert!(counter.overhead() > 0);
        assert_eq!(counter.count(""), counter.overhead());
    }

    #[test]
    fn content_adds_to_the_wrapper_cost() {
        let counter = TokenCounter::for_model("gpt-4o").unwrap();
        assert!(counter.count("hello world") > counter.overhead());
    }

    #[test]
    fn cache_reuses_the_counter_per_model() {
        let cache = TokenizerCache::new();
        let a = cache.get("gpt-4o").unwrap();
        let b = cache.get("gpt-4o").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn cache_surfaces_initialization_errors() {
        let cache = TokenizerCache::new();
        assert!(cache.get("not-a-real-model").is_err());
    }
}
