use super::markdown;
use super::tokenizer::{TokenCounter, TokenizerCache};
use super::Splitter;
use crate::models::{Chunk, Headers};
use anyhow::Result;
use mdchunk_config::ChunkingConfig;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, info};

/// Splits a markdown document into token-bounded chunks, tracking the
/// active heading outline and extracting link/image targets per chunk.
///
/// One instance owns no per-document state; `split` threads its cursor and
/// header state locally, so independent documents can be split from
/// parallel tasks sharing one splitter or one tokenizer cache.
pub struct TextSplitter {
    config: ChunkingConfig,
    cache: Arc<TokenizerCache>,
    counter: OnceCell<Arc<TokenCounter>>,
}

impl TextSplitter {
    pub fn new(cache: Arc<TokenizerCache>) -> Self {
        Self::with_config(ChunkingConfig::default(), cache)
    }

    pub fn with_config(config: ChunkingConfig, cache: Arc<TokenizerCache>) -> Self {
        Self {
            config,
            cache,
            counter: OnceCell::new(),
        }
    }

    /// The tokenizer is resolved once, on first use. An unknown model name
    /// surfaces here before any chunk is produced.
    fn counter(&self) -> Result<&Arc<TokenCounter>> {
        self.counter
            .get_or_try_init(|| self.cache.get(&self.config.model))
    }

    /// Pick the end offset of the next chunk starting at `start`:
    /// interpolate a candidate, shrink until the wrapped slice fits
    /// `limit`, then try to land the boundary on a newline.
    fn chunk_end(&self, counter: &TokenCounter, text: &str, start: usize, limit: usize) -> usize {
        let overhead = counter.overhead();
        let remaining = &text[start..];
        let remaining_tokens = counter.count(remaining).max(1);

        // Linear estimate assuming uniform token density over the rest.
        // Widened to u128: the product can exceed usize for large
        // caller-supplied limits on long documents.
        let estimated = (remaining.len() as u128 * limit as u128 / remaining_tokens as u128)
            .min(remaining.len() as u128) as usize;
        let mut end = start + estimated;
        end = floor_char_boundary(text, end);
        if end <= start {
            end = ceil_char_boundary(text, start + 1);
        }

        let divisor = self.config.shrink_divisor.max(1);
        let mut tokens = counter.count(&text[start..end]);
        while tokens + overhead > limit {
            let step = ((end - start) / divisor).max(1);
            let mut shrunk = floor_char_boundary(text, end.saturating_sub(step));
            if shrunk <= start {
                shrunk = ceil_char_boundary(text, start + 1);
            }
            if shrunk >= end {
                // A single char still exceeds the limit; accept the
                // over-limit slice so the cursor keeps advancing.
                break;
            }
            end = shrunk;
            tokens = counter.count(&text[start..end]);
        }

        self.snap_to_newline(counter, text, start, end, limit)
    }

    /// Move the boundary to a nearby newline when the adjusted chunk still
    /// fits the limit and consumes at least `min_fill` of it. Extension to
    /// the next newline is tried first, then retraction to the previous
    /// one; if neither qualifies the shrink-to-fit offset stands.
    fn snap_to_newline(
        &self,
        counter: &TokenCounter,
        text: &str,
        start: usize,
        end: usize,
        limit: usize,
    ) -> usize {
        let min_tokens = limit as f64 * self.config.min_fill;

        if let Some(offset) = text[end..].find('\n') {
            let extended = end + offset + 1;
            let tokens = counter.count(&text[start..extended]);
            if tokens <= limit && tokens as f64 >= min_tokens {
                return extended;
            }
        }

        if let Some(prev) = text[..end].rfind('\n') {
            if prev > start {
                let reduced = prev + 1;
                let tokens = counter.count(&text[start..reduced]);
                if tokens <= limit && tokens as f64 >= min_tokens {
                    return reduced;
                }
            }
        }

        end
    }
}

impl Splitter for TextSplitter {
    fn split(&self, text: &str, limit: usize) -> Result<Vec<Chunk>> {
        let counter = self.counter()?;
        info!(limit, model = %self.config.model, "starting split");

        let mut chunks = Vec::new();
        let mut position = 0usize;
        let mut current_headers = Headers::new();

        while position < text.len() {
            let end = self.chunk_end(counter, text, position, limit);
            let raw = &text[position..end];
            let token_count = counter.count(raw);

            let found = markdown::extract_headers(raw);
            markdown::update_headers(&mut current_headers, &found);
            let (content, urls, images) = markdown::substitute_links_and_images(raw);

            debug!(start = position, end, tokens = token_count, "chunk finalized");
            chunks.push(Chunk {
                text: content,
                token_count,
                headers: current_headers.clone(),
                urls,
                images,
                start: position,
                end,
            });
            position = end;
        }

        info!(chunks = chunks.len(), "split complete");
        Ok(chunks)
    }
}

/// Largest char boundary at or below `i`.
fn floor_char_boundary(text: &str, mut i: usize) -> usize {
    while i > 0 && !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary at or above `i` (clamped to the text length).
fn ceil_char_boundary(text: &str, mut i: usize) -> usize {
    while i < text.len() && !text.is_char_boundary(i) {
        i += 1;
    }
    i.min(text.len())
}
