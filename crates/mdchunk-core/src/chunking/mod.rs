pub mod markdown;
pub mod splitter;
pub mod tokenizer;

pub use mdchunk_config::ChunkingConfig;
pub use splitter::TextSplitter;
pub use tokenizer::{TokenCounter, TokenizerCache};

use crate::models::Chunk;
use anyhow::Result;

pub trait Splitter {
    fn split(&self, text: &str, limit: usize) -> Result<Vec<Chunk>>;
}
