pub mod chunking;
pub mod models;

// Re-export the main entry points for convenience
pub use chunking::{Splitter, TextSplitter, TokenCounter, TokenizerCache};
pub use models::{Chunk, Headers};
