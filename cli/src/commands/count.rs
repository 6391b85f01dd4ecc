use anyhow::Result;
use mdchunk_core::chunking::TokenizerCache;
use std::path::{Path, PathBuf};

use super::utils::{load_config, read_input};

pub fn handle_count(file: PathBuf, model: Option<String>, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(model) = model {
        config.chunking.model = model;
    }

    let cache = TokenizerCache::new();
    let counter = cache.get(&config.chunking.model)?;
    let text = read_input(&file)?;

    println!("{}", counter.count(&text));
    Ok(())
}
