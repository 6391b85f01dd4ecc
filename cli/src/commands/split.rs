use anyhow::{bail, Context, Result};
use mdchunk_config::{Config, OutputFormat};
use mdchunk_core::chunking::{Splitter, TextSplitter, TokenizerCache};
use mdchunk_core::models::Chunk;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use super::utils::{load_config, read_input};

pub fn handle_split(
    files: Vec<PathBuf>,
    limit: Option<usize>,
    model: Option<String>,
    output: Option<PathBuf>,
    stdout: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(model) = model {
        config.chunking.model = model;
    }
    let limit = limit.unwrap_or(config.chunking.max_tokens);

    if files.is_empty() {
        bail!("no input files given");
    }

    let cache = Arc::new(TokenizerCache::new());

    // stdin input has no natural output path; stream records to stdout.
    let to_stdout = stdout || files.iter().any(|f| f == Path::new("-"));
    if to_stdout && output.is_some() {
        bail!("--output cannot be combined with --stdout or stdin input");
    }
    if to_stdout {
        for file in &files {
            let text = read_input(file)?;
            let splitter = TextSplitter::with_config(config.chunking.clone(), Arc::clone(&cache));
            let chunks = splitter.split(&text, limit)?;
            print!("{}", render(&chunks, &config)?);
        }
        return Ok(());
    }

    if let Some(dir) = &output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    // Each document owns its cursor and header state, so documents can be
    // split in parallel; only the tokenizer cache is shared.
    files.par_iter().try_for_each(|file| -> Result<()> {
        let text = read_input(file)?;
        let splitter = TextSplitter::with_config(config.chunking.clone(), Arc::clone(&cache));
        let chunks = splitter.split(&text, limit)?;

        let dest = output_path(file, output.as_deref(), config.output.format);
        std::fs::write(&dest, render(&chunks, &config)?)
            .with_context(|| format!("writing {}", dest.display()))?;

        info!(file = %file.display(), chunks = chunks.len(), "document split");
        println!("{} -> {} ({} chunks)", file.display(), dest.display(), chunks.len());
        Ok(())
    })?;

    Ok(())
}

fn output_path(input: &Path, dir: Option<&Path>, format: OutputFormat) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = format!("{}.chunks.{}", stem, format.extension());
    match dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

fn render(chunks: &[Chunk], config: &Config) -> Result<String> {
    match config.output.format {
        OutputFormat::Jsonl => {
            let mut out = String::new();
            for chunk in chunks {
                out.push_str(&serde_json::to_string(chunk)?);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut rendered = if config.output.pretty {
                serde_json::to_string_pretty(chunks)?
            } else {
                serde_json::to_string(chunks)?
            };
            rendered.push('\n');
            Ok(rendered)
        }
    }
}
