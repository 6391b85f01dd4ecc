pub mod count;
pub mod split;
pub mod utils;

pub use count::handle_count;
pub use split::handle_split;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdchunk")]
#[command(about = "split markdown documents into token-bounded chunks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split documents into chunk records
    Split {
        /// Input files ("-" reads one document from stdin)
        files: Vec<PathBuf>,

        /// Token limit per chunk (defaults to chunking.max_tokens)
        #[arg(long)]
        limit: Option<usize>,

        /// Tokenizer model name (defaults to chunking.model)
        #[arg(long)]
        model: Option<String>,

        /// Directory for the chunk record files
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Write chunk records to stdout instead of files
        #[arg(long, default_value_t = false)]
        stdout: bool,
    },
    /// Count the tokens a document consumes, formatted for a model call
    Count {
        /// Input file ("-" reads from stdin)
        file: PathBuf,

        /// Tokenizer model name (defaults to chunking.model)
        #[arg(long)]
        model: Option<String>,
    },
}
