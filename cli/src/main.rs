mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_count, handle_split, Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            files,
            limit,
            model,
            output,
            stdout,
        } => {
            handle_split(files, limit, model, output, stdout, cli.config.as_deref())?;
        }
        Commands::Count { file, model } => {
            handle_count(file, model, cli.config.as_deref())?;
        }
    }

    Ok(())
}
