//! Escape a text file for embedding in JSON and write it under a name that
//! records its size, word count and sub-word token count.

mod cli;

use anyhow::Context;
use clap::Parser;
use cut_engine::{process_text_file, HfTokenCounter, TokenizerSource};
use cut_logging::cut_debug;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    cut_logging::initialize_terminal();

    let config = args.into_config();
    cut_debug!("config: {config:?}");

    // Fetched on the first count, after the input has been read.
    let counter = HfTokenCounter::new(TokenizerSource::default());

    let report = process_text_file(&config, &counter)
        .with_context(|| format!("failed to process {:?}", config.input_path))?;

    println!("Processed text saved to: {}", report.output_path.display());
    Ok(())
}
