//! lextags CLI - definition and reference tag extraction
//!
//! This binary provides the command-line interface for the lextags system.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use clap::Parser;
use lextags::{extract_request, OutputFormat, StreamSink};
use lextags_core::config::Config;
use lextags_core::TagSink;
use lextags_indexer::TagExtractor;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lextags")]
#[command(about = "Extract definition and reference tags from source files")]
#[command(version)]
struct Cli {
    /// Source files to extract tags from
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Language map, e.g. "Python:py.pyw.,JavaScript:js."
    #[arg(long, value_name = "MAP")]
    langmap: Option<String>,

    /// Definition tool executable
    #[arg(long, value_name = "CMD")]
    ctags: Option<String>,

    /// Skip the definition tool and emit references only
    #[arg(long)]
    no_definitions: bool,

    /// Run the definition tool and the tokenizer one after the other
    #[arg(long)]
    sequential: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Ctags)]
    format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    let config = load_config(&cli)?;
    let extractor = TagExtractor::from_config(&config);

    let stdout = io::stdout().lock();
    let mut sink = StreamSink::new(BufWriter::new(stdout), cli.format);

    for file in &cli.files {
        match extract_request(file) {
            Ok(request) => extractor.extract(&request, &mut sink),
            Err(e) => {
                warn!("{e}");
                sink.warning(&e.to_string());
            }
        }
    }

    let summary = sink.finish().context("Failed to write tags")?;
    debug!(
        "Emitted {} tags from {} files",
        summary.emitted,
        cli.files.len()
    );
    if summary.warnings > 0 {
        info!("Completed with {} warnings", summary.warnings);
    }

    Ok(())
}

/// Initialize logging system
///
/// Logs go to stderr so tag output on stdout stays machine-readable.
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "lextags={level},lextags_core={level},lextags_languages={level},lextags_indexer={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

/// Load configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(langmap) = &cli.langmap {
        config.langmap.mapping = Some(langmap.clone());
    }
    if let Some(ctags) = &cli.ctags {
        config.definitions.command = ctags.clone();
    }
    if cli.no_definitions {
        config.definitions.enabled = false;
    }
    if cli.sequential {
        config.extraction.concurrent_sources = false;
    }

    config.validate().context("Invalid configuration")?;
    debug!("Configuration: {config:?}");
    Ok(config)
}
