//! Koa Trie - Main entrypoint.
//!
//! This is the main entry point for the Koa Trie command-line tool. It loads
//! configuration, initializes the logging system, and dispatches to the
//! requested subcommand.

mod config;
mod error;
mod loader;
mod trie;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{KoaConfig, LogConfig};
use error::{KoaError, KoaResult};
use trie::{TreeRenderer, Trie};

/// Words used by the `demo` subcommand.
const SAMPLE_WORDS: [&str; 5] = ["abba", "cat", "cab", "can", "abb"];

/// Command line arguments for the Koa Trie CLI.
#[derive(Parser, Debug)]
#[clap(name = "Koa Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build the built-in sample trie and print its words and tree
    Demo,

    /// Load words from a line-delimited file and print the result
    Load {
        /// Path to the word file; falls back to load.words_file from the
        /// configuration
        #[clap(value_parser)]
        file: Option<PathBuf>,

        /// Print the word list as JSON
        #[clap(long)]
        json: bool,

        /// Annotate rendered nodes with their descendant counts
        #[clap(long)]
        counts: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system from the log configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set.
fn init_logging(log: &LogConfig) -> KoaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let result = if log.json {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    result.map_err(|e| KoaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> KoaResult<()> {
    // Parse command-line arguments
    let Args {
        config: config_path,
        command,
    } = <Args as clap::Parser>::parse();

    // Load configuration; logging is not up yet, so report to stderr
    let loaded = match config::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    config::init_global_config(loaded);
    let global = config::get_global_config();
    let config = global.get();

    init_logging(&config.log)?;

    match command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(config),
        Command::Load { file, json, counts } => run_load(config, file, json, counts),
        Command::Validate => {
            // load_or_default above already parsed and validated.
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = KoaConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(KoaError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| KoaError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(KoaError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Build the sample trie and print its words and tree.
fn run_demo(config: &KoaConfig) -> KoaResult<()> {
    info!("Building demo trie");

    let mut trie: Trie = Trie::with_name(&config.trie.name);
    add_words(&mut trie, &SAMPLE_WORDS);

    println!("{:?}", trie.words());
    print!("{trie}");
    Ok(())
}

/// Bulk-load a word file and print the stored words and tree.
fn run_load(
    config: &KoaConfig,
    file: Option<PathBuf>,
    json: bool,
    counts: bool,
) -> KoaResult<()> {
    let path = file
        .or_else(|| config.load.words_file.clone())
        .ok_or_else(|| {
            KoaError::Custom("No word file given; pass a path or set load.words_file".to_string())
        })?;

    let mut trie: Trie = Trie::with_name(&config.trie.name);
    let report = loader::load_path(&mut trie, &path)?;
    info!(
        added = report.added,
        skipped = report.skipped.len(),
        file = %path.display(),
        "Loaded word file"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&trie.words())?);
    } else {
        for word in trie.words() {
            println!("{word}");
        }
    }

    let renderer = TreeRenderer::new().with_descendant_counts(counts);
    print!("{}", renderer.render(&trie));
    Ok(())
}

/// Add words one by one, reporting failures without aborting.
fn add_words<V>(trie: &mut Trie<V>, words: &[&str]) {
    for &word in words {
        if let Err(e) = trie.add(word) {
            warn!(word, %e, "Could not add word");
        }
    }
}
