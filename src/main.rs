//! Lexitrie - command line entrypoint.
//!
//! Loads configuration and word lists, builds a trie and answers a single
//! query against it. Results go to stdout, logs go to stderr.

use clap::{Parser, Subcommand};
use lexitrie::config::{self, ConfigLoader, LexitrieConfig, LogConfig};
use lexitrie::dictionary;
use lexitrie::error::{ErrorContext, LexitrieError, LexitrieResult};
use lexitrie::SearchMode;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lexitrie.
#[derive(Parser, Debug)]
#[clap(name = "lexitrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, one word per line (repeatable)
    #[clap(short, long = "words", value_parser)]
    words: Vec<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every stored word starting with a prefix
    Search {
        /// Prefix to look up
        prefix: String,

        /// Skip characters that have no branch instead of returning nothing
        #[clap(long)]
        lenient: bool,
    },

    /// Print every stored word, each prefixed by PREFIX
    All {
        /// Text prepended to every word
        #[clap(default_value = "")]
        prefix: String,
    },

    /// Render the trie, one character per line indented by depth
    Print,

    /// Exit successfully if WORD is stored, with status 1 otherwise
    Contains {
        /// Word to check
        word: String,
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

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> LexitrieResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LexitrieError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Writes one line per entry to stdout.
fn print_lines<I>(lines: I) -> LexitrieResult<()>
where
    I: IntoIterator<Item = String>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn run(args: Args, config: LexitrieConfig) -> LexitrieResult<()> {
    match args.command {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LexitrieConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LexitrieError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::Search { prefix, lenient } => {
            let trie = dictionary::build(&config.dictionary, args.words.as_slice())?;
            let mode = if lenient { SearchMode::Lenient } else { config.search.mode };
            let prefix = config.dictionary.normalize_query(&prefix);
            let results = trie.search_with(&prefix, mode);
            info!(%prefix, ?mode, matches = results.len(), "search finished");
            print_lines(config.search.apply_limit(results))
        }
        Command::All { prefix } => {
            let trie = dictionary::build(&config.dictionary, args.words.as_slice())?;
            print_lines(config.search.apply_limit(trie.all(&prefix)))
        }
        Command::Print => {
            let trie = dictionary::build(&config.dictionary, args.words.as_slice())?;
            let mut out = io::stdout().lock();
            write!(out, "{trie}")?;
            out.flush()?;
            Ok(())
        }
        Command::Contains { word } => {
            let trie = dictionary::build(&config.dictionary, args.words.as_slice())?;
            let word = config.dictionary.normalize_query(&word).into_owned();
            if trie.contains(&word) {
                print_lines([word])
            } else {
                info!(%word, "word not stored");
                process::exit(1);
            }
        }
    }
}

/// Main entry point for the application.
fn main() -> LexitrieResult<()> {
    let args = <Args as clap::Parser>::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            ErrorContext::new(e.into(), "config")
                .with_details(format!("config file: {:?}", args.config))
                .report();
            process::exit(1);
        }
    };

    init_logging(&config.log)?;

    if let Err(e) = run(args, config) {
        ErrorContext::new(e, "cli").report();
        process::exit(1);
    }

    Ok(())
}
