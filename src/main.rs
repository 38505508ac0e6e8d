//! Niihau - Main entrypoint.
//!
//! Loads configuration, initializes logging, reads the dictionary sources
//! into a trie and prints the answer to one query.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use niihau_lib::config::{self, ConfigLoader, LogConfig, NiihauConfig};
use niihau_lib::dictionary::{self, Source, SourceSummary};
use niihau_lib::error::{set_error_reporter, NiihauError, NiihauResult, TracingErrorReporter};
use niihau_lib::query::{Query, QueryReport};

/// Command line arguments for Niihau.
#[derive(Parser, Debug)]
#[clap(name = "niihau", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Dictionary to load instead of the configured one
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    #[clap(flatten)]
    Query(QueryCommand),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Subcommands that load a dictionary and run one query.
#[derive(Subcommand, Debug)]
enum QueryCommand {
    /// Check whether each word is in the dictionary
    Search {
        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Check whether any word starts with each prefix
    StartsWith {
        /// Prefixes to look up
        #[clap(required = true)]
        prefixes: Vec<String>,
    },

    /// Count the words starting with each prefix
    PrefixCount {
        /// Prefixes to count; the configured list when omitted
        prefixes: Vec<String>,
    },

    /// Complete a prefix in alphabetical order
    Complete {
        /// Prefix to complete
        prefix: Option<String>,

        /// Maximum number of words; non-positive values use the default,
        /// non-numeric values are rejected
        #[clap(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Complete a prefix ranked by frequency
    Ranked {
        /// Prefix to complete
        prefix: Option<String>,

        /// Maximum number of words; non-positive values use the default,
        /// non-numeric values are rejected
        #[clap(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Usage log replayed on top of the frequency corpus
        #[clap(short, long, value_parser)]
        usage: Option<PathBuf>,
    },
}

/// Everything printed for one query.
#[derive(Debug, Serialize)]
struct Output {
    sources: Vec<SourceSummary>,
    #[serde(flatten)]
    report: QueryReport,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> NiihauResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| NiihauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Turns a query subcommand into the sources to load and the query to run.
fn plan(
    command: QueryCommand,
    args_dictionary: Option<&Path>,
    config: &NiihauConfig,
) -> (Vec<Source>, Query) {
    let word_list = || {
        Source::words(
            args_dictionary
                .map(Path::to_path_buf)
                .unwrap_or_else(|| config.dictionary.words_path.clone()),
        )
    };

    match command {
        QueryCommand::Search { words } => (vec![word_list()], Query::Search(words)),
        QueryCommand::StartsWith { prefixes } => (vec![word_list()], Query::StartsWith(prefixes)),
        QueryCommand::PrefixCount { prefixes } => {
            let prefixes = if prefixes.is_empty() {
                config.query.count_prefixes.clone()
            } else {
                prefixes
            };
            (vec![word_list()], Query::PrefixCount(prefixes))
        }
        QueryCommand::Complete { prefix, limit } => (
            vec![word_list()],
            Query::Complete {
                prefix: prefix.unwrap_or_else(|| config.query.complete_prefix.clone()),
                limit: config.query.resolve_limit(limit),
            },
        ),
        QueryCommand::Ranked {
            prefix,
            limit,
            usage,
        } => {
            let mut sources = vec![Source::words(
                args_dictionary
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| config.dictionary.frequency_path.clone()),
            )];
            sources.extend(
                usage
                    .or_else(|| config.dictionary.usage_path.clone())
                    .map(Source::usage),
            );
            (
                sources,
                Query::Ranked {
                    prefix: prefix.unwrap_or_else(|| config.query.ranked_prefix.clone()),
                    limit: config.query.resolve_limit(limit),
                },
            )
        }
    }
}

fn print_output(output: &Output, json: bool) -> NiihauResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
        return Ok(());
    }

    for source in &output.sources {
        println!("{source}");
    }
    println!();
    print!("{}", output.report);
    Ok(())
}

/// Main entry point for the application.
fn main() -> NiihauResult<()> {
    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration
    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let command = args.command.unwrap_or(Command::Query(QueryCommand::Complete {
        prefix: None,
        limit: None,
    }));

    match command {
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = NiihauConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| NiihauError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::Query(command) => {
            let (sources, query) = plan(command, args.dictionary.as_deref(), &config);
            let loaded = dictionary::load_sources(&sources, config.dictionary.required);
            let (trie, sources) = match loaded {
                Ok(loaded) => loaded,
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            };

            let report = query.execute(&trie);
            print_output(&Output { sources, report }, args.json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use niihau_lib::dictionary::SourceKind;

    fn query_command(argv: &[&str]) -> QueryCommand {
        let args = Args::try_parse_from(argv).unwrap();
        match args.command {
            Some(Command::Query(command)) => command,
            other => panic!("expected a query command, got {other:?}"),
        }
    }

    #[test]
    fn test_limit_must_be_numeric() {
        assert!(Args::try_parse_from(["niihau", "complete", "ab", "--limit", "ten"]).is_err());
    }

    #[test]
    fn test_non_positive_limit_uses_default() {
        let config = NiihauConfig::default();
        let command = query_command(&["niihau", "complete", "ab", "--limit", "-3"]);

        let (_, query) = plan(command, None, &config);
        assert_eq!(
            query,
            Query::Complete {
                prefix: "ab".to_string(),
                limit: 20
            }
        );
    }

    #[test]
    fn test_prefix_count_defaults_to_configured_prefixes() {
        let config = NiihauConfig::default();

        let (_, query) = plan(query_command(&["niihau", "prefix-count"]), None, &config);
        assert_eq!(query, Query::PrefixCount(config.query.count_prefixes.clone()));

        let (_, query) = plan(query_command(&["niihau", "prefix-count", "zz"]), None, &config);
        assert_eq!(query, Query::PrefixCount(vec!["zz".to_string()]));
    }

    #[test]
    fn test_ranked_loads_usage_after_corpus() {
        let config = NiihauConfig::default();
        let command = query_command(&["niihau", "ranked", "--usage", "usage.txt"]);

        let (sources, _) = plan(command, Some(Path::new("corpus.txt")), &config);
        assert_eq!(
            sources,
            vec![Source::words("corpus.txt"), Source::usage("usage.txt")]
        );
        assert_eq!(sources[1].kind, SourceKind::Usage);
    }
}
