//! # sstsummary
//!
//! Summary information about every column family, including how much of the
//! data has been repaired.
//!
//! ## Usage
//!
//! ```bash
//! # Discover keyspaces and column families from the metadata export
//! SSTSUMMARY_METADATA=/var/lib/cassandra/sstable-metadata.json sstsummary
//!
//! # Enumerate keyspaces and column families from a YAML schema instead
//! sstsummary --schema schema.yaml
//! ```
//!
//! ## Environment
//!
//! - `SSTSUMMARY_METADATA`: metadata export path (default `sstable-metadata.json`)
//! - `SSTSUMMARY_LOG`: log filter written to stderr (default `warn`)
//!
//! Exit status is 0 on success or `--help`, 1 on any error.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind as ClapErrorKind;
use clap::{value_parser, Arg, ArgMatches, Command};
use sstsummarylib::config::DEFAULT_LOG_FILTER;
use sstsummarylib::{open_source, summary_report, Config, Schema, SourceOptions, SummaryError};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sstsummary")
        .about(
            "Summary information about all column families including how much of the data is repaired",
        )
        .disable_version_flag(true)
        .arg(
            Arg::new("schema")
                .short('s')
                .long("schema")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Load the schema from a YAML definition instead of discovering it"),
        )
}

/// Install the stderr log subscriber
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load inputs, aggregate, and return the rendered report
fn run(matches: &ArgMatches, config: &Config) -> anyhow::Result<String> {
    let mut options = SourceOptions::new().metadata_path(&config.metadata_path);

    if let Some(path) = matches.get_one::<PathBuf>("schema") {
        let schema = Schema::load(path).context("failed to load schema")?;
        debug!(keyspaces = schema.keyspaces.len(), "loaded schema");
        options = options.schema(schema);
    }

    let source = open_source(&options).context("failed to open metadata source")?;
    let report = summary_report(&source).context("failed to build summary report")?;
    Ok(report)
}

fn main() -> ExitCode {
    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(err) if err.kind() == ClapErrorKind::DisplayHelp => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            eprintln!();
            eprintln!("{}", build_command().render_help());
            return ExitCode::FAILURE;
        }
    };

    let config = Config::from_env();
    init_tracing(&config.log_filter);

    match run(&matches, &config) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let kind = err.downcast_ref::<SummaryError>().map(SummaryError::kind);
            error!(?kind, "summary failed");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
