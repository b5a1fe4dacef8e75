//! # recordq
//!
//! A CLI for running inventory and service-request queries.
//!
//! ## Overview
//!
//! recordq is built on top of recordqlib. It loads a dataset (a JSON file, or
//! the built-in sample collections when no file is given), runs one named
//! query, and prints the answer as a table or as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Items with durability below 90 in the sample inventory
//! recordq inventory damaged --value 90
//!
//! # Average severity on a route, from a dataset file, as JSON
//! recordq --input data.json --output json traffic average-by-route --route /data
//!
//! # Routes of severity >= 4 requests, most recent first
//! recordq traffic stack --value 4
//!
//! # Print the loaded records
//! recordq show
//! ```

mod render;

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use recordqlib::{Dataset, InventoryQueryKind, QueryParams, TrafficQueryKind};
use tracing_subscriber::EnvFilter;

use render::{output_mode_from_arg, render_dataset, render_output, OutputMode};

/// Comma-separated list of query names for help text
fn query_names<T: std::fmt::Display>(kinds: &[T]) -> String {
    kinds
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Numeric parameter shared by query subcommands
fn value_arg() -> Arg {
    Arg::new("value")
        .short('n')
        .long("value")
        .value_parser(value_parser!(i32))
        .allow_hyphen_values(true)
        .help("Threshold or severity the query compares against")
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("recordq")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Filter, group and aggregate inventory items and service requests")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .global(true)
                .help("Dataset JSON file (defaults to the built-in sample data)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .default_value("auto")
                .value_parser(["auto", "term", "text", "term-debug", "json"])
                .help("Output mode (auto styles only when stdout is a terminal)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log debug output to stderr (-vv for trace)"),
        )
        .subcommand(
            Command::new("inventory")
                .about("Query inventory items")
                .arg(
                    Arg::new("query")
                        .required(true)
                        .help(format!(
                            "Query to run: {}",
                            query_names(&InventoryQueryKind::ALL)
                        )),
                )
                .arg(value_arg())
                .arg(
                    Arg::new("type")
                        .short('t')
                        .long("type")
                        .help("Item type for total-by-type (case-sensitive)"),
                ),
        )
        .subcommand(
            Command::new("traffic")
                .about("Query service requests")
                .arg(
                    Arg::new("query")
                        .required(true)
                        .help(format!(
                            "Query to run: {}",
                            query_names(&TrafficQueryKind::ALL)
                        )),
                )
                .arg(value_arg())
                .arg(
                    Arg::new("route")
                        .short('r')
                        .long("route")
                        .help("Route for average-by-route"),
                ),
        )
        .subcommand(Command::new("show").about("Print the loaded records"))
}

/// Install the stderr log subscriber.
///
/// `-v` flags take precedence over `RUST_LOG`; without either only warnings
/// are shown.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load the dataset named by --input, or the sample
fn load_dataset(matches: &ArgMatches) -> anyhow::Result<Dataset> {
    match matches.get_one::<String>("input") {
        Some(path) => Dataset::from_path(path).with_context(|| format!("loading {}", path)),
        None => {
            tracing::debug!("no --input given, using sample dataset");
            Ok(Dataset::sample())
        }
    }
}

/// Extract query parameters from matches
fn extract_params(matches: &ArgMatches, text_arg: &str) -> QueryParams {
    QueryParams {
        value: matches.get_one::<i32>("value").copied(),
        text: matches.get_one::<String>(text_arg).cloned(),
    }
}

/// Name of the query positional (validated by clap as required)
fn query_name(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("query")
        .map(|s| s.as_str())
        .unwrap_or_default()
}

/// Handler for inventory command
fn inventory_handler(
    matches: &ArgMatches,
    dataset: &Dataset,
    mode: OutputMode,
) -> anyhow::Result<String> {
    let kind = InventoryQueryKind::from_str(query_name(matches))?;
    let query = kind.with_params(&extract_params(matches, "type"))?;
    let output = query.run(&dataset.items);
    render_output(kind.name(), &output, mode).map_err(|e| anyhow::anyhow!("{e}"))
}

/// Handler for traffic command
fn traffic_handler(
    matches: &ArgMatches,
    dataset: &Dataset,
    mode: OutputMode,
) -> anyhow::Result<String> {
    let kind = TrafficQueryKind::from_str(query_name(matches))?;
    let query = kind.with_params(&extract_params(matches, "route"))?;
    let output = query.run(&dataset.requests);
    render_output(kind.name(), &output, mode).map_err(|e| anyhow::anyhow!("{e}"))
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let mode = matches
        .get_one::<String>("output")
        .map(|s| output_mode_from_arg(s))
        .unwrap_or(OutputMode::Auto);

    let dataset = load_dataset(matches)?;

    match matches.subcommand() {
        Some(("inventory", sub)) => inventory_handler(sub, &dataset, mode),
        Some(("traffic", sub)) => traffic_handler(sub, &dataset, mode),
        Some(("show", _)) => render_dataset(&dataset, mode).map_err(|e| anyhow::anyhow!("{e}")),
        _ => Err(anyhow::anyhow!("no command given")),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_count("verbose"));

    match run(&matches) {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
