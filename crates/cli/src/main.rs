//! Mimic CLI - request-shaped CLI for the Mimic document store.
//!
//! Two modes:
//! - **Shell mode**: `mimic [flags] request VERB PATH [-d JSON]` - single request, exit
//! - **Pipe mode**: `echo "GET /api/chats" | mimic` - line-by-line from stdin
//!
//! Bodies print to stdout as pretty JSON (`--compact` for one line);
//! errors and log output go to stderr so piped output stays clean.

mod parse;

use std::io::{self, BufRead, IsTerminal};
use std::process;

use clap::{Arg, ArgAction, Command};
use mimic_executor::{Mimic, Verb};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    let db = match open_store(&matches) {
        Ok(db) => db,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };
    let compact = matches.get_flag("compact");

    // Dispatch mode
    match matches.subcommand() {
        Some(("request", sub)) => process::exit(run_request(&db, sub, compact)),
        Some(("reset", _)) => process::exit(run_reset(&db)),
        _ => {
            if io::stdin().is_terminal() {
                // No subcommand and nothing piped in: explain usage.
                let mut cli = build_cli();
                let _ = cli.print_help();
                process::exit(2);
            } else {
                process::exit(run_pipe(&db, compact));
            }
        }
    }
}

/// Build the complete CLI command tree.
fn build_cli() -> Command {
    Command::new("mimic")
        .about("Request-shaped CLI for the Mimic document store")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(false)
        .arg(
            Arg::new("db")
                .long("db")
                .help("Store directory (default: .mimic)")
                .global(true),
        )
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .help("Ephemeral in-memory store, no disk")
                .action(ArgAction::SetTrue)
                .conflicts_with("db")
                .global(true),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print bodies as single-line JSON")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("request")
                .about("Execute a single request and print the response body")
                .arg(
                    Arg::new("verb")
                        .required(true)
                        .help("GET, POST, PATCH or DELETE"),
                )
                .arg(
                    Arg::new("path")
                        .required(true)
                        .help("Resource path, bare or full URL (e.g. /api/chats/3)"),
                )
                .arg(
                    Arg::new("data")
                        .long("data")
                        .short('d')
                        .help("JSON payload for POST and PATCH"),
                ),
        )
        .subcommand(
            Command::new("reset").about("Discard all changes and restore the seed dataset"),
        )
}

/// Route storage-layer warnings (corruption resets, seeding) to stderr.
/// `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_store(matches: &clap::ArgMatches) -> Result<Mimic, String> {
    if matches.get_flag("ephemeral") {
        return Ok(Mimic::ephemeral());
    }
    let dir = matches
        .get_one::<String>("db")
        .map(|s| s.as_str())
        .unwrap_or(".mimic");
    Mimic::open(dir).map_err(|e| format!("Failed to open store at {}: {}", dir, e))
}

fn run_request(db: &Mimic, matches: &clap::ArgMatches, compact: bool) -> i32 {
    let verb_token = matches
        .get_one::<String>("verb")
        .map(String::as_str)
        .unwrap_or("");
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("");

    let verb = match verb_token.parse::<Verb>() {
        Ok(verb) => verb,
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    };

    let payload = match matches.get_one::<String>("data") {
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(value) => Some(value),
            Err(e) => {
                eprintln!("Invalid --data JSON: {}", e);
                return 1;
            }
        },
        None => None,
    };

    execute_and_print(db, verb, path, payload, compact)
}

fn run_reset(db: &Mimic) -> i32 {
    match db.executor().store().reset() {
        Ok(()) => {
            eprintln!("Store reset to seed data.");
            0
        }
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

fn run_pipe(db: &Mimic, compact: bool) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        match parse::parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(request)) => {
                if execute_and_print(db, request.verb, &request.path, request.payload, compact) != 0
                {
                    exit_code = 1;
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                exit_code = 1;
            }
        }
    }

    exit_code
}

fn execute_and_print(
    db: &Mimic,
    verb: Verb,
    path: &str,
    payload: Option<Value>,
    compact: bool,
) -> i32 {
    match db
        .executor()
        .handle(verb, path, payload)
        .and_then(|output| output.into_value())
    {
        Ok(body) => {
            print_body(&body, compact);
            0
        }
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

fn print_body(body: &Value, compact: bool) {
    if compact {
        println!("{}", body);
        return;
    }
    match serde_json::to_string_pretty(body) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_tree_is_consistent() {
        build_cli().debug_assert();
    }
}
