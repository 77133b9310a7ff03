//! Sx CLI
//!
//! Runs sxhook scripts against a synthetic request, and dumps the token
//! stream or parse tree of a script for debugging.

mod commands;

use std::sync::Once;

use commands::{lex_file, parse_file, parse_run_options, run_file};

static TRACING_INIT: Once = Once::new();

/// Install the `RUST_LOG`-filtered tree logger on stderr.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => match parse_run_options(&args[2..]) {
            Ok(options) => run_file(&options),
            Err(msg) => {
                eprintln!("error: {msg}");
                print_run_usage();
                std::process::exit(1);
            }
        },
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: sx tokens <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: sx parse <file>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("sx {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Sx - scripted HTTP middleware");
    println!();
    println!("Usage: sx <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>      Run a script (or .toml config) against a synthetic request");
    println!("  tokens <file>   Show the token stream");
    println!("  parse <file>    Show the parsed program");
    println!("  help            Show this message");
    println!("  version         Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) for evaluation traces on stderr.");
}

fn print_run_usage() {
    eprintln!("Usage: sx run <file> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --path <path>             Request path (default: /)");
    eprintln!("  --method <method>         Request method (default: GET)");
    eprintln!("  --header <Name:Value>     Request header, repeatable");
}
