//! Kokuchi - announcement generator for recurring online community events.
//!
//! Thin subcommand dispatch over the core pipeline: parsing pasted calendar
//! text, rendering announcements, assembling the monthly overview, and
//! planning the posting schedule. Generated text goes to stdout; logs go to
//! stderr so the output stays pipeable.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod commands;
mod context;

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();

    let result = match args.first().map(String::as_str) {
        Some("parse") => commands::parse(&args[1..]),
        Some("announce") => commands::announce(&args[1..]),
        Some("overview") => commands::overview(&args[1..]),
        Some("batch") => commands::batch(&args[1..]),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown command: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown command"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("Kokuchi - event announcement generator");
    println!();
    println!("USAGE:");
    println!("    kokuchi <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    parse [FILE]               Parse pasted calendar text (stdin without FILE) into a draft JSON");
    println!("    announce [FILE]            Validate and render one announcement from pasted calendar text");
    println!("    overview <MONTH> [OPTIONS] Build the monthly overview from the calendar events feed");
    println!("    batch [OPTIONS]            Plan the posting schedule CSV from the calendar events feed");
    println!("    help                       Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --events <FILE>   Events JSON feed (default: calendar.events_path from config)");
    println!("    --year <YYYY>     Year used to resolve M/D dates (default: current year)");
    println!("    --out <FILE>      Write batch CSV to FILE instead of stdout");
    println!();
    println!("Configuration is read from kokuchi.toml/kokuchi.json (or $KOKUCHI_CONFIG),");
    println!("announcement templates from templates/templates.csv (or $KOKUCHI_TEMPLATES_PATH).");
}
