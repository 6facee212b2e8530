//! Subcommand implementations.
//!
//! Each command is a thin wrapper: read input, call the core services,
//! print the result. All argument handling lives here so `main` stays a
//! pure dispatcher.

use std::path::Path;

use anyhow::{bail, Context as _};
use chrono::Datelike;

use kokuchi_core::{BatchPlanner, MonthlyOverviewBuilder};
use kokuchi_domain::parse_calendar_text;
use kokuchi_domain::types::GenreCatalog;

use crate::context::AppContext;

/// `kokuchi parse [FILE]` - print the draft parsed from calendar text.
pub fn parse(args: &[String]) -> anyhow::Result<()> {
    let text = read_input(args.first().map(String::as_str))?;
    let config = kokuchi_infra::config::load()?;
    let genres = GenreCatalog::with_overrides(config.genres);
    let draft = parse_calendar_text(&text, &genres);
    println!("{}", serde_json::to_string_pretty(&draft)?);
    Ok(())
}

/// `kokuchi announce [FILE]` - validate and render one announcement.
pub fn announce(args: &[String]) -> anyhow::Result<()> {
    let text = read_input(args.first().map(String::as_str))?;
    let ctx = AppContext::load()?;
    let mut draft = parse_calendar_text(&text, &ctx.genres);

    let report = ctx.engine.validate(&draft);
    if !report.is_valid() {
        for error in report.errors() {
            eprintln!("{error}");
        }
        bail!("Draft is missing {} required field(s)", report.errors().len());
    }

    match ctx.engine.render(&mut draft) {
        Some(message) => {
            println!("{message}");
            Ok(())
        }
        None => bail!("No template registered for {}", event_type_label(&draft)),
    }
}

/// `kokuchi overview <MONTH> [--events FILE] [--year YYYY]`.
pub fn overview(args: &[String]) -> anyhow::Result<()> {
    let options = CommandOptions::from_args(args)?;
    let Some(month_label) = options.positional.first() else {
        bail!("overview needs a month label, e.g. `kokuchi overview 3月`");
    };
    let ctx = AppContext::load()?;
    let drafts = ctx.fetch_drafts(options.events.as_deref())?;
    let builder = MonthlyOverviewBuilder::new(options.year, ctx.genres.clone());
    println!("{}", builder.build(&drafts, month_label));
    Ok(())
}

/// `kokuchi batch [--events FILE] [--year YYYY] [--out FILE]`.
pub fn batch(args: &[String]) -> anyhow::Result<()> {
    let options = CommandOptions::from_args(args)?;
    let ctx = AppContext::load()?;
    let drafts = ctx.fetch_drafts(options.events.as_deref())?;
    let rows = BatchPlanner::new(&ctx.engine, options.year).plan(&drafts);
    match options.out.as_deref() {
        Some(path) => {
            kokuchi_infra::write_to_path(Path::new(path), &rows)?;
            tracing::info!(path, rows = rows.len(), "Wrote posting schedule");
        }
        None => kokuchi_infra::write_rows(std::io::stdout().lock(), &rows)?,
    }
    Ok(())
}

/// Parsed command-line options shared by `overview` and `batch`.
#[derive(Debug, PartialEq, Eq)]
struct CommandOptions {
    positional: Vec<String>,
    events: Option<String>,
    out: Option<String>,
    year: i32,
}

impl CommandOptions {
    fn from_args(args: &[String]) -> anyhow::Result<Self> {
        let mut options = Self {
            positional: Vec::new(),
            events: None,
            out: None,
            year: current_year(),
        };
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--events" => options.events = Some(take_value(&mut iter, "--events")?),
                "--out" => options.out = Some(take_value(&mut iter, "--out")?),
                "--year" => {
                    let raw = take_value(&mut iter, "--year")?;
                    options.year =
                        raw.parse().with_context(|| format!("Invalid year: {raw}"))?;
                }
                other if other.starts_with("--") => bail!("Unknown option: {other}"),
                other => options.positional.push(other.to_string()),
            }
        }
        Ok(options)
    }
}

fn take_value(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> anyhow::Result<String> {
    iter.next().cloned().ok_or_else(|| anyhow::anyhow!("{flag} needs a value"))
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Read command input from a file, or from stdin when no path is given.
fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
        }
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin"),
    }
}

fn event_type_label(draft: &kokuchi_domain::types::EventDraft) -> String {
    draft
        .event_type
        .map_or_else(|| "unclassified event".to_string(), |event_type| event_type.to_string())
}
