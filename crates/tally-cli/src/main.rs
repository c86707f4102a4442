#![deny(warnings)]
//! Terminal front-end for the Tally calculator engine.
//!
//! Interactive mode reads keys line by line from stdin and renders the
//! display after every event. Script mode plays back a JSON array of key
//! strings, e.g. `["5", "0", "%"]`.

mod keymap;
mod render;

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tally_engine::{RecordingDisplay, TallyEngine};
use tally_types::InputEvent;
use tracing::{debug, info};

use crate::render::{JsonDisplay, LogHighlight, StdoutDisplay};

/// Tally keypad calculator
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Keypad calculator for the terminal", version)]
struct Cli {
    /// Play back a JSON array of key strings instead of reading stdin
    #[arg(short = 'f', long)]
    script: Option<PathBuf>,

    /// Print only the final display frame (script mode)
    #[arg(short, long)]
    quiet: bool,

    /// Print frames as JSON objects, one per line (script mode)
    #[arg(short, long, conflicts_with = "quiet")]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "tally_cli=debug,tally_engine=debug,info"
    } else {
        "info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    match &cli.script {
        Some(path) => run_script(path, cli.quiet, cli.json),
        None => run_repl(),
    }
}

fn run_script(path: &Path, quiet: bool, json: bool) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    let keys: Vec<String> =
        serde_json::from_str(&raw).context("script must be a JSON array of key strings")?;
    let events = keys
        .iter()
        .map(|entry| keymap::script_event(entry))
        .collect::<Result<Vec<_>, _>>()?;

    info!(events = events.len(), "playing back script");

    if quiet {
        let display = RecordingDisplay::new();
        let mut engine =
            TallyEngine::with_highlight(Box::new(display.clone()), Box::new(LogHighlight));
        for event in events {
            engine.handle(event);
        }
        println!("{}", display.last_text());
        return Ok(());
    }

    let display: Box<dyn tally_engine::DisplaySink> = if json {
        Box::new(JsonDisplay)
    } else {
        Box::new(StdoutDisplay)
    };
    let mut engine = TallyEngine::with_highlight(display, Box::new(LogHighlight));
    for event in events {
        engine.handle(event);
    }
    Ok(())
}

fn run_repl() -> Result<()> {
    println!("tally: 0-9 . + - * / = % s(sign) c(clear); empty line computes; q quits");

    let mut engine = TallyEngine::with_highlight(Box::new(StdoutDisplay), Box::new(LogHighlight));
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let trimmed = line.trim();
        if trimmed == "q" || trimmed == "quit" {
            break;
        }
        if trimmed.is_empty() {
            engine.handle(InputEvent::Equals);
            continue;
        }
        for key in trimmed.chars() {
            match keymap::event_for(key) {
                Some(event) => engine.handle(event),
                None => debug!(key = %key, "ignoring unmapped key"),
            }
        }
    }
    Ok(())
}
