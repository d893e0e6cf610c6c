//! codeclash CLI - judge a proposed move against a board snapshot.
//!
//! Reads a validation request as JSON from a file or stdin and prints the
//! verdict. The request is either the object form
//! `{"board": ..., "move": ..., "deck": ..., "players": ...}` (deck and
//! players optional as a pair) or the raw argument-array form the engine
//! accepts over the wire. The process exits 0 for both verdicts; a nonzero
//! exit means the request never reached the engine.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use codeclash_rules::{RulesEnforcer, diff_stats};
use codeclash_types::{Board, Move};

#[derive(Debug, Parser)]
#[command(name = "codeclash", about = "Judge a proposed move against a board snapshot")]
struct Args {
    /// Request file; reads stdin when omitted.
    request: Option<PathBuf>,

    /// Also print added/removed line counts for moves that carry code.
    #[arg(long)]
    stats: bool,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so the verdict on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let raw = read_request(args.request.as_deref())?;
    let request: Value = serde_json::from_str(&raw).context("request is not valid JSON")?;
    let argv = to_argument_array(request);

    let enforcer = RulesEnforcer::new();
    let legal = enforcer.is_legal_invocation(&argv);

    if args.stats {
        if let Some(line) = stats_line(&argv) {
            println!("{line}");
        }
    }
    println!("{}", if legal { "legal" } else { "illegal" });

    Ok(())
}

fn read_request(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read request from stdin")?;
            Ok(raw)
        }
    }
}

/// Normalize the request into the engine's argument-array form. Anything
/// that doesn't carry the expected keys becomes an empty array, which the
/// engine rejects as malformed.
fn to_argument_array(request: Value) -> Vec<Value> {
    match request {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let board = map.remove("board");
            let mv = map.remove("move");
            let deck = map.remove("deck");
            let players = map.remove("players");
            match (board, mv, deck, players) {
                (Some(board), Some(mv), Some(deck), Some(players)) => {
                    vec![board, mv, deck, players]
                }
                (Some(board), Some(mv), None, None) => vec![board, mv],
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    }
}

/// `+added -removed` for moves that carry a proposed buffer.
fn stats_line(argv: &[Value]) -> Option<String> {
    let board: Board = serde_json::from_value(argv.first()?.clone()).ok()?;
    let mv: Move = serde_json::from_value(argv.get(1)?.clone()).ok()?;
    let code = mv.code()?;
    let (added, removed) = diff_stats(&board.editor_text, code);
    Some(format!("+{added} -{removed}"))
}
