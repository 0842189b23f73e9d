use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use atlas_state::config::Config;
use atlas_state::logging::init_tracing;
use atlas_state::store::ReducerRegistry;
use atlas_state::{default_state, DispatchOutcome, Store};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "atlas-state", version, about = "Replay viewer actions against the state store")]
struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the initial state tree.
    DefaultState,

    /// Dispatch every action of a JSON script and print the resulting tree.
    Replay {
        script: PathBuf,

        /// Print the tree after every applied action.
        #[arg(long)]
        each: bool,
    },
}

/// One entry of a replay script: `{"type": "FETCH_STRAATBEELD", "payload": 123}`.
#[derive(Debug, Deserialize)]
struct ScriptStep {
    #[serde(rename = "type")]
    name: String,
    #[serde(default)]
    payload: Value,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    init_tracing(&config.logging);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::DefaultState => print_state(&mut out, &default_state())?,
        Command::Replay { script, each } => {
            let content = std::fs::read_to_string(&script)
                .with_context(|| format!("Failed to read script '{}'", script.display()))?;
            let steps = parse_script(&content)?;
            let store = Store::new(ReducerRegistry::standard(), default_state(), config.store);
            replay(&store, &steps, each, &mut out)?;
        }
    }

    Ok(())
}

fn parse_script(content: &str) -> Result<Vec<ScriptStep>> {
    serde_json::from_str(content).context("Script must be a JSON array of {type, payload} objects")
}

fn replay(store: &Store, steps: &[ScriptStep], each: bool, out: &mut impl Write) -> Result<()> {
    for (index, step) in steps.iter().enumerate() {
        let outcome = store
            .dispatch_named(&step.name, step.payload.clone())
            .with_context(|| format!("Step {} ({}) failed", index + 1, step.name))?;

        match outcome {
            DispatchOutcome::Applied(_) if each => print_state(out, &store.get_state())?,
            DispatchOutcome::Applied(_) => {}
            DispatchOutcome::Unmatched => {
                tracing::warn!(step = index + 1, action = %step.name, "No reducer for action, skipped");
            }
            DispatchOutcome::Stale { request, latest } => {
                tracing::info!(
                    step = index + 1,
                    request = %request,
                    latest = %latest,
                    "Stale response dropped"
                );
            }
        }
    }

    if !each {
        print_state(out, &store.get_state())?;
    }
    Ok(())
}

fn print_state(out: &mut impl Write, state: &atlas_state::StateTree) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, state)?;
    writeln!(out)?;
    Ok(())
}
