// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for playing a game
// ═══════════════════════════════════════════════════════════════════════

mod board_file;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;
use war_agents::{register_territories, Agent, Prompter, ScriptedAgent, TerminalAgent};
use war_engine::combat::RandomDice;
use war_engine::objectives::CATALOG;
use war_engine::setup::create_initial_state;

#[derive(Parser)]
#[command(name = "war", about = "Territory conquest with dice and secret objectives")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register territories and play a game
    Play {
        /// RNG seed for objectives and dice (defaults to the clock)
        #[arg(short, long)]
        seed: Option<u64>,
        /// TOML board file to use instead of typing territories in
        #[arg(short, long)]
        board: Option<PathBuf>,
        /// Answer script: one `A D` pair, `0`, `s` or `n` per line
        #[arg(long)]
        script: Option<PathBuf>,
        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the secret objectives
    Objectives,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, board, script, json } => cmd_play(seed, board, script, json),
        Commands::Objectives => cmd_objectives(),
    }
}

fn cmd_play(seed: Option<u64>, board: Option<PathBuf>, script: Option<PathBuf>, json: bool) -> Result<()> {
    let seed = seed.unwrap_or_else(clock_seed);
    println!("=== WAR: TERRITORY CONQUEST ===");
    println!("-------------------------------");

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let specs = match &board {
        Some(path) => board_file::load(path)?,
        None => register_territories(&mut prompter)?,
    };

    let mut agent: Box<dyn Agent> = match &script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open script {}", path.display()))?;
            let agent = ScriptedAgent::load(BufReader::new(file))
                .with_context(|| format!("failed to read script {}", path.display()))?;
            tracing::info!(answers = agent.remaining(), "script loaded");
            Box::new(agent)
        }
        None => Box::new(TerminalAgent::from_prompter(prompter)),
    };

    let mut dice = RandomDice::new(seed);
    let mut state = create_initial_state(specs, dice.rng_mut())?;
    tracing::info!(seed, territories = state.board.len(), "game started");

    let mut out = io::stdout();
    session::write_briefing(&mut out, &state)?;
    session::run_session(&mut state, agent.as_mut(), &mut dice, &mut out)?;

    if json {
        println!("{}", state.to_json_pretty()?);
    }
    Ok(())
}

fn cmd_objectives() -> Result<()> {
    println!("=== Secret Objectives ===\n");
    for (i, objective) in CATALOG.iter().enumerate() {
        println!("  {}. {}", i + 1, objective);
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
