//! Bowling simulator CLI
//!
//! Plays seeded games in memory and prints the frame-by-frame score sheet,
//! or the JSON API response for tooling.

use anyhow::Result;
use bowl_core::{simulate_game_json, Frame, Game, GameEngine, SCHEMA_VERSION};
use clap::Parser;
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(name = "bowl_cli")]
#[command(about = "Simulate ten-pin bowling games", long_about = None)]
struct Cli {
    /// Game seed (for deterministic games)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to simulate
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Emit the JSON API response instead of the score sheet
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    for game_no in 0..cli.games {
        // Successive games from a base seed stay reproducible.
        let seed = cli.seed.map(|s| s.wrapping_add(u64::from(game_no)));

        if cli.json {
            let request = json!({ "schema_version": SCHEMA_VERSION, "seed": seed }).to_string();
            let response = simulate_game_json(&request).map_err(anyhow::Error::msg)?;
            println!("{response}");
        } else {
            let mut engine = match seed {
                Some(seed) => GameEngine::from_seed(seed),
                None => GameEngine::from_entropy(),
            };
            let seed = engine.seed();
            let game = engine.play()?;
            print_game(seed, &game);
        }
    }

    info!("simulated {} game(s)", cli.games);
    Ok(())
}

fn print_game(seed: u64, game: &Game) {
    println!("seed {seed}");
    for (index, frame) in game.frames.iter().enumerate() {
        println!("{}", format_frame(index, frame));
    }
    println!("total {}", game.score);
}

fn format_frame(index: usize, frame: &Frame) -> String {
    let rolls = frame
        .rolls
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "frame {:>2}  [{rolls:<8}]  {:<6}  raw {:>2}  bonus {:>2}  score {:>3}",
        index + 1,
        frame.display_text(),
        frame.raw_score(),
        frame.bonus,
        frame.score,
    )
}
