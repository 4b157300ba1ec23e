#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use stratego::{init_logging, parse_move, print_view, random_game, simulate, GameConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play random legal moves for both sides and print a JSON summary.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 5000)]
        max_moves: u32,
    },
    /// Two players at one terminal; each turn shows the mover's view.
    Play {
        #[arg(long, help = "Seed for the random deployments")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = GameConfig::classic();

    match cli.command {
        Commands::Sim { seed, max_moves } => {
            let report = simulate(&config, seed_or_random(seed), max_moves)?;
            println!("{}", serde_json::to_string(&report)?);
        }
        Commands::Play { seed } => {
            let seed = seed_or_random(seed);
            println!("Deploying both armies with seed {}", seed);
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut state = random_game(&config, &mut rng)?;
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();

            while !state.game_status().is_over() {
                let side = state.turn();
                print_view(&state.current_view(side));
                print!("{} move (e.g. A7 A6, or 'quit'): ", side);
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    break;
                };
                let line = line?;
                if line.trim() == "quit" {
                    break;
                }
                let Some(mv) = parse_move(side, &line) else {
                    println!("Could not read that move");
                    continue;
                };
                match state.apply_move(mv) {
                    Ok(Some(combat)) => println!("{}", combat),
                    Ok(None) => {}
                    Err(e) => println!("Illegal move: {}", e),
                }
            }
            println!("{}", state.game_status());
        }
    }
    Ok(())
}
