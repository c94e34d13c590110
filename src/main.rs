use std::io;

use battleships::{init_logging, GameConfig, HotSeat, Match, BOARD_SIZE};
use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-player hot-seat battleships for the terminal.", long_about = None)]
struct Cli {
    /// Skip ship placement and play a short demo game.
    #[arg(long)]
    demo: bool,
    /// Width and height of each board (the longest ship must fit, rows go up to Z).
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let game = if cli.demo {
        Match::demo()
    } else {
        let config = GameConfig::new(cli.size)?;
        Match::new(&config, ["Player A".to_string(), "Player B".to_string()])
    };
    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut hot_seat = HotSeat::new(game, stdin.lock(), stdout.lock(), rng);
    match hot_seat.run()? {
        Some(winner) => info!("{} won", hot_seat.game().name(winner)),
        None => info!("game abandoned"),
    }
    Ok(())
}
