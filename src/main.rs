#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    init_logging, render_boards, AiPlayer, CliPlayer, Match, Side, DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Sea battle against the computer on a square board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board dimension")]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut game = Match::new(cli.size, rng)?;
    let mut player = CliPlayer::stdio();
    let mut computer = AiPlayer::new();

    println!("***** Welcome! *****");
    let winner = game.run(&mut player, &mut computer)?;

    println!("\n***** GAME OVER *****");
    print!(
        "{}",
        render_boards(
            &game.player_grid().full_view()?,
            &game.opponent_grid().fog_view(true)?
        )
    );
    match winner {
        Side::Player => {
            println!("You are a fine captain and sank the whole enemy fleet! Congratulations!")
        }
        Side::Opponent => println!("Your fleet has been sunk. Try again!"),
    }
    Ok(())
}
