//! Computer vs computer match, printing a JSON summary.

use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    init_logging, AiPlayer, GameError, Match, Player, Shot, Side, DEFAULT_BOARD_SIZE,
};
use sea_battle::{Coord, FogCell, HitResult, View};
use serde::Serialize;

#[derive(Parser)]
#[command(about = "Play the computer against itself")]
struct Args {
    seed: u64,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    #[arg(long, default_value_t = 10_000)]
    max_rounds: u32,
}

/// AI player that counts its own shots.
struct CountingAi {
    inner: AiPlayer,
    shots: usize,
    hits: usize,
}

impl CountingAi {
    fn new() -> Self {
        Self {
            inner: AiPlayer::new(),
            shots: 0,
            hits: 0,
        }
    }
}

impl Player for CountingAi {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        enemy: &View<FogCell>,
    ) -> Result<Coord, GameError> {
        self.inner.select_target(rng, enemy)
    }

    fn handle_shot_result(&mut self, shot: &Shot) {
        self.shots += 1;
        if shot.result == HitResult::Hit {
            self.hits += 1;
        }
    }
}

#[derive(Serialize)]
struct SideReport {
    shots: usize,
    hits: usize,
    damaged_cells: usize,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    size: usize,
    rounds: u32,
    winner: Option<Side>,
    player: SideReport,
    opponent: SideReport,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut game = Match::new(args.size, SmallRng::seed_from_u64(args.seed))?;
    let mut p1 = CountingAi::new();
    let mut p2 = CountingAi::new();

    while game.winner().is_none() && game.round() < args.max_rounds {
        game.step(&mut p1, &mut p2)?;
    }

    let report = Report {
        seed: args.seed,
        size: args.size,
        rounds: game.round(),
        winner: game.winner(),
        player: SideReport {
            shots: p1.shots,
            hits: p1.hits,
            damaged_cells: game.player_grid().damaged_cells(),
        },
        opponent: SideReport {
            shots: p2.shots,
            hits: p2.hits,
            damaged_cells: game.opponent_grid().damaged_cells(),
        },
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
