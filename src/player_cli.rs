#![cfg(feature = "std")]

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::string::{String, ToString};

use log::warn;
use rand::rngs::SmallRng;

use crate::{
    common::{Coord, GameError, HitResult},
    config::MAX_INPUT_ATTEMPTS,
    game::Shot,
    ui,
    view::{FogCell, FullCell, View},
};

use crate::player::Player;

/// Malformed target text. The console player reprompts on these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected exactly 2 numbers, got {0}")]
    TokenCount(usize),
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
    #[error("{value} is outside 1..={size}")]
    OutOfRange { value: i64, size: usize },
}

/// Parse `row column`, both 1-based, into a board coordinate.
pub fn parse_target(line: &str, size: usize) -> Result<Coord, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::TokenCount(tokens.len()));
    }
    let mut values = [0i32; 2];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        let value: i64 = token
            .parse()
            .map_err(|_| InputError::NotANumber(token.to_string()))?;
        if value < 1 || value > size as i64 {
            return Err(InputError::OutOfRange { value, size });
        }
        *slot = (value - 1) as i32;
    }
    let [row, col] = values;
    Ok(Coord::new(col, row))
}

/// Interactive player reading targets from a line-based input.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<BufReader<Stdin>, Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self, own: &View<FullCell>, enemy: &View<FogCell>) {
        let _ = write!(self.output, "{}", ui::render_boards(own, enemy));
    }

    fn say(&mut self, message: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.output, "{}", message);
    }

    /// Prompt until a well-formed target is entered.
    fn read_target(&mut self, size: usize) -> Result<Coord, GameError> {
        for _ in 0..MAX_INPUT_ATTEMPTS {
            write!(self.output, "Enter two coordinates (row column): ")
                .and_then(|_| self.output.flush())
                .map_err(|e| GameError::Input(e.to_string()))?;
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| GameError::Input(e.to_string()))?;
            if read == 0 {
                return Err(GameError::Input("input closed".to_string()));
            }
            match parse_target(&line, size) {
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    warn!("rejected target {:?}: {}", line.trim(), e);
                    self.say(format_args!(
                        "{}. Enter 2 numbers between 1 and {}, try again.",
                        e, size
                    ));
                }
            }
        }
        Err(GameError::Input(format!(
            "no valid target after {} attempts",
            MAX_INPUT_ATTEMPTS
        )))
    }
}

fn describe(result: HitResult) -> &'static str {
    match result {
        HitResult::Miss => "Miss!",
        HitResult::AlreadyHit => "That part of the ship is already hit.",
        HitResult::Hit => "Hit!",
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        enemy: &View<FogCell>,
    ) -> Result<Coord, GameError> {
        self.read_target(enemy.size())
    }

    fn handle_round_start(&mut self, round: u32, own: &View<FullCell>, enemy: &View<FogCell>) {
        self.say(format_args!("\n***** Round {} *****", round));
        self.show(own, enemy);
    }

    fn handle_fire_again(&mut self, own: &View<FullCell>, enemy: &View<FogCell>) {
        self.show(own, enemy);
    }

    fn handle_shot_result(&mut self, shot: &Shot) {
        self.say(format_args!("{}", describe(shot.result)));
        if shot.sunk_ship {
            self.say(format_args!("Enemy ship sunk!"));
        }
        if shot.fires_again() {
            self.say(format_args!("Fire again!"));
        } else if !shot.fleet_sunk {
            self.say(format_args!("** Computer's turn. **"));
        }
    }

    fn handle_opponent_shot(&mut self, shot: &Shot) {
        self.say(format_args!(
            "Computer fires at {} -> {}",
            shot.target,
            describe(shot.result)
        ));
        if shot.sunk_ship {
            self.say(format_args!("Your ship was sunk."));
        }
        if shot.fires_again() {
            self.say(format_args!("Computer fires again."));
        }
    }

    fn handle_repositioned(&mut self) {
        self.say(format_args!("Ships have changed position."));
    }
}
