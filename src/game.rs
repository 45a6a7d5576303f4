//! Match controller: the round loop over two fleet grids.

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::FleetGrid,
    common::{Coord, GameError, HitResult},
    player::Player,
};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The human (or first) player.
    Player,
    /// The computer (or second) player.
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Position in the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    RoundStart,
    PlayerFiring,
    OpponentFiring,
    Repositioning,
    MatchOver { winner: Side },
}

/// Outcome of a match from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Won,
    Lost,
}

/// A resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub attacker: Side,
    pub target: Coord,
    pub result: HitResult,
    /// The hit sank the ship it struck.
    pub sunk_ship: bool,
    /// The shot sank the defender's last ship and decided the match.
    pub fleet_sunk: bool,
}

impl Shot {
    /// `true` when the attacker fires again: a hit that did not end the match.
    pub fn fires_again(&self) -> bool {
        self.result == HitResult::Hit && !self.fleet_sunk
    }
}

/// Two fleet grids and the turn order between them.
///
/// Each side keeps firing while it hits. A miss or a shot at an already
/// damaged cell passes the turn. After both sides have fired every mobile
/// ship repositions, and the match ends as soon as a fleet is sunk.
pub struct Match {
    player: FleetGrid,
    opponent: FleetGrid,
    phase: Phase,
    round: u32,
    rng: SmallRng,
}

impl Match {
    /// Start a match on `size`×`size` boards with randomly placed fleets.
    pub fn new(size: usize, mut rng: SmallRng) -> Result<Self, GameError> {
        let mut player = FleetGrid::new(size)?;
        player.init(&mut rng)?;
        let mut opponent = FleetGrid::new(size)?;
        opponent.init(&mut rng)?;
        info!("new match on a {}x{} board", size, size);
        Ok(Self::from_grids(player, opponent, rng))
    }

    /// Start a match from prepared grids.
    pub fn from_grids(player: FleetGrid, opponent: FleetGrid, rng: SmallRng) -> Self {
        Self {
            player,
            opponent,
            phase: Phase::RoundStart,
            round: 0,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed rounds.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player_grid(&self) -> &FleetGrid {
        &self.player
    }

    pub fn opponent_grid(&self) -> &FleetGrid {
        &self.opponent
    }

    /// Grid owned by `side`.
    pub fn grid(&self, side: Side) -> &FleetGrid {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    fn grid_mut(&mut self, side: Side) -> &mut FleetGrid {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn status(&self) -> MatchStatus {
        match self.phase {
            Phase::MatchOver {
                winner: Side::Player,
            } => MatchStatus::Won,
            Phase::MatchOver {
                winner: Side::Opponent,
            } => MatchStatus::Lost,
            _ => MatchStatus::InProgress,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::MatchOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Resolve a shot by `attacker` at `target` on the other side's grid
    /// and advance the phase accordingly.
    pub fn fire(&mut self, attacker: Side, target: Coord) -> Result<Shot, GameError> {
        match (self.phase, attacker) {
            (Phase::MatchOver { .. }, _) => return Err(GameError::MatchOver),
            (Phase::PlayerFiring, Side::Player) | (Phase::OpponentFiring, Side::Opponent) => {}
            _ => return Err(GameError::OutOfTurn),
        }

        let defender = self.grid_mut(attacker.other());
        let result = defender.apply_hit(target)?;
        let sunk_ship = result == HitResult::Hit
            && defender
                .ship_at(target)?
                .is_some_and(|ship| ship.is_sunk());
        let fleet_sunk = defender.is_fleet_sunk();
        let shot = Shot {
            attacker,
            target,
            result,
            sunk_ship,
            fleet_sunk,
        };
        debug!("{:?}", shot);

        self.phase = if shot.fleet_sunk {
            info!("{:?} sank the enemy fleet in round {}", attacker, self.round + 1);
            Phase::MatchOver { winner: attacker }
        } else if shot.fires_again() {
            self.phase
        } else {
            match attacker {
                Side::Player => Phase::OpponentFiring,
                Side::Opponent => Phase::Repositioning,
            }
        };
        Ok(shot)
    }

    /// Move every mobile ship on both grids.
    pub fn reposition(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Repositioning {
            return Err(GameError::OutOfTurn);
        }
        self.player.move_ships(&mut self.rng)?;
        self.opponent.move_ships(&mut self.rng)?;
        self.round += 1;
        self.phase = if self.opponent.is_fleet_sunk() {
            Phase::MatchOver {
                winner: Side::Player,
            }
        } else if self.player.is_fleet_sunk() {
            Phase::MatchOver {
                winner: Side::Opponent,
            }
        } else {
            Phase::RoundStart
        };
        Ok(())
    }

    /// Perform one transition of the state machine and return the new phase.
    pub fn step(
        &mut self,
        player: &mut dyn Player,
        opponent: &mut dyn Player,
    ) -> Result<Phase, GameError> {
        match self.phase {
            Phase::RoundStart => {
                let round = self.round + 1;
                player.handle_round_start(
                    round,
                    &self.player.full_view()?,
                    &self.opponent.fog_view(true)?,
                );
                opponent.handle_round_start(
                    round,
                    &self.opponent.full_view()?,
                    &self.player.fog_view(true)?,
                );
                self.phase = Phase::PlayerFiring;
            }
            Phase::PlayerFiring => {
                let shot = self.take_turn(Side::Player, player)?;
                player.handle_shot_result(&shot);
                opponent.handle_opponent_shot(&shot);
                if shot.fires_again() {
                    self.notify_fire_again(Side::Player, player)?;
                }
            }
            Phase::OpponentFiring => {
                let shot = self.take_turn(Side::Opponent, opponent)?;
                opponent.handle_shot_result(&shot);
                player.handle_opponent_shot(&shot);
                if shot.fires_again() {
                    self.notify_fire_again(Side::Opponent, opponent)?;
                }
            }
            Phase::Repositioning => {
                self.reposition()?;
                player.handle_repositioned();
                opponent.handle_repositioned();
            }
            Phase::MatchOver { .. } => return Err(GameError::MatchOver),
        }
        Ok(self.phase)
    }

    /// Hand the attacker both boards as they stand after its hit.
    fn notify_fire_again(&self, side: Side, attacker: &mut dyn Player) -> Result<(), GameError> {
        attacker.handle_fire_again(
            &self.grid(side).full_view()?,
            &self.grid(side.other()).fog_view(true)?,
        );
        Ok(())
    }

    fn take_turn(&mut self, side: Side, source: &mut dyn Player) -> Result<Shot, GameError> {
        let enemy = self.grid(side.other()).fog_view(true)?;
        let target = source.select_target(&mut self.rng, &enemy)?;
        self.fire(side, target)
    }

    /// Drive the match to completion and return the winner.
    pub fn run(
        &mut self,
        player: &mut dyn Player,
        opponent: &mut dyn Player,
    ) -> Result<Side, GameError> {
        loop {
            if let Phase::MatchOver { winner } = self.step(player, opponent)? {
                return Ok(winner);
            }
        }
    }
}
