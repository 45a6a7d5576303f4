use crate::{
    ai,
    common::{Coord, GameError},
    view::{FogCell, View},
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer opponent that fires at random unknown cells.
///
/// Cells already shown as damaged, destroyed or confirmed water are never
/// chosen again.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        enemy: &View<FogCell>,
    ) -> Result<Coord, GameError> {
        ai::random_target(enemy, rng).ok_or(GameError::NoTargetsLeft)
    }
}
