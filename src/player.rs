use rand::rngs::SmallRng;

use crate::{
    common::{Coord, GameError},
    game::Shot,
    view::{FogCell, FullCell, View},
};

/// A source of targets for one side of a match.
///
/// The match controller asks the active side for a target, resolves the
/// shot and reports the outcome to both sides.
pub trait Player {
    /// Choose the next target on the enemy board, given what is known of it.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        enemy: &View<FogCell>,
    ) -> Result<Coord, GameError>;

    /// A new round begins; both boards as this side may see them.
    fn handle_round_start(&mut self, _round: u32, _own: &View<FullCell>, _enemy: &View<FogCell>) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _shot: &Shot) {}

    /// The player hit and fires again; both boards after that hit.
    fn handle_fire_again(&mut self, _own: &View<FullCell>, _enemy: &View<FogCell>) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _shot: &Shot) {}

    /// Both fleets have finished repositioning.
    fn handle_repositioned(&mut self) {}
}
