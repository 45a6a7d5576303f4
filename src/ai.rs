// Uniform random targeting over cells the fog of war still hides.

use alloc::vec::Vec;

use crate::{
    common::Coord,
    view::{FogCell, View},
};
use rand::{seq::IndexedRandom, Rng};

/// Every cell of `enemy` still marked unknown.
pub fn candidate_targets(enemy: &View<FogCell>) -> Vec<Coord> {
    enemy
        .iter()
        .filter(|&(_, cell)| cell == FogCell::Unknown)
        .map(|(coord, _)| coord)
        .collect()
}

/// Pick one unknown cell uniformly at random, or `None` when nothing is
/// left to shoot at.
pub fn random_target<R: Rng + ?Sized>(enemy: &View<FogCell>, rng: &mut R) -> Option<Coord> {
    candidate_targets(enemy).choose(rng).copied()
}
