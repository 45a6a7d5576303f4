//! Fleet grid: one side's ships on a square board.

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::common::{Coord, GameError, HitResult};
use crate::config::{FLEET, MAX_BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{CellState, Orientation, Ship};
use crate::view::{FogCell, FullCell, View};

/// A square board holding one side's fleet.
///
/// Ships never overlap and never leave the board. After random placement
/// they also never touch, diagonals included; movement only keeps them
/// from overlapping.
#[derive(Clone, PartialEq, Eq)]
pub struct FleetGrid {
    size: usize,
    ships: Vec<Ship>,
}

impl FleetGrid {
    /// An empty board, `1..=MAX_BOARD_SIZE` cells on a side.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::BoardTooSmall { size });
        }
        if size > MAX_BOARD_SIZE {
            return Err(GameError::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size,
            ships: Vec::new(),
        })
    }

    /// A board holding `ships`, each of which must already have an origin.
    ///
    /// Ships are checked in order against the ships before them, the same
    /// way random placement checks them.
    pub fn from_ships(size: usize, ships: Vec<Ship>) -> Result<Self, GameError> {
        let mut grid = Self::new(size)?;
        for ship in ships {
            if ship.length() == 0 {
                return Err(GameError::EmptyShip);
            }
            let origin = ship.origin().ok_or(GameError::Unpositioned)?;
            if ship.is_out_of_bounds(size)? {
                return Err(GameError::ShipOutOfBounds {
                    x: origin.x,
                    y: origin.y,
                    size,
                });
            }
            if grid.collides_with_placed(&ship)? {
                return Err(GameError::ShipCollides {
                    x: origin.x,
                    y: origin.y,
                });
            }
            grid.ships.push(ship);
        }
        Ok(grid)
    }

    /// Replaces the fleet with the standard composition at random,
    /// non-touching positions.
    pub fn init<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.ships.clear();
        let fleet: Vec<Ship> = FLEET
            .iter()
            .map(|&length| {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                Ship::new(length, orientation)
            })
            .collect();

        for mut ship in fleet {
            self.random_origin(rng, &mut ship)?;
            debug!("placed {:?}", ship);
            self.ships.push(ship);
        }
        Ok(())
    }

    /// Rejection-samples an origin for `ship` that keeps it on the board
    /// and clear of every ship already placed.
    fn random_origin<R: Rng + ?Sized>(&self, rng: &mut R, ship: &mut Ship) -> Result<(), GameError> {
        let max = self.size as i32;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            ship.set_origin(Coord::new(rng.random_range(0..max), rng.random_range(0..max)));
            if ship.is_out_of_bounds(self.size)? {
                continue;
            }
            if !self.collides_with_placed(ship)? {
                return Ok(());
            }
        }
        Err(GameError::PlacementExhausted {
            length: ship.length(),
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    fn collides_with_placed(&self, ship: &Ship) -> Result<bool, GameError> {
        for placed in &self.ships {
            if ship.collides_with(placed)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Result<Option<&Ship>, GameError> {
        for ship in &self.ships {
            if ship.cell_index(coord)?.is_some() {
                return Ok(Some(ship));
            }
        }
        Ok(None)
    }

    /// Steps every mobile ship one cell along its axis.
    ///
    /// Each ship tries a random direction first and the opposite one second,
    /// and stays put when neither keeps it on the board and off every other
    /// ship. Ships are processed in placement order, so later ships see the
    /// settled positions of earlier ones.
    pub fn move_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for i in 0..self.ships.len() {
            if !self.ships[i].is_mobile() {
                continue;
            }
            let primary = if rng.random() { 1 } else { -1 };
            for delta in [primary, -primary] {
                let mut candidate = self.ships[i].clone();
                candidate.attempt_step(delta)?;
                if self.fits_after_move(i, &candidate)? {
                    debug!("ship {} moved {:+} to {:?}", i, delta, candidate.origin());
                    self.ships[i] = candidate;
                    break;
                }
            }
        }
        Ok(())
    }

    fn fits_after_move(&self, index: usize, candidate: &Ship) -> Result<bool, GameError> {
        if candidate.is_out_of_bounds(self.size)? {
            return Ok(false);
        }
        for (j, other) in self.ships.iter().enumerate() {
            if j != index && candidate.overlaps(other)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Resolves a shot at `coord`.
    pub fn apply_hit(&mut self, coord: Coord) -> Result<HitResult, GameError> {
        let view = self.full_view()?;
        let result = match view.get(coord) {
            None => {
                return Err(GameError::TargetOutOfBounds {
                    x: coord.x,
                    y: coord.y,
                    size: self.size,
                })
            }
            Some(FullCell::Water) => HitResult::Miss,
            Some(FullCell::Ship(CellState::Hit)) => HitResult::AlreadyHit,
            Some(FullCell::Ship(CellState::Intact)) => {
                for ship in self.ships.iter_mut() {
                    if ship.apply_hit(coord)? {
                        break;
                    }
                }
                HitResult::Hit
            }
        };
        debug!("shot at {:?}: {:?}", coord, result);
        Ok(result)
    }

    /// Board with every ship cell disclosed.
    pub fn full_view(&self) -> Result<View<FullCell>, GameError> {
        let mut view = View::filled(self.size, FullCell::Water);
        for ship in &self.ships {
            for (coord, &state) in ship.occupied_cells()?.into_iter().zip(ship.cells()) {
                view.set(coord, FullCell::Ship(state));
            }
        }
        Ok(view)
    }

    /// Board as the opponent sees it.
    ///
    /// With `reveal_sunk_halo` the water around sunk ships is shown as
    /// confirmed water. Ship cells always take precedence over halos.
    pub fn fog_view(&self, reveal_sunk_halo: bool) -> Result<View<FogCell>, GameError> {
        let mut view = View::filled(self.size, FogCell::Unknown);
        if reveal_sunk_halo {
            for ship in self.ships.iter().filter(|s| s.is_sunk()) {
                for coord in ship.footprint_with_halo()? {
                    view.set(coord, FogCell::Water);
                }
            }
        }
        for ship in &self.ships {
            let sunk = ship.is_sunk();
            for (coord, &state) in ship.occupied_cells()?.into_iter().zip(ship.cells()) {
                let marker = match state {
                    CellState::Intact => FogCell::Unknown,
                    CellState::Hit if sunk => FogCell::Destroyed,
                    CellState::Hit => FogCell::Damaged,
                };
                view.set(coord, marker);
            }
        }
        Ok(view)
    }

    /// Number of hit ship cells.
    pub fn damaged_cells(&self) -> usize {
        self.ships.iter().map(Ship::hit_count).sum()
    }

    /// Number of ship cells in the fleet.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::length).sum()
    }

    /// `true` when every cell of every ship is hit. A board without ships
    /// has nothing to sink and never counts as sunk.
    pub fn is_fleet_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }
}

impl fmt::Debug for FleetGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "FleetGrid {{\n  size: {},\n  damaged: {}/{},\n  ships: {:?}\n}}",
            self.size,
            self.damaged_cells(),
            self.total_cells(),
            self.ships
        )
    }
}
