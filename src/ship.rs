//! Ship geometry, damage and mobility.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{Coord, GameError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends towards increasing `x`.
    Horizontal,
    /// Extends towards increasing `y`.
    Vertical,
}

impl Orientation {
    /// Unit step along the ship's axis.
    pub const fn axis(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Raw orientation codes: `1` horizontal, `2` vertical.
impl TryFrom<u8> for Orientation {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Orientation::Horizontal),
            2 => Ok(Orientation::Vertical),
            other => Err(GameError::InvalidOrientation(other)),
        }
    }
}

/// Damage state of a single ship cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Intact,
    Hit,
}

/// A ship of fixed length and orientation.
///
/// The origin is unset until placement. Cell `i` of [`Ship::cells`] is the
/// `i`-th cell along the axis starting at the origin. Once any cell is hit
/// the ship can no longer move.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    origin: Option<Coord>,
    cells: Vec<CellState>,
    mobile: bool,
}

impl Ship {
    /// An unplaced, undamaged ship.
    ///
    /// A zero-length ship is representable but counts as sunk from the start;
    /// `FleetGrid::from_ships` refuses it.
    pub fn new(length: usize, orientation: Orientation) -> Self {
        Self {
            length,
            orientation,
            origin: None,
            cells: vec![CellState::Intact; length],
            mobile: true,
        }
    }

    /// An undamaged ship anchored at `origin`.
    pub fn placed(length: usize, orientation: Orientation, origin: Coord) -> Self {
        let mut ship = Self::new(length, orientation);
        ship.set_origin(origin);
        ship
    }

    /// Assigns the anchor cell. Bounds and collisions are the caller's concern.
    pub fn set_origin(&mut self, origin: Coord) {
        self.origin = Some(origin);
    }

    pub fn origin(&self) -> Option<Coord> {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Per-cell damage, ordered from the origin along the axis.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn hit_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellState::Hit).count()
    }

    pub fn is_sunk(&self) -> bool {
        self.cells.iter().all(|&c| c == CellState::Hit)
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn occupied_cells(&self) -> Result<Vec<Coord>, GameError> {
        let origin = self.origin.ok_or(GameError::Unpositioned)?;
        let (dx, dy) = self.orientation.axis();
        Ok((0..self.length as i32)
            .map(|i| origin.offset(dx * i, dy * i))
            .collect())
    }

    /// Occupied cells plus every cell touching them, diagonals included.
    ///
    /// Cells with a negative coordinate are dropped; the far edges are not
    /// clipped, [`Ship::is_out_of_bounds`] covers those.
    pub fn footprint_with_halo(&self) -> Result<BTreeSet<Coord>, GameError> {
        let mut footprint = BTreeSet::new();
        for cell in self.occupied_cells()? {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let c = cell.offset(dx, dy);
                    if c.x >= 0 && c.y >= 0 {
                        footprint.insert(c);
                    }
                }
            }
        }
        Ok(footprint)
    }

    /// Index of `coord` along the ship, if the ship covers it.
    pub fn cell_index(&self, coord: Coord) -> Result<Option<usize>, GameError> {
        Ok(self.occupied_cells()?.iter().position(|&c| c == coord))
    }

    /// Marks the cell at `coord` as hit and immobilises the ship.
    ///
    /// Returns `false` without changes when the ship does not cover `coord`.
    pub fn apply_hit(&mut self, coord: Coord) -> Result<bool, GameError> {
        match self.cell_index(coord)? {
            Some(i) => {
                self.cells[i] = CellState::Hit;
                self.mobile = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// `true` when this ship's halo footprint reaches any cell of `other`.
    pub fn collides_with(&self, other: &Ship) -> Result<bool, GameError> {
        let footprint = self.footprint_with_halo()?;
        Ok(other
            .occupied_cells()?
            .iter()
            .any(|c| footprint.contains(c)))
    }

    /// `true` when the two ships share an occupied cell.
    pub fn overlaps(&self, other: &Ship) -> Result<bool, GameError> {
        let mine = self.occupied_cells()?;
        Ok(other.occupied_cells()?.iter().any(|c| mine.contains(c)))
    }

    /// `true` when any occupied cell lies outside `[0, size)`.
    pub fn is_out_of_bounds(&self, size: usize) -> Result<bool, GameError> {
        Ok(self.occupied_cells()?.iter().any(|c| !c.in_bounds(size)))
    }

    /// Shifts the origin by `delta` cells along the axis if the ship is
    /// still mobile. Returns whether the ship moved. The new position is
    /// not validated.
    pub fn attempt_step(&mut self, delta: i32) -> Result<bool, GameError> {
        let origin = self.origin.ok_or(GameError::Unpositioned)?;
        if !self.mobile {
            return Ok(false);
        }
        let (dx, dy) = self.orientation.axis();
        self.origin = Some(origin.offset(dx * delta, dy * delta));
        Ok(true)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, origin: {:?}, orientation: {:?}, hits: {}, mobile: {} }}",
            self.length,
            self.origin,
            self.orientation,
            self.hit_count(),
            self.mobile,
        )
    }
}
