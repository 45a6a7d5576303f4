//! Common types for Sea Battle: coordinates, shot outcomes and errors.

use alloc::string::String;
use core::fmt;

/// A cell on the board. `x` is the column, `y` the row, both 0-based.
///
/// Components are signed so a ship stepped past the top or left edge is
/// still representable until the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` when the cell lies inside a `size`×`size` board.
    pub fn in_bounds(&self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }

    /// The cell shifted by (`dx`, `dy`).
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Coord {
    /// Human-facing `row column`, 1-based.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.y + 1, self.x + 1)
    }
}

/// Classification of a shot against a fleet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum HitResult {
    /// No ship covers the target.
    Miss,
    /// The target is a ship cell that was already hit; nothing changes.
    AlreadyHit,
    /// An intact ship cell was damaged.
    Hit,
}

/// Errors returned by ship, grid and match operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Ship geometry was queried before an origin was assigned.
    #[error("ship has no origin; place it before querying its geometry")]
    Unpositioned,
    /// Raw orientation code is neither horizontal (1) nor vertical (2).
    #[error("invalid orientation code {0}")]
    InvalidOrientation(u8),
    /// Random placement gave up; the board is too small for the fleet.
    #[error("unable to place ship of length {length} after {attempts} attempts")]
    PlacementExhausted { length: usize, attempts: usize },
    /// A board needs at least one cell.
    #[error("board size {size} is too small")]
    BoardTooSmall { size: usize },
    /// Board dimension above the supported maximum.
    #[error("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
    /// A ship must cover at least one cell.
    #[error("ship has no cells")]
    EmptyShip,
    /// Explicitly positioned ship lies outside the board.
    #[error("ship at {x},{y} does not fit on a {size}x{size} board")]
    ShipOutOfBounds { x: i32, y: i32, size: usize },
    /// Explicitly positioned ship touches or overlaps another ship.
    #[error("ship at {x},{y} touches another ship")]
    ShipCollides { x: i32, y: i32 },
    /// Shot aimed outside the board.
    #[error("target {x},{y} is outside the {size}x{size} board")]
    TargetOutOfBounds { x: i32, y: i32, size: usize },
    /// A side fired while it was not its firing phase.
    #[error("it is not this side's turn to fire")]
    OutOfTurn,
    /// The match has already been decided.
    #[error("the match is over")]
    MatchOver,
    /// Random targeting found no unknown cell to shoot at.
    #[error("no unknown cells left to target")]
    NoTargetsLeft,
    /// The input collaborator could not produce a target.
    #[error("input failed: {0}")]
    Input(String),
}
