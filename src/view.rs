//! Square board projections.
//!
//! A [`View`] is a `size`×`size` grid of markers stored row-major. Fleet
//! grids produce two kinds: [`FullCell`] views disclose every ship, while
//! [`FogCell`] views only show what an opponent has learned by shooting.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::Coord;
use crate::ship::CellState;

/// Full-disclosure marker: open water or the state of the ship cell there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullCell {
    Water,
    Ship(CellState),
}

/// Fog-of-war marker as seen by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogCell {
    /// Nothing known: open water or an undamaged ship cell.
    Unknown,
    /// Hit cell of a ship that is still afloat.
    Damaged,
    /// Cell of a sunk ship.
    Destroyed,
    /// Confirmed open water around a sunk ship.
    Water,
}

/// A `size`×`size` grid of markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> View<T> {
    /// A view with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Marker at `coord`, or `None` off the board.
    pub fn get(&self, coord: Coord) -> Option<T> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Overwrites the marker at `coord`. Off-board cells are ignored.
    pub(crate) fn set(&mut self, coord: Coord, value: T) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = value;
        }
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        let size = self.size.max(1);
        self.cells.iter().enumerate().map(move |(i, &value)| {
            let coord = Coord::new((i % size) as i32, (i / size) as i32);
            (coord, value)
        })
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: T) -> usize
    where
        T: PartialEq,
    {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.in_bounds(self.size) {
            Some(coord.y as usize * self.size + coord.x as usize)
        } else {
            None
        }
    }
}
