//! Text rendering of the two boards side by side.

use alloc::string::String;
use core::fmt::Write;

use crate::ship::CellState;
use crate::view::{FogCell, FullCell, View};

const CELL_WIDTH: usize = 3;
const GAP: &str = "    ";

/// Marker for a cell of one's own board.
pub fn own_marker(cell: FullCell) -> char {
    match cell {
        FullCell::Water => '-',
        FullCell::Ship(CellState::Intact) => '□',
        FullCell::Ship(CellState::Hit) => '■',
    }
}

/// Marker for a cell of the enemy board.
pub fn fog_marker(cell: FogCell) -> char {
    match cell {
        FogCell::Unknown => '-',
        FogCell::Damaged => '■',
        FogCell::Destroyed => 'X',
        FogCell::Water => '+',
    }
}

/// Render the player's board (left) and the enemy board (right) with
/// 1-based row numbers down the side and column numbers across the top.
pub fn render_boards(own: &View<FullCell>, enemy: &View<FogCell>) -> String {
    let size = own.size();
    let width = CELL_WIDTH * (size + 1);
    let mut out = String::new();

    let _ = writeln!(out, "{:<width$}{}{}", "   You", GAP, "   Computer", width = width);
    let mut header = String::new();
    header.push_str(&" ".repeat(CELL_WIDTH));
    for c in 1..=size {
        let _ = write!(header, "{:>w$}", c, w = CELL_WIDTH);
    }
    let _ = writeln!(out, "{}{}{}", header, GAP, header);

    for (r, (mine, theirs)) in own.rows().zip(enemy.rows()).enumerate() {
        let _ = write!(out, "{:>w$}", r + 1, w = CELL_WIDTH);
        for &cell in mine {
            let _ = write!(out, "{:>w$}", own_marker(cell), w = CELL_WIDTH);
        }
        let _ = write!(out, "{}{:>w$}", GAP, r + 1, w = CELL_WIDTH);
        for &cell in theirs {
            let _ = write!(out, "{:>w$}", fog_marker(cell), w = CELL_WIDTH);
        }
        out.push('\n');
    }
    out
}
