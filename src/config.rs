/// Default board dimension.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Largest board dimension. Row and column labels fit the three-character
/// cells of the rendered board up to this size.
pub const MAX_BOARD_SIZE: usize = 99;

/// Ship lengths of the fixed fleet, in placement order.
pub const FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Number of ships in a fleet.
pub const NUM_SHIPS: usize = FLEET.len();

/// Total number of ship cells in the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = fleet_cells(&FLEET);

/// Random origins tried per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Malformed lines tolerated per prompt before the console player gives up.
pub const MAX_INPUT_ATTEMPTS: usize = 20;

/// Sum of ship lengths for a fleet composition.
pub const fn fleet_cells(lengths: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < lengths.len() {
        total += lengths[i];
        i += 1;
    }
    total
}
