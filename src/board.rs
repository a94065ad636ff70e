//! Textual 5x5 board rendering.

use crate::constants::BOARD_SIZE;

const UNKNOWN: char = 'O';
const GUESSED: char = 'X';
const SHIP: char = 'S';

/// Render the board as five space-joined rows. Guessed cells are marked
/// `X`; once `reveal_ship` is set and the ship cell has been guessed, that
/// cell is shown as `S` instead. Cell numbers run 1..=25, row-major:
/// cell n sits at row (n-1)/5, column (n-1)%5.
pub fn render(guesses: &[u8], reveal_ship: bool, ship_location: u8) -> [String; BOARD_SIZE] {
    let mut grid = [[UNKNOWN; BOARD_SIZE]; BOARD_SIZE];

    for &guess in guesses {
        let (row, col) = cell_position(guess);
        grid[row][col] = GUESSED;
    }

    if reveal_ship && guesses.contains(&ship_location) {
        let (row, col) = cell_position(ship_location);
        grid[row][col] = SHIP;
    }

    grid.map(|row| {
        row.iter()
            .map(|marker| marker.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn cell_position(cell: u8) -> (usize, usize) {
    let index = (cell - 1) as usize;
    (index / BOARD_SIZE, index % BOARD_SIZE)
}
