//! Game of Life rules (B3/S23) on a bounded board

use super::{Board, Cell};
use itertools::iproduct;

/// Stateless Game of Life rules engine
pub struct Simulator;

impl Simulator {
    /// Count living cells in the Moore neighborhood of `(x, y)`.
    ///
    /// Neighbors outside the board are not counted; there is no wraparound.
    pub fn neighbor_count(board: &Board, x: usize, y: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dx, dy)| (dx, dy) != (0, 0))
            .filter_map(|(dx, dy)| {
                let nx = x.checked_add_signed(dx).filter(|&nx| nx < board.width())?;
                let ny = y.checked_add_signed(dy).filter(|&ny| ny < board.height())?;
                Some(board.get(nx, ny))
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Next state of a cell given its current state and living neighbor count
    pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
        match (cell, neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Next state of the cell at `(x, y)`
    pub fn apply_rule(board: &Board, x: usize, y: usize) -> Cell {
        Self::next_state(board.get(x, y), Self::neighbor_count(board, x, y))
    }

    /// Evolve the board one generation forward.
    ///
    /// Every cell of the new board is computed from `board`, never from a
    /// partially built successor.
    pub fn advance(board: &Board) -> Board {
        board.derive(|x, y| Self::apply_rule(board, x, y))
    }

    /// Evolve the board for multiple generations
    pub fn advance_generations(mut board: Board, generations: usize) -> Board {
        for _ in 0..generations {
            board = Self::advance(&board);
        }
        board
    }
}
