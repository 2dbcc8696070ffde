//! Board representation for the Game of Life

use crate::render::paint::BYTES_PER_PIXEL;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Errors raised while building a board
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}: must be positive and fit in memory")]
    InvalidDimensions { width: usize, height: usize },

    #[error("row {row} has length {actual}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid cell character '{ch}' at ({x}, {y})")]
    InvalidCell { ch: char, x: usize, y: usize },
}

/// Rectangular grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board, either randomly seeded or all dead
    pub fn create(width: usize, height: usize, seed_random: bool) -> Result<Self, BoardError> {
        if seed_random {
            Self::random_with(width, height, &mut rand::thread_rng())
        } else {
            Self::empty(width, height)
        }
    }

    /// Create an all-dead board
    pub fn empty(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Create a board where each cell is alive with probability 0.5, drawing from `rng`
    pub fn random_with<R: Rng>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        Self::check_dimensions(width, height)?;
        let cells = (0..width * height)
            .map(|_| Cell::from(rng.gen_bool(0.5)))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a board from rows of cells
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        Self::check_dimensions(width, height)?;

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a board with the same dimensions, computing each cell from its coordinate
    pub(crate) fn derive<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                cells.push(f(x, y));
            }
        }
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Both sides must be positive and the RGBA raster size must fit in `usize`
    pub fn check_dimensions(width: usize, height: usize) -> Result<(), BoardError> {
        let raster_len = width
            .checked_mul(height)
            .and_then(|cells| cells.checked_mul(BYTES_PER_PIXEL));
        if width == 0 || height == 0 || raster_len.is_none() {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the board.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        assert!(
            x < self.width && y < self.height,
            "coordinate ({}, {}) out of range for {}x{} board",
            x,
            y,
            self.width,
            self.height
        );
        self.cells[self.index(x, y)]
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the board has no living cells
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse rows of `1`/`#` (alive) and `0`/`.` (dead); blank lines are skipped
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, ch)| match ch {
                        '1' | '#' => Ok(Cell::Alive),
                        '0' | '.' => Ok(Cell::Dead),
                        _ => Err(BoardError::InvalidCell { ch, x, y }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{}", if cell.is_alive() { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
