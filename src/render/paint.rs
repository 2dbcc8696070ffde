//! Rasterizing a board into an RGBA pixel buffer

use crate::game_of_life::{Board, Cell};
use thiserror::Error;

/// Bytes per pixel in the RGBA buffer
pub const BYTES_PER_PIXEL: usize = 4;

/// Opaque green for living cells
pub const ALIVE_RGBA: [u8; 4] = [0x00, 0xff, 0x00, 0xff];

/// Opaque white for dead cells
pub const DEAD_RGBA: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Two-color board renderer
pub struct Renderer;

impl Renderer {
    /// Size in bytes of the buffer `paint` expects for `board`
    pub fn buffer_len(board: &Board) -> usize {
        board.width() * board.height() * BYTES_PER_PIXEL
    }

    /// Allocate a buffer sized for `board`
    pub fn allocate(board: &Board) -> Vec<u8> {
        vec![0; Self::buffer_len(board)]
    }

    /// Color of a cell
    #[inline]
    pub fn color(cell: Cell) -> [u8; 4] {
        match cell {
            Cell::Alive => ALIVE_RGBA,
            Cell::Dead => DEAD_RGBA,
        }
    }

    /// Paint every cell of `board` into `buffer`, row-major, top to bottom.
    ///
    /// The pixel for `(x, y)` lands at byte offset `(y * width + x) * 4`.
    /// The buffer must be exactly `width * height * 4` bytes.
    pub fn paint(board: &Board, buffer: &mut [u8]) -> Result<(), RenderError> {
        let expected = Self::buffer_len(board);
        if buffer.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }

        for (pixel, &cell) in buffer
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(board.cells())
        {
            pixel.copy_from_slice(&Self::color(cell));
        }
        Ok(())
    }
}
