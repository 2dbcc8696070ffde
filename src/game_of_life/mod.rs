//! Game of Life core functionality

pub mod board;
pub mod rules;

pub use board::{Board, BoardError, Cell};
pub use rules::Simulator;
