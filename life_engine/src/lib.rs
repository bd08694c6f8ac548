//! # life_engine
//!
//! Conway's Game of Life on a toroidal board.
//! The [`Board`] keeps every generation it has gone through so a run can be saved, replayed
//! and animated in the terminal.

pub mod board;
pub use board::Board;

pub mod cell;
pub use cell::Cell;

pub mod error;
pub use error::{Error, Result};

pub mod format;
pub use format::{format_board, parse_board, read_board, save_board};

pub mod grid;
pub use grid::Grid;

pub mod render;
pub use render::Animation;

pub mod simulation;
pub use simulation::{Simulation, SimulationConfig, SimulationReport};

mod progress;
mod replay;
