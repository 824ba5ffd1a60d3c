//! Core Connect Four game logic: board representation, player identity, and
//! the per-game state the UI drives one turn at a time.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
