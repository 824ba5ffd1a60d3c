//! # Connect Four
//!
//! A two-player Connect Four game for the terminal. The rules engine lives
//! in [`game`] and exposes move legality, gravity drops, win detection at
//! the newest piece, and draw detection; the [`ui`] module wraps it in a
//! Ratatui front end with a name entry form and a mouse-driven board.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, per-game state
//! - [`ui`] — Terminal UI: name form, board view, event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
