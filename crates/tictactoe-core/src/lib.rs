//! Tic-tac-toe rules engine with session scoring.
//!
//! This crate provides the core game logic, including:
//! - A 3x3 board with win and draw evaluation
//! - A turn and round state machine that keeps score across rounds
//! - Classification of the winning line for drawing an overlay
//!
//! # Architecture
//!
//! The engine knows nothing about rendering. A presentation layer forwards
//! cell selections to [`GameState::place`] and renders the returned
//! [`RoundOutcome`]. It can be compiled to:
//! - Native Rust, driven by the `tictactoe-term` front-end
//! - WebAssembly for the browser (`wasm` feature)
//!
//! # Modules
//!
//! - [`board`]: Cells, players, the fixed win lines and `evaluate`
//! - [`game`]: The engine state machine and score
//! - [`geometry`]: Row/column/diagonal classification of a win line
//! - [`actions`]: Serializable actions and resulting events
//! - [`overlay`]: CSS placement of the win-line overlay

pub mod actions;
pub mod board;
pub mod game;
pub mod geometry;
pub mod overlay;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use board::{evaluate, Board, Cell, Evaluation, Player, WinLine, CELL_COUNT, WIN_LINES};
pub use game::{GameError, GameSnapshot, GameState, RoundOutcome, RoundState, Score};
pub use geometry::{resolve, LineDescriptor, Orientation};
pub use overlay::OverlayStyle;
