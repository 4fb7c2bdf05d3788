//! Board representation and win evaluation.
//!
//! This module contains:
//! - Player marks and cell contents
//! - The 3x3 board, indexed 0-8 in row-major order
//! - The eight fixed winning lines
//! - Pure evaluation of a board into an active, won or drawn result

use crate::game::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Number of cells along one side of the board
pub const SIDE: usize = 3;

/// A winning line, as three cell indices
pub type WinLine = [usize; 3];

/// All winning lines, in evaluation order.
///
/// Rows top to bottom, then columns left to right, then the main
/// diagonal, then the anti-diagonal. The first completed line in this
/// order is the one reported by [`evaluate`].
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves after this one
    pub fn opponent(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark for this player
    pub fn mark(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(*p),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Result of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// No line completed and at least one empty cell remains
    InProgress,
    /// A line is complete
    Won { winner: Player, line: WinLine },
    /// Every cell is filled and no line is complete
    Drawn,
}

impl Evaluation {
    /// Whether this evaluation ends the round
    pub fn is_finished(&self) -> bool {
        !matches!(self, Evaluation::InProgress)
    }
}

/// The 3x3 game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cells.
    ///
    /// Useful for setting up positions directly; the resulting board does not
    /// need to be reachable through legal play.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Validate an untrusted cell index (from JavaScript, typed input, etc.)
    pub fn parse_index(raw: i64) -> Result<usize, GameError> {
        usize::try_from(raw)
            .ok()
            .filter(|&index| index < CELL_COUNT)
            .ok_or(GameError::CellOutOfRange(i128::from(raw)))
    }

    /// Validate a cell index that arrived as a floating-point number
    /// (JavaScript). Fractions, NaN and infinities are rejected rather than
    /// truncated or wrapped.
    pub fn parse_number(raw: f64) -> Result<usize, GameError> {
        if !raw.is_finite() || raw.fract() != 0.0 {
            return Err(GameError::NotAnIndex(raw.to_string()));
        }
        if raw < 0.0 || raw >= CELL_COUNT as f64 {
            // Whole numbers beyond the i128 range saturate, which only
            // affects the reported value
            return Err(GameError::CellOutOfRange(raw as i128));
        }
        Ok(raw as usize)
    }

    /// Get the contents of a cell.
    ///
    /// Panics if `index` is not in 0..9.
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Put a mark on an empty cell.
    ///
    /// Returns `false` and leaves the board untouched if the cell is taken.
    /// Panics if `index` is not in 0..9.
    pub fn place(&mut self, index: usize, player: Player) -> bool {
        if !self.cells[index].is_empty() {
            return false;
        }
        self.cells[index] = Cell::Occupied(player);
        true
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Whether every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of marks on the board
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Indices of cells that can still be played
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&i| self.cells[i].is_empty())
            .collect()
    }

    /// JSON-friendly representation: one entry per cell, `null` when empty
    pub fn to_json_friendly(&self) -> Vec<Option<Player>> {
        self.cells.iter().map(Cell::player).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..SIDE {
                let mark = self.cells[row * SIDE + col]
                    .player()
                    .map_or('.', |p| p.mark());
                write!(f, "{}", mark)?;
            }
        }
        Ok(())
    }
}

/// Evaluate a board.
///
/// Lines are checked in [`WIN_LINES`] order and the first completed one wins.
/// Boards reached through legal play never hold two completed lines, so the
/// order only matters for hand-built positions.
#[instrument(level = "trace", skip(board), fields(filled = board.filled()))]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Cell::Occupied(player) = board.get(a) {
            if board.get(b) == Cell::Occupied(player) && board.get(c) == Cell::Occupied(player) {
                return Evaluation::Won {
                    winner: player,
                    line,
                };
            }
        }
    }

    if board.is_full() {
        Evaluation::Drawn
    } else {
        Evaluation::InProgress
    }
}
