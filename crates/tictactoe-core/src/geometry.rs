//! Win line geometry.
//!
//! Classifies a winning line into a row, column or diagonal and describes
//! where it sits on the board in normalized, unit-free terms. Turning that
//! into pixels or percentages is left to the presentation layer (see
//! [`crate::overlay`] for the browser version).

use crate::board::{WinLine, SIDE};
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

/// Which way a winning line runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Horizontal line through one row
    #[serde(rename = "row")]
    Row,
    /// Vertical line through one column
    #[serde(rename = "column")]
    Column,
    /// Top-left to bottom-right
    #[serde(rename = "diag-main")]
    DiagonalMain,
    /// Top-right to bottom-left
    #[serde(rename = "diag-anti")]
    DiagonalAnti,
}

/// Presentation-facing description of a winning line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineDescriptor {
    pub orientation: Orientation,
    /// Row or column number (0-2); `None` for diagonals
    pub index: Option<u8>,
}

impl LineDescriptor {
    /// Position of the line's centre across the board, in `[0, 1]`.
    ///
    /// For a row this is the vertical position, for a column the horizontal
    /// one. Diagonals always pass through the centre.
    pub fn offset(&self) -> f64 {
        match self.index {
            Some(i) => (f64::from(i) + 0.5) / SIDE as f64,
            None => 0.5,
        }
    }

    /// Length of the line relative to the board side
    pub fn length(&self) -> f64 {
        match self.orientation {
            Orientation::Row | Orientation::Column => 1.0,
            Orientation::DiagonalMain | Orientation::DiagonalAnti => SQRT_2,
        }
    }

    /// Clockwise rotation from horizontal, in degrees
    pub fn rotation_degrees(&self) -> i32 {
        match self.orientation {
            Orientation::Row => 0,
            Orientation::Column => 90,
            Orientation::DiagonalMain => 45,
            Orientation::DiagonalAnti => -45,
        }
    }
}

/// Classify a winning line.
///
/// Panics if `line` is not one of the eight lines in
/// [`crate::board::WIN_LINES`]; that can only happen through a bug in the
/// caller.
pub fn resolve(line: WinLine) -> LineDescriptor {
    let [a, b, c] = line;

    if b == a + SIDE && c == a + 2 * SIDE && a < SIDE {
        return LineDescriptor {
            orientation: Orientation::Column,
            index: Some((a % SIDE) as u8),
        };
    }

    if b == a + 1 && c == a + 2 && a % SIDE == 0 && a < SIDE * SIDE {
        return LineDescriptor {
            orientation: Orientation::Row,
            index: Some((a / SIDE) as u8),
        };
    }

    match line {
        [0, 4, 8] => LineDescriptor {
            orientation: Orientation::DiagonalMain,
            index: None,
        },
        [2, 4, 6] => LineDescriptor {
            orientation: Orientation::DiagonalAnti,
            index: None,
        },
        _ => panic!("{:?} is not a winning line", line),
    }
}
