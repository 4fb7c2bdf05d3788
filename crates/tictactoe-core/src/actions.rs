//! Commands a presentation layer can send to the engine, and the events
//! that result from them.

use crate::board::{Player, WinLine};
use crate::game::Score;
use crate::geometry::LineDescriptor;
use serde::{Deserialize, Serialize};

/// All possible actions a user can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Mark the cell at this index for the current player
    Place(usize),
    /// Start a new round, keeping the score
    ResetRound,
    /// Zero the score and start a new round
    ResetSession,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was put on the board
    MarkPlaced { player: Player, cell: usize },

    /// The turn passed to the other player
    TurnPassed { to: Player },

    /// A player completed a line
    RoundWon {
        winner: Player,
        line: WinLine,
        descriptor: LineDescriptor,
        score: Score,
    },

    /// The board filled up with no line completed
    RoundDrawn { score: Score },

    /// The board was cleared for a new round
    RoundStarted,

    /// The score was zeroed
    ScoreReset,
}
