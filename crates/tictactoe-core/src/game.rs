//! Core game state machine.
//!
//! This module contains the `GameState` engine: board, turn and round state
//! for the round in progress, plus the score for the whole session.

use crate::actions::{GameAction, GameEvent};
use crate::board::{evaluate, Board, Evaluation, Player, WinLine, CELL_COUNT};
use crate::geometry::{resolve, LineDescriptor};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised when validating untrusted input at the edges of the engine
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Cell index {0} is outside the board (expected 0-8)")]
    CellOutOfRange(i128),

    #[error("Cell index {0} is not a whole number")]
    NotAnIndex(String),
}

/// Lifecycle of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Marks can still be placed
    Active,
    /// A player completed a line
    Won,
    /// The board filled up without a winner
    Drawn,
}

/// Cumulative results for the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub wins_x: u32,
    pub wins_o: u32,
    pub draws: u32,
}

impl Score {
    /// Wins recorded for a player
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.wins_x,
            Player::O => self.wins_o,
        }
    }

    /// Number of completed rounds
    pub fn rounds(&self) -> u32 {
        self.wins_x + self.wins_o + self.draws
    }

    fn record(&mut self, winner: Option<Player>) {
        match winner {
            Some(Player::X) => self.wins_x += 1,
            Some(Player::O) => self.wins_o += 1,
            None => self.draws += 1,
        }
    }
}

/// What the presentation layer needs to know after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub state: RoundState,
    /// True once the round is won or drawn
    pub finished: bool,
    pub winner: Option<Player>,
    pub line: Option<WinLine>,
    /// How to draw `line`; present exactly when the round was won
    pub descriptor: Option<LineDescriptor>,
}

impl RoundOutcome {
    fn from_evaluation(evaluation: Evaluation) -> Self {
        match evaluation {
            Evaluation::InProgress => Self {
                state: RoundState::Active,
                finished: false,
                winner: None,
                line: None,
                descriptor: None,
            },
            Evaluation::Won { winner, line } => Self {
                state: RoundState::Won,
                finished: true,
                winner: Some(winner),
                line: Some(line),
                descriptor: Some(resolve(line)),
            },
            Evaluation::Drawn => Self {
                state: RoundState::Drawn,
                finished: true,
                winner: None,
                line: None,
                descriptor: None,
            },
        }
    }
}

/// JSON-friendly view of the whole engine, for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: Vec<Option<Player>>,
    pub current_player: Player,
    pub round_state: RoundState,
    pub outcome: RoundOutcome,
    pub score: Score,
}

/// The game engine.
///
/// One value lives for the whole session. Rounds are started and abandoned
/// with [`GameState::init_round`]; the score only goes back to zero through
/// [`GameState::reset_session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    round_state: RoundState,
    score: Score,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Start a session with a fresh round and an empty score
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            round_state: RoundState::Active,
            score: Score::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next placement will use
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn round_state(&self) -> RoundState {
        self.round_state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Check if the round is over
    pub fn is_finished(&self) -> bool {
        self.round_state != RoundState::Active
    }

    /// Outcome for the current board, without changing anything
    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome::from_evaluation(evaluate(&self.board))
    }

    /// Clear the board and hand the first move to X.
    ///
    /// An unfinished round is dropped without touching the score.
    pub fn init_round(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.round_state = RoundState::Active;
        debug!("round started");
    }

    /// Zero the score and start a new round
    pub fn reset_session(&mut self) {
        self.score = Score::default();
        info!("session score reset");
        self.init_round();
    }

    /// Place the current player's mark on `index`.
    ///
    /// Clicking an occupied cell, or any cell once the round is over, is
    /// ignored and the current outcome is returned unchanged.
    ///
    /// Panics if `index` is not in 0..9.
    pub fn place(&mut self, index: usize) -> RoundOutcome {
        self.try_place(index).unwrap_or_else(|| self.outcome())
    }

    /// Like [`GameState::place`], but returns `None` when the placement was
    /// ignored.
    fn try_place(&mut self, index: usize) -> Option<RoundOutcome> {
        assert!(
            index < CELL_COUNT,
            "cell index {} is outside the board",
            index
        );

        if self.round_state != RoundState::Active {
            debug!(cell = index, state = ?self.round_state, "placement after round end ignored");
            return None;
        }

        let player = self.current_player;
        if !self.board.place(index, player) {
            debug!(cell = index, "placement on occupied cell ignored");
            return None;
        }
        debug!(%player, cell = index, "mark placed");

        let evaluation = evaluate(&self.board);
        if evaluation.is_finished() {
            Some(self.end_round(evaluation))
        } else {
            self.current_player = player.opponent();
            Some(RoundOutcome::from_evaluation(evaluation))
        }
    }

    /// Close the round and record it on the scoreboard.
    fn end_round(&mut self, evaluation: Evaluation) -> RoundOutcome {
        let outcome = RoundOutcome::from_evaluation(evaluation);
        debug_assert!(outcome.finished, "end_round on an unfinished board");

        self.round_state = outcome.state;
        self.score.record(outcome.winner);

        match outcome.winner {
            Some(winner) => info!(
                %winner,
                line = ?outcome.line,
                wins_x = self.score.wins_x,
                wins_o = self.score.wins_o,
                "round won"
            ),
            None => info!(draws = self.score.draws, "round drawn"),
        }

        outcome
    }

    /// Apply an action and report what happened.
    ///
    /// Ignored placements succeed with no events. Only a cell index outside
    /// the board is rejected.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        let mut events = Vec::new();

        match action {
            GameAction::Place(index) => {
                if index >= CELL_COUNT {
                    return Err(GameError::CellOutOfRange(index as i128));
                }
                let player = self.current_player;

                let Some(outcome) = self.try_place(index) else {
                    return Ok(events);
                };

                events.push(GameEvent::MarkPlaced {
                    player,
                    cell: index,
                });

                match (outcome.winner, outcome.line, outcome.descriptor) {
                    (Some(winner), Some(line), Some(descriptor)) => {
                        events.push(GameEvent::RoundWon {
                            winner,
                            line,
                            descriptor,
                            score: self.score,
                        });
                    }
                    _ if outcome.finished => {
                        events.push(GameEvent::RoundDrawn { score: self.score });
                    }
                    _ => events.push(GameEvent::TurnPassed {
                        to: self.current_player,
                    }),
                }
            }

            GameAction::ResetRound => {
                self.init_round();
                events.push(GameEvent::RoundStarted);
            }

            GameAction::ResetSession => {
                self.reset_session();
                events.push(GameEvent::ScoreReset);
                events.push(GameEvent::RoundStarted);
            }
        }

        Ok(events)
    }

    /// Serializable view of the engine for presentation layers
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_json_friendly(),
            current_player: self.current_player,
            round_state: self.round_state,
            outcome: self.outcome(),
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::geometry::Orientation;
    use pretty_assertions::assert_eq;

    fn play(game: &mut GameState, moves: &[usize]) -> RoundOutcome {
        let mut outcome = game.outcome();
        for &m in moves {
            outcome = game.place(m);
        }
        outcome
    }

    #[test]
    fn test_new_game_starts_active_with_x() {
        let game = GameState::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.round_state(), RoundState::Active);
        assert_eq!(game.score(), Score::default());
        assert_eq!(game.board().filled(), 0);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameState::new();
        game.place(0);
        assert_eq!(game.current_player(), Player::O);
        game.place(4);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.board().get(0), Cell::Occupied(Player::X));
        assert_eq!(game.board().get(4), Cell::Occupied(Player::O));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = GameState::new();
        game.place(4);
        let before = game.clone();

        let outcome = game.place(4);
        assert_eq!(game, before);
        assert!(!outcome.finished);
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_top_row_win() {
        let mut game = GameState::new();
        let outcome = play(&mut game, &[0, 3, 1, 4, 2]);

        assert_eq!(
            outcome,
            RoundOutcome {
                state: RoundState::Won,
                finished: true,
                winner: Some(Player::X),
                line: Some([0, 1, 2]),
                descriptor: Some(LineDescriptor {
                    orientation: Orientation::Row,
                    index: Some(0),
                }),
            }
        );
        assert_eq!(game.score().wins_x, 1);
        assert_eq!(game.round_state(), RoundState::Won);
    }

    #[test]
    fn test_winner_keeps_the_turn() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_placement_after_win_is_ignored() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        let before = game.clone();

        let outcome = game.place(8);
        assert_eq!(game, before);
        assert_eq!(outcome.winner, Some(Player::X));
        assert_eq!(game.score().wins_x, 1, "score must not be counted twice");
    }

    #[test]
    fn test_draw() {
        let mut game = GameState::new();
        // X O X / X O O / O X X
        let outcome = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(outcome.state, RoundState::Drawn);
        assert!(outcome.finished);
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.descriptor, None);
        assert_eq!(game.score().draws, 1);
    }

    #[test]
    fn test_o_can_win() {
        let mut game = GameState::new();
        let outcome = play(&mut game, &[0, 2, 1, 4, 8, 6]);
        assert_eq!(outcome.winner, Some(Player::O));
        assert_eq!(
            outcome.descriptor.map(|d| d.orientation),
            Some(Orientation::DiagonalAnti)
        );
        assert_eq!(game.score().wins(Player::O), 1);
    }

    #[test]
    fn test_init_round_keeps_score() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        game.init_round();

        assert_eq!(game.score().wins_x, 1);
        assert_eq!(game.round_state(), RoundState::Active);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_init_round_mid_round_is_not_scored() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1]);
        game.init_round();
        assert_eq!(game.score().rounds(), 0);
        assert_eq!(game.board().filled(), 0);
    }

    #[test]
    fn test_reset_session_zeroes_score() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        game.init_round();
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.score().rounds(), 2);

        game.reset_session();
        assert_eq!(game.score(), Score::default());
        assert_eq!(game.round_state(), RoundState::Active);
        assert_eq!(game.board().filled(), 0);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_out_of_range_index_panics() {
        let mut game = GameState::new();
        game.place(9);
    }

    #[test]
    fn test_apply_action_events() {
        let mut game = GameState::new();
        let events = game.apply_action(GameAction::Place(4)).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::MarkPlaced {
                    player: Player::X,
                    cell: 4
                },
                GameEvent::TurnPassed { to: Player::O },
            ]
        );

        // Occupied cell: nothing happens
        assert_eq!(game.apply_action(GameAction::Place(4)).unwrap(), vec![]);
    }

    #[test]
    fn test_apply_action_win_event_carries_score() {
        let mut game = GameState::new();
        for m in [0, 3, 1, 4] {
            game.apply_action(GameAction::Place(m)).unwrap();
        }
        let events = game.apply_action(GameAction::Place(2)).unwrap();
        assert_eq!(
            events.last(),
            Some(&GameEvent::RoundWon {
                winner: Player::X,
                line: [0, 1, 2],
                descriptor: resolve([0, 1, 2]),
                score: Score {
                    wins_x: 1,
                    wins_o: 0,
                    draws: 0
                },
            })
        );
    }

    #[test]
    fn test_apply_action_rejects_out_of_range() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_action(GameAction::Place(9)),
            Err(GameError::CellOutOfRange(9))
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_apply_action_reports_huge_index_exactly() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_action(GameAction::Place(usize::MAX)),
            Err(GameError::CellOutOfRange(usize::MAX as i128))
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_apply_action_resets() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);

        let events = game.apply_action(GameAction::ResetRound).unwrap();
        assert_eq!(events, vec![GameEvent::RoundStarted]);
        assert_eq!(game.score().wins_x, 1);

        let events = game.apply_action(GameAction::ResetSession).unwrap();
        assert_eq!(events, vec![GameEvent::ScoreReset, GameEvent::RoundStarted]);
        assert_eq!(game.score(), Score::default());
    }

    #[test]
    fn test_score_wire_names() {
        let score = Score {
            wins_x: 2,
            wins_o: 1,
            draws: 3,
        };
        let json = serde_json::to_value(score).unwrap();
        assert_eq!(json, serde_json::json!({"winsX": 2, "winsO": 1, "draws": 3}));
    }
}
