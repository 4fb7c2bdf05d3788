//! Text rendering of the board, status line and scoreboard.

use crossterm::style::{style, Stylize};
use tictactoe_core::{Cell, GameState, LineDescriptor, Orientation, Player, RoundOutcome};

pub const HELP: &str = "\
Cells are numbered 0-8, left to right, top to bottom:
  0 1 2
  3 4 5
  6 7 8
Commands: <cell>, n (new round), reset (zero the score), help, q (quit)";

/// Renders the engine state as plain or ANSI-coloured text
pub struct View {
    pub color: bool,
}

impl View {
    pub fn render(&self, game: &GameState) -> String {
        let outcome = game.outcome();
        let winning = outcome.line.unwrap_or_default();
        let mut out = String::new();

        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    let highlighted = outcome.line.is_some() && winning.contains(&index);
                    self.cell(game.board().get(index), index, highlighted)
                })
                .collect();
            out.push_str(&cells.join("|"));
            out.push('\n');
            if row < 2 {
                out.push_str("---+---+---\n");
            }
        }

        out.push_str(&status(&outcome, game.current_player()));
        out.push('\n');

        let score = game.score();
        out.push_str(&format!(
            "X {}  O {}  Draws {}",
            score.wins_x, score.wins_o, score.draws
        ));
        out
    }

    fn cell(&self, cell: Cell, index: usize, highlighted: bool) -> String {
        let text = match cell.player() {
            Some(p) => p.mark().to_string(),
            None => return format!(" {} ", index),
        };
        let text = if highlighted {
            format!("[{}]", text)
        } else {
            format!(" {} ", text)
        };

        match (self.color, cell.player()) {
            (true, Some(Player::X)) => style(text).red().to_string(),
            (true, Some(Player::O)) => style(text).blue().to_string(),
            _ => text,
        }
    }
}

/// One-line summary of the round
pub fn status(outcome: &RoundOutcome, current: Player) -> String {
    match (outcome.winner, outcome.descriptor) {
        (Some(winner), Some(descriptor)) => {
            format!("{} wins! {}", winner, describe_line(&descriptor))
        }
        _ if outcome.finished => "Draw.".to_string(),
        _ => format!("{} to move", current),
    }
}

/// Text version of the win-line overlay
pub fn describe_line(descriptor: &LineDescriptor) -> String {
    let position = |i: Option<u8>| match i {
        Some(0) => "top",
        Some(1) => "middle",
        Some(_) => "bottom",
        None => "",
    };
    let side = |i: Option<u8>| match i {
        Some(0) => "left",
        Some(1) => "middle",
        Some(_) => "right",
        None => "",
    };

    match descriptor.orientation {
        Orientation::Row => format!("─── {} row", position(descriptor.index)),
        Orientation::Column => format!("│ {} column", side(descriptor.index)),
        Orientation::DiagonalMain => "╲ diagonal".to_string(),
        Orientation::DiagonalAnti => "╱ diagonal".to_string(),
    }
}
