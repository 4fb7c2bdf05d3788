//! Terminal front-end for the tic-tac-toe engine.

use std::io::{self, BufRead, Write};
use tictactoe_core::GameState;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod view;

use command::Command;
use view::View;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let view = View {
        color: std::env::var("TICTACTOE_PLAIN").map_or(true, |v| v != "1"),
    };

    info!("Starting tic-tac-toe session");

    let mut game = GameState::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", view::HELP)?;
    writeln!(stdout, "{}", view.render(&game))?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(stdout, "{}", view::HELP)?,
            Ok(Command::Action(action)) => {
                let events = game.apply_action(action)?;
                debug!(?events, "action applied");
                if events.is_empty() {
                    writeln!(stdout, "That cell can't be played.")?;
                }
                writeln!(stdout, "{}", view.render(&game))?;
            }
            Err(e) => writeln!(stdout, "{}", e)?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    info!(score = ?game.score(), "Session ended");
    Ok(())
}
