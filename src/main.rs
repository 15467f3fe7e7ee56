//! Tictactoe - terminal front end
//!
//! Reads one command per line from stdin and redraws the game after each.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, Write};
use tictactoe::builder::GameBuilder;
use tictactoe::session::{Command, Reply, Session, HELP};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let game = GameBuilder::new()
        .moves(cli.moves.iter().copied())
        .sort_descending(cli.descending)
        .build()
        .context("could not replay --moves")?;
    info!(moves = cli.moves.len(), "starting game");

    let mut session = Session::new(game);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    render(&mut stdout, &session, cli.json)?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "bad command");
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        match session.handle(command) {
            Reply::Render => render(&mut stdout, &session, cli.json)?,
            Reply::Notice(message) => {
                writeln!(stdout, "{message}")?;
                render(&mut stdout, &session, cli.json)?;
            }
            Reply::Help => writeln!(stdout, "{HELP}")?,
            Reply::Quit => break,
        }
    }

    Ok(())
}

fn render(out: &mut impl Write, session: &Session, json: bool) -> Result<()> {
    let view = session.view();
    if json {
        writeln!(out, "{}", serde_json::to_string(&view)?)?;
    } else {
        writeln!(out, "{}", view.render_text())?;
    }
    out.flush()?;
    Ok(())
}
