//! The input loop: one event per line, redraw after each.

use std::io::{self, BufRead, Write};

use chess_core::{Square, BOARD_SIZE};
use chess_engine::{BoardGeometry, ClickOutcome, GameState};
use serde::Serialize;
use tracing::{debug, warn};

use crate::command::Command;
use crate::config::ShellConfig;
use crate::render::render;

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// JSON view of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Rows from rank 8 down to rank 1, FEN letters or null.
    pub board: Vec<Vec<Option<char>>>,
    pub side_to_move: &'static str,
    pub selection: Option<String>,
    pub fen: String,
}

impl Snapshot {
    pub fn of(game: &GameState) -> Self {
        let board = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| {
                        Square::new(row, col)
                            .and_then(|sq| game.piece_at(sq))
                            .map(|piece| piece.to_fen_char())
                    })
                    .collect()
            })
            .collect();

        Snapshot {
            board,
            side_to_move: game.side_to_move().name(),
            selection: game.selection().map(|sq| sq.to_algebraic()),
            fen: game.to_fen(),
        }
    }
}

/// A game plus the screen layout and display settings.
pub struct Shell {
    game: GameState,
    geometry: BoardGeometry,
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self::with_game(config, GameState::new())
    }

    pub fn with_game(config: ShellConfig, game: GameState) -> Self {
        Shell {
            game,
            geometry: BoardGeometry::new(config.square_size),
            config,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Reads commands from `input` until end of input or `quit`.
    ///
    /// Malformed lines produce one error line on `out` and the loop continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        self.draw(&mut out)?;
        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    warn!(line = %line.trim(), error = %e, "bad command");
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };
            if self.handle(command, &mut out)? == Flow::Quit {
                break;
            }
        }
        out.flush()
    }

    /// Executes one command, writing feedback to `out`.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Empty => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::Click { x, y } => {
                match self.geometry.square_at(x, y) {
                    Some(sq) => {
                        let outcome = self.game.click(sq);
                        report(out, &outcome)?;
                    }
                    None => {
                        debug!(x, y, "pointer outside board");
                        writeln!(out, "outside board")?;
                    }
                }
                self.draw(out)?;
            }
            Command::At(sq) => {
                let outcome = self.game.click(sq);
                report(out, &outcome)?;
                self.draw(out)?;
            }
            Command::Move(mv) => {
                let outcome = self.game.play(mv);
                report(out, &outcome)?;
                self.draw(out)?;
            }
            Command::Key(key) => {
                if key.eq_ignore_ascii_case("r") {
                    self.game.reset();
                    writeln!(out, "reset")?;
                } else {
                    debug!(%key, "key ignored");
                }
                self.draw(out)?;
            }
            Command::Hint => match self.game.selection() {
                Some(from) => {
                    let targets: Vec<String> = self
                        .game
                        .legal_targets(from)
                        .into_iter()
                        .map(|sq| sq.to_algebraic())
                        .collect();
                    if targets.is_empty() {
                        writeln!(out, "{from}: no legal targets")?;
                    } else {
                        writeln!(out, "{from}: {}", targets.join(" "))?;
                    }
                }
                None => writeln!(out, "nothing selected")?,
            },
            Command::Show => self.draw(out)?,
            Command::Json => {
                let json = serde_json::to_string(&Snapshot::of(&self.game))
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(render(&self.game, &self.config).as_bytes())
    }
}

fn report<W: Write>(out: &mut W, outcome: &ClickOutcome) -> io::Result<()> {
    match outcome {
        ClickOutcome::Selected(sq) => writeln!(out, "selected {sq}"),
        ClickOutcome::Deselected(sq) => writeln!(out, "deselected {sq}"),
        ClickOutcome::Moved {
            mv,
            piece,
            captured: Some(captured),
        } => writeln!(out, "moved {piece} {mv}, captured {captured}"),
        ClickOutcome::Moved { mv, piece, .. } => writeln!(out, "moved {piece} {mv}"),
        ClickOutcome::Rejected(mv) => writeln!(out, "rejected {mv}"),
        ClickOutcome::Ignored => writeln!(out, "ignored"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;

    fn plain() -> ShellConfig {
        ShellConfig {
            color: false,
            show_coordinates: false,
            ..ShellConfig::default()
        }
    }

    fn run(shell: &mut Shell, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pointer_clicks_play_a_move() {
        let mut shell = Shell::new(plain());
        // e2 is column 4, row 6; e4 is column 4, row 4.
        let out = run(&mut shell, "click 310 460\nclick 310 310\n");
        assert!(out.contains("selected e2"));
        assert!(out.contains("moved White Pawn e2e4"));
        assert_eq!(shell.game().side_to_move(), Color::Black);
        assert_eq!(
            shell.game().to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"
        );
    }

    #[test]
    fn click_outside_board_changes_nothing() {
        let mut shell = Shell::new(plain());
        let out = run(&mut shell, "click 310 460\nclick 700 10\n");
        assert!(out.contains("outside board"));
        assert_eq!(shell.game().selection(), Square::from_algebraic("e2"));
    }

    #[test]
    fn capture_is_reported() {
        let mut shell = Shell::new(plain());
        let out = run(&mut shell, "move e2e4\nmove d7d5\nmove e4d5\n");
        assert!(out.contains("moved White Pawn e4d5, captured Black Pawn"));
    }

    #[test]
    fn illegal_move_is_rejected() {
        let mut shell = Shell::new(plain());
        let out = run(&mut shell, "at e2\nat e5\n");
        assert!(out.contains("rejected e2e5"));
        assert_eq!(shell.game().selection(), None);
        assert_eq!(shell.game().side_to_move(), Color::White);
    }

    #[test]
    fn reset_key_restores_start() {
        let mut shell = Shell::new(plain());
        run(&mut shell, "move e2e4\nat e7\nkey R\n");
        assert_eq!(shell.game(), &GameState::new());

        run(&mut shell, "move g1f3\nreset\n");
        assert_eq!(shell.game(), &GameState::new());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut shell = Shell::new(plain());
        run(&mut shell, "move e2e4\nkey x\n");
        assert_eq!(shell.game().side_to_move(), Color::Black);
    }

    #[test]
    fn hint_lists_targets() {
        let mut shell = Shell::new(plain());
        let out = run(&mut shell, "hint\nat b1\nhint\n");
        assert!(out.contains("nothing selected"));
        assert!(out.contains("b1: a3 c3"));
    }

    #[test]
    fn bad_lines_report_and_continue() {
        let mut shell = Shell::new(plain());
        let out = run(&mut shell, "castle\n# comment\n\nat e2\n");
        assert!(out.contains("error: unknown command 'castle'"));
        assert!(out.contains("selected e2"));
    }

    #[test]
    fn quit_stops_reading() {
        let mut shell = Shell::new(plain());
        run(&mut shell, "quit\nmove e2e4\n");
        assert_eq!(shell.game().side_to_move(), Color::White);
    }

    #[test]
    fn json_snapshot() {
        let mut shell = Shell::new(plain());
        let out = run(&mut shell, "at e2\njson\n");
        let line = out.lines().find(|l| l.starts_with('{')).unwrap();
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["side_to_move"], "white");
        assert_eq!(value["selection"], "e2");
        assert_eq!(value["board"][0][0], "r");
        assert_eq!(value["board"][4][4], serde_json::Value::Null);
        assert_eq!(value["board"][7][4], "K");
        assert_eq!(value["fen"], "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
    }

    #[test]
    fn custom_square_size() {
        let config = ShellConfig {
            square_size: 10,
            ..plain()
        };
        let mut shell = Shell::new(config);
        assert_eq!(shell.geometry().square_size(), 10);
        run(&mut shell, "click 45 65\n");
        assert_eq!(shell.game().selection(), Square::from_algebraic("e2"));
    }
}
