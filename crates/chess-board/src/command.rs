//! Parsing of input lines into shell commands.

use chess_core::{Move, Square};
use thiserror::Error;

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{command}' takes {expected} argument(s)")]
    TooManyArguments {
        command: &'static str,
        expected: usize,
    },

    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("invalid move '{0}'")]
    InvalidMove(String),
}

/// One input event or query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pointer-down at screen coordinates.
    Click { x: i64, y: i64 },
    /// Click on a square by name.
    At(Square),
    /// Two clicks: source square, then target.
    Move(Move),
    /// Key press.
    Key(String),
    /// Legal targets of the selected piece.
    Hint,
    /// Redraw the board.
    Show,
    /// Print a JSON snapshot of the game.
    Json,
    /// Leave the loop.
    Quit,
    /// Blank line or comment.
    Empty,
}

impl Command {
    /// Parses one line of input.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Command::Empty);
        }

        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(Command::Empty);
        };
        let args: Vec<&str> = parts.collect();

        match word.to_ascii_lowercase().as_str() {
            "click" => {
                let [x, y] = args[..] else {
                    return Err(if args.len() < 2 {
                        CommandError::MissingArgument("click")
                    } else {
                        CommandError::TooManyArguments {
                            command: "click",
                            expected: 2,
                        }
                    });
                };
                Ok(Command::Click {
                    x: parse_coordinate(x)?,
                    y: parse_coordinate(y)?,
                })
            }
            "at" => {
                let arg = single_argument("at", &args)?;
                Square::from_algebraic(arg)
                    .map(Command::At)
                    .ok_or_else(|| CommandError::InvalidSquare(arg.to_string()))
            }
            "move" => {
                let arg = single_argument("move", &args)?;
                Move::from_uci(arg)
                    .map(Command::Move)
                    .ok_or_else(|| CommandError::InvalidMove(arg.to_string()))
            }
            "key" => Ok(Command::Key(single_argument("key", &args)?.to_string())),
            "reset" => no_arguments("reset", &args, Command::Key("r".to_string())),
            "hint" => no_arguments("hint", &args, Command::Hint),
            "show" => no_arguments("show", &args, Command::Show),
            "json" => no_arguments("json", &args, Command::Json),
            "quit" => no_arguments("quit", &args, Command::Quit),
            "exit" => no_arguments("exit", &args, Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

fn parse_coordinate(s: &str) -> Result<i64, CommandError> {
    s.parse()
        .map_err(|_| CommandError::InvalidCoordinate(s.to_string()))
}

fn single_argument<'a>(command: &'static str, args: &[&'a str]) -> Result<&'a str, CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument(command)),
        [arg] => Ok(arg),
        _ => Err(CommandError::TooManyArguments {
            command,
            expected: 1,
        }),
    }
}

fn no_arguments(
    command: &'static str,
    args: &[&str],
    parsed: Command,
) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::TooManyArguments {
            command,
            expected: 0,
        })
    }
}
