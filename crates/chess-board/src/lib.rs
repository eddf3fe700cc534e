//! Terminal shell for a two-player chess board.
//!
//! Input events arrive one per line on stdin and are turned into clicks on
//! a [`chess_engine::GameState`]. The board is redrawn after each event.
//!
//! # Modules
//!
//! - [`config`] - TOML settings for square size and colors
//! - [`command`] - line parsing
//! - [`render`] - colored and plain text output
//! - [`shell`] - the input loop

pub mod command;
pub mod config;
pub mod render;
pub mod shell;

pub use chess_engine::BoardGeometry;
pub use command::{Command, CommandError};
pub use config::{ConfigError, ShellConfig};
pub use shell::{Flow, Shell, Snapshot};
