//! Board state and move legality for a two-player chess board.
//!
//! This crate provides:
//! - [`Board`] - an 8×8 grid of optional pieces
//! - [`GameState`] - board, side to move and selection, driven by clicks
//! - [`BoardGeometry`] - pointer coordinates to squares
//! - [`RuleSet`] - the seam between the game loop and the movement rules
//! - [`movegen`] - shape predicates, path checks and [`is_valid_move`]
//!
//! # Example
//!
//! ```
//! use chess_engine::{ClickOutcome, GameState};
//! use chess_core::{Color, Square};
//!
//! let mut game = GameState::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! assert_eq!(game.click(e2), ClickOutcome::Selected(e2));
//! assert!(game.click(e4).is_move());
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

mod board;
mod game;
mod geometry;
pub mod movegen;
pub mod rules;

pub use board::Board;
pub use game::{ClickOutcome, GameState};
pub use geometry::BoardGeometry;
pub use movegen::{is_valid_move, path_clear, squares_between};
pub use rules::{BasicRules, RuleSet};
