//! Core types for the chess board.
//!
//! This crate provides the plain values shared by the engine and the shells:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for row/column board coordinates
//! - [`Move`] for a proposed start/end pair
//! - [`FenParser`] for reading and writing board text

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{Square, BOARD_SIZE};
