//! Rule set abstraction.
//!
//! The [`RuleSet`] trait separates what the board allows from how a game is
//! driven. [`GameState`](crate::GameState) plays by [`BasicRules`].

mod basic;

pub use basic::BasicRules;

use crate::Board;
use chess_core::{Color, Move, Square};

/// A set of movement rules.
///
/// # Example
///
/// ```
/// use chess_engine::rules::{BasicRules, RuleSet};
/// use chess_core::{Color, Move};
///
/// let board = BasicRules.initial_board();
/// let e2e4 = Move::from_uci("e2e4").unwrap();
/// assert!(BasicRules.is_valid_move(&board, Color::White, e2e4));
/// ```
pub trait RuleSet {
    /// Returns the board a new game starts from.
    fn initial_board(&self) -> Board;

    /// Returns true if `side_to_move` may play `m` on `board`.
    fn is_valid_move(&self, board: &Board, side_to_move: Color, m: Move) -> bool;

    /// Returns every square the piece on `from` may move to.
    fn legal_targets(&self, board: &Board, side_to_move: Color, from: Square) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_valid_move(board, side_to_move, Move::new(from, to)))
            .collect()
    }

    /// Returns every legal move for the pieces of `side_to_move`.
    fn generate_moves(&self, board: &Board, side_to_move: Color) -> Vec<Move> {
        board
            .pieces()
            .filter(|(_, piece)| piece.is_owned_by(side_to_move))
            .flat_map(|(from, _)| {
                self.legal_targets(board, side_to_move, from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }
}
