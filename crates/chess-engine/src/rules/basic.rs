//! Movement-only chess rules.

use super::RuleSet;
use crate::movegen;
use crate::Board;
use chess_core::{Color, Move};

/// Chess piece movement without the rest of the game.
///
/// - Standard piece shapes, with blocking for rooks, bishops and queens
/// - Pawn single and double pushes, diagonal captures
/// - No check, checkmate or stalemate detection
/// - No castling, en passant or promotion
///
/// A player may leave or put their own king in check.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRules;

impl RuleSet for BasicRules {
    fn initial_board(&self) -> Board {
        Board::startpos()
    }

    fn is_valid_move(&self, board: &Board, side_to_move: Color, m: Move) -> bool {
        movegen::is_valid_move(board, side_to_move, m)
    }
}
