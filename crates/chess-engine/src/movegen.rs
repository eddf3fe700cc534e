//! Move legality.
//!
//! Movement-only rules: each piece kind has a shape predicate over the
//! start→end delta, sliders also need a clear path, and nobody may land on
//! a piece of the side to move. There is no check detection, castling,
//! en passant or promotion.

use chess_core::{Color, Move, Piece, PieceKind, Square};

use crate::Board;

/// Returns true if `m` is a legal move for `side_to_move` on `board`.
///
/// The checks run in a fixed order:
/// 1. a move onto its own start square is illegal;
/// 2. an empty start square is illegal;
/// 3. landing on a piece of `side_to_move` is illegal (friendly fire);
/// 4. the moving piece's shape predicate must hold;
/// 5. rooks, bishops and queens also need [`path_clear`].
///
/// Whether the moving piece belongs to `side_to_move` is the caller's
/// business; the selection step already guarantees it.
pub fn is_valid_move(board: &Board, side_to_move: Color, m: Move) -> bool {
    let (from, to) = (m.from(), m.to());
    if m.is_null() {
        return false;
    }
    let Some(moving) = board.piece_at(from) else {
        return false;
    };
    let target = board.piece_at(to);
    if target.is_some_and(|p| p.is_owned_by(side_to_move)) {
        return false;
    }

    match moving.kind {
        PieceKind::Pawn => pawn_shape(board, moving, from, to),
        PieceKind::Knight => knight_shape(from, to),
        PieceKind::King => king_shape(from, to),
        PieceKind::Rook => rook_shape(from, to) && path_clear(board, from, to),
        PieceKind::Bishop => bishop_shape(from, to) && path_clear(board, from, to),
        PieceKind::Queen => queen_shape(from, to) && path_clear(board, from, to),
    }
}

/// Pawn movement: one step forward onto an empty square, two steps from the
/// home row when both squares are empty, or one step diagonally forward onto
/// an occupied square.
pub fn pawn_shape(board: &Board, pawn: Piece, from: Square, to: Square) -> bool {
    let dir = pawn.color.pawn_direction();
    let (dr, dc) = from.delta_to(to);
    let target_empty = board.is_empty(to);

    if dc == 0 && target_empty {
        if dr == dir {
            return true;
        }
        if dr == 2 * dir && from.row() == pawn.color.home_row() {
            return from.offset(dir, 0).is_some_and(|mid| board.is_empty(mid));
        }
    }

    dc.abs() == 1 && dr == dir && !target_empty
}

/// Straight line along a row or a column.
#[inline]
pub fn rook_shape(from: Square, to: Square) -> bool {
    from.row() == to.row() || from.col() == to.col()
}

/// The L-shaped jump.
#[inline]
pub fn knight_shape(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);
    matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
}

/// Diagonal line.
#[inline]
pub fn bishop_shape(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);
    dr.abs() == dc.abs()
}

#[inline]
pub fn queen_shape(from: Square, to: Square) -> bool {
    rook_shape(from, to) || bishop_shape(from, to)
}

/// One square in any direction.
#[inline]
pub fn king_shape(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);
    dr.abs() <= 1 && dc.abs() <= 1
}

/// Returns true if no piece stands strictly between `from` and `to`.
///
/// The endpoints are never inspected. Squares that do not share a row,
/// column or diagonal have nothing between them.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to).all(|sq| board.is_empty(sq))
}

/// Iterates over the squares strictly between two aligned squares, walking
/// from `from` towards `to`.
pub fn squares_between(from: Square, to: Square) -> Between {
    let (dr, dc) = from.delta_to(to);
    let aligned = dr == 0 || dc == 0 || dr.abs() == dc.abs();
    let remaining = if aligned {
        dr.unsigned_abs().max(dc.unsigned_abs()).saturating_sub(1)
    } else {
        0
    };
    Between {
        current: from,
        step: (dr.signum(), dc.signum()),
        remaining,
    }
}

/// Iterator returned by [`squares_between`].
#[derive(Debug, Clone)]
pub struct Between {
    current: Square,
    step: (i8, i8),
    remaining: u8,
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.remaining == 0 {
            return None;
        }
        let next = self.current.offset(self.step.0, self.step.1)?;
        self.current = next;
        self.remaining -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Between {}
