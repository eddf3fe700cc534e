//! Board representation: an 8×8 grid of optional pieces.

use std::fmt;

use chess_core::{Color, FenError, FenParser, Piece, Square, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// Piece placement on an 8×8 grid, row-major.
///
/// Row 0 is Black's back rank and row 7 is White's, matching the way the
/// board is drawn. The board does not check how many kings it holds.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; N]; N],
        }
    }

    /// Creates a board from rows of cells, row 0 (rank 8) first.
    pub const fn from_rows(cells: [[Option<Piece>; N]; N]) -> Self {
        Board { cells }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_rows(FenParser::default().rows)
    }

    /// Creates a board from the placement field of a FEN string.
    ///
    /// Any side-to-move field is validated but otherwise ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_rows(FenParser::parse(fen)?.rows))
    }

    /// Writes the placement and `side_to_move` as FEN text.
    pub fn to_fen(&self, side_to_move: Color) -> String {
        FenParser {
            rows: self.cells,
            active_color: side_to_move,
        }
        .to_fen()
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns true if `sq` holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Puts `piece` on `sq`, returning whatever was there.
    pub fn set(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.replace(sq, Some(piece))
    }

    /// Empties `sq`, returning whatever was there.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.replace(sq, None)
    }

    fn replace(&mut self, sq: Square, cell: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[sq.row() as usize][sq.col() as usize], cell)
    }

    /// Moves the contents of `from` onto `to` and empties `from`.
    ///
    /// Whatever stood on `to` is overwritten and returned. No legality
    /// check is made; callers validate the move first.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.remove(from);
        self.replace(to, moving)
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Returns the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen(Color::White))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", N - row)?;
            for (col, cell) in cells.iter().enumerate() {
                let c = cell.map_or('.', Piece::to_fen_char);
                if col + 1 < N {
                    write!(f, "{} ", c)?;
                } else {
                    writeln!(f, "{}", c)?;
                }
            }
        }
        write!(f, "  a b c d e f g h")
    }
}
