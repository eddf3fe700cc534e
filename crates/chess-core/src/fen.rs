//! Board text parsing based on FEN (Forsyth-Edwards Notation).
//!
//! Only the first two FEN fields carry meaning here: the piece placement
//! and the side to move. Castling, en passant and the move clocks have no
//! counterpart in the rules, so trailing fields are accepted and dropped.

use crate::{Color, Piece, BOARD_SIZE};
use thiserror::Error;

/// Errors that can occur when parsing board text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 fields, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed board text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement, one entry per row starting at row 0 (rank 8).
    pub rows: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    /// Side to move. Defaults to White when the field is omitted.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Parses board text such as `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"`.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let rows = Self::parse_piece_placement(parts[0])?;

        let active_color = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser { rows, active_color })
    }

    fn parse_piece_placement(
        placement: &str,
    ) -> Result<[[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize], FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut rows = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip as usize;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if col < BOARD_SIZE as usize {
                        rows[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if col != BOARD_SIZE as usize {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }

        Ok(rows)
    }

    /// Writes the placement and side to move back out as text.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for (row, cells) in self.rows.iter().enumerate() {
            let mut empty_count = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row + 1 < BOARD_SIZE as usize {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.active_color {
            Color::White => 'w',
            Color::Black => 'b',
        });
        fen
    }
}

impl Default for FenParser {
    fn default() -> Self {
        let back = |color| {
            use crate::PieceKind::*;
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
                .map(|kind| Some(Piece::new(kind, color)))
        };
        let pawns = |color| [Some(Piece::new(crate::PieceKind::Pawn, color)); BOARD_SIZE as usize];
        let empty = [None; BOARD_SIZE as usize];
        FenParser {
            rows: [
                back(Color::Black),
                pawns(Color::Black),
                empty,
                empty,
                empty,
                empty,
                pawns(Color::White),
                back(Color::White),
            ],
            active_color: Color::White,
        }
    }
}
