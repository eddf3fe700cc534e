//! Game state driven by clicks on squares.
//!
//! [`GameState`] owns the board, the side to move and the current selection.
//! A shell turns each pointer event into a square and calls
//! [`GameState::click`]; the state machine does the rest:
//!
//! ```text
//! NoSelection --click own piece--> Selected
//! Selected    --click same square--> NoSelection
//! Selected    --click legal target--> move applied, turn passes, NoSelection
//! Selected    --click anything else--> NoSelection
//! ```

use chess_core::{Color, FenError, FenParser, Move, Piece, Square};
use tracing::{debug, info};

use crate::rules::{BasicRules, RuleSet};
use crate::Board;

/// What a click did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was selected.
    Selected(Square),
    /// The selected square was clicked again and the selection dropped.
    Deselected(Square),
    /// The selected piece moved and the turn passed to the other side.
    Moved {
        mv: Move,
        piece: Piece,
        captured: Option<Piece>,
    },
    /// The move from the selected square was illegal; the selection dropped.
    Rejected(Move),
    /// Nothing selected and the square holds no piece of the side to move.
    Ignored,
}

impl ClickOutcome {
    /// Returns true if the click changed the board.
    pub fn is_move(&self) -> bool {
        matches!(self, ClickOutcome::Moved { .. })
    }

    /// Returns a short lowercase name for this outcome.
    pub fn name(&self) -> &'static str {
        match self {
            ClickOutcome::Selected(_) => "selected",
            ClickOutcome::Deselected(_) => "deselected",
            ClickOutcome::Moved { .. } => "moved",
            ClickOutcome::Rejected(_) => "rejected",
            ClickOutcome::Ignored => "ignored",
        }
    }
}

/// A two-player game on one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    selection: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a game at the starting position, White to move, nothing selected.
    pub fn new() -> Self {
        Self::from_board(BasicRules.initial_board(), Color::White)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        GameState {
            board,
            side_to_move,
            selection: None,
        }
    }

    /// Creates a game from board text: placement plus optional side to move.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_board(
            Board::from_rows(parsed.rows),
            parsed.active_color,
        ))
    }

    /// Returns the position as board text.
    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.side_to_move)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Returns the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Selects `sq` if it holds a piece of the side to move.
    ///
    /// Returns whether the selection was taken; otherwise nothing changes.
    pub fn select(&mut self, sq: Square) -> bool {
        match self.board.piece_at(sq) {
            Some(piece) if piece.is_owned_by(self.side_to_move) => {
                debug!(square = %sq, %piece, "selected");
                self.selection = Some(sq);
                true
            }
            _ => false,
        }
    }

    /// Drops the selection. Idempotent.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Returns true if the side to move may play `from`→`to`.
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        BasicRules.is_valid_move(&self.board, self.side_to_move, Move::new(from, to))
    }

    /// Returns the squares the piece on `from` may move to.
    ///
    /// Empty unless `from` holds a piece of the side to move.
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        match self.board.piece_at(from) {
            Some(piece) if piece.is_owned_by(self.side_to_move) => {
                BasicRules.legal_targets(&self.board, self.side_to_move, from)
            }
            _ => Vec::new(),
        }
    }

    /// Moves whatever is on `from` onto `to`, returning the captured piece.
    ///
    /// No legality check and no turn change; see [`click`](Self::click)
    /// for the checked path.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        self.board.apply_move(from, to)
    }

    /// Passes the turn to the other side.
    pub fn switch_player(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Restores the starting position, White to move, nothing selected.
    pub fn reset(&mut self) {
        info!("game reset");
        *self = Self::new();
    }

    /// Handles a click on `sq`.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        let Some(from) = self.selection else {
            return if self.select(sq) {
                ClickOutcome::Selected(sq)
            } else {
                ClickOutcome::Ignored
            };
        };

        // Any second click ends the selection, whatever it leads to.
        self.clear_selection();

        if sq == from {
            debug!(square = %sq, "deselected");
            return ClickOutcome::Deselected(sq);
        }

        let mv = Move::new(from, sq);
        let piece = match self.board.piece_at(from) {
            Some(piece) if self.is_valid_move(from, sq) => piece,
            _ => {
                debug!(%mv, side = %self.side_to_move, "rejected");
                return ClickOutcome::Rejected(mv);
            }
        };

        let captured = self.apply_move(from, sq);
        self.switch_player();
        debug!(%mv, %piece, ?captured, "moved");
        ClickOutcome::Moved {
            mv,
            piece,
            captured,
        }
    }

    /// Plays `mv` as two clicks, dropping any earlier selection first.
    ///
    /// Returns the outcome of the first click if it did not select a piece.
    pub fn play(&mut self, mv: Move) -> ClickOutcome {
        self.clear_selection();
        match self.click(mv.from()) {
            ClickOutcome::Selected(_) => self.click(mv.to()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceKind;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn uci(s: &str) -> Move {
        Move::from_uci(s).unwrap()
    }

    #[test]
    fn new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.selection(), None);
        assert_eq!(game.board(), &Board::startpos());
    }

    #[test]
    fn select_own_piece() {
        let mut game = GameState::new();
        assert!(game.select(sq("e2")));
        assert_eq!(game.selection(), Some(sq("e2")));
    }

    #[test]
    fn select_opponent_piece_is_ignored() {
        let mut game = GameState::new();
        let black_pawn = Square::new(1, 4).unwrap();
        assert!(!game.select(black_pawn));
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn select_empty_square_is_ignored() {
        let mut game = GameState::new();
        assert!(!game.select(sq("e4")));
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn clear_selection_is_idempotent() {
        let mut game = GameState::new();
        game.select(sq("g1"));

        let mut once = game.clone();
        once.clear_selection();
        let mut twice = game.clone();
        twice.clear_selection();
        twice.clear_selection();

        assert_eq!(once, twice);
        assert_eq!(twice.selection(), None);
    }

    #[test]
    fn reset_restores_new_game() {
        let mut game = GameState::new();
        game.play(uci("e2e4"));
        game.play(uci("d7d5"));
        game.select(sq("e4"));
        game.reset();
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn click_flow_moves_and_passes_turn() {
        let mut game = GameState::new();
        assert_eq!(game.click(sq("e2")), ClickOutcome::Selected(sq("e2")));
        let outcome = game.click(sq("e4"));
        assert_eq!(
            outcome,
            ClickOutcome::Moved {
                mv: uci("e2e4"),
                piece: Piece::new(PieceKind::Pawn, Color::White),
                captured: None,
            }
        );
        assert!(outcome.is_move());
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.selection(), None);
        assert_eq!(game.piece_at(sq("e2")), None);
    }

    #[test]
    fn clicking_selected_square_deselects() {
        let mut game = GameState::new();
        game.click(sq("b1"));
        assert_eq!(game.click(sq("b1")), ClickOutcome::Deselected(sq("b1")));
        assert_eq!(game.selection(), None);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn illegal_target_drops_selection() {
        let mut game = GameState::new();
        game.click(sq("e2"));
        assert_eq!(game.click(sq("e5")), ClickOutcome::Rejected(uci("e2e5")));
        assert_eq!(game.selection(), None);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.board(), &Board::startpos());
    }

    #[test]
    fn clicking_another_own_piece_does_not_reselect() {
        let mut game = GameState::new();
        game.click(sq("e2"));
        assert_eq!(game.click(sq("d2")), ClickOutcome::Rejected(uci("e2d2")));
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn click_without_selection_on_opponent_piece() {
        let mut game = GameState::new();
        assert_eq!(game.click(sq("e7")), ClickOutcome::Ignored);
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn capture_reports_captured_piece() {
        let mut game = GameState::from_fen("8/8/8/3p4/4P3/8/8/8 w").unwrap();
        let outcome = game.play(uci("e4d5"));
        assert_eq!(
            outcome,
            ClickOutcome::Moved {
                mv: uci("e4d5"),
                piece: Piece::new(PieceKind::Pawn, Color::White),
                captured: Some(Piece::new(PieceKind::Pawn, Color::Black)),
            }
        );
        assert_eq!(game.board().count(), 1);
    }

    #[test]
    fn turns_alternate() {
        let mut game = GameState::new();
        assert!(game.play(uci("e2e4")).is_move());
        // White cannot move twice in a row.
        assert_eq!(game.play(uci("d2d4")), ClickOutcome::Ignored);
        assert!(game.play(uci("e7e5")).is_move());
        assert!(game.play(uci("g1f3")).is_move());
        assert_eq!(game.to_fen(), "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b");
    }

    #[test]
    fn play_drops_stale_selection() {
        let mut game = GameState::new();
        game.select(sq("b1"));
        assert!(game.play(uci("e2e4")).is_move());
    }

    #[test]
    fn from_fen_keeps_side_to_move() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.to_fen(), "4k3/8/8/8/8/8/8/4K3 b");
        assert!(GameState::from_fen("not a board").is_err());
    }

    #[test]
    fn apply_move_is_unchecked_and_keeps_turn() {
        let mut game = GameState::new();
        // A rook jumping over its own pawns: the caller is trusted.
        assert_eq!(game.apply_move(sq("a1"), sq("a6")), None);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(
            game.piece_at(sq("a6")),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
    }

    #[test]
    fn switch_player_toggles() {
        let mut game = GameState::new();
        game.switch_player();
        assert_eq!(game.side_to_move(), Color::Black);
        game.switch_player();
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn legal_targets_follow_side_to_move() {
        let game = GameState::new();
        assert_eq!(game.legal_targets(sq("e2")).len(), 2);
        assert!(game.legal_targets(sq("e7")).is_empty());
        assert!(game.legal_targets(sq("e4")).is_empty());
    }

    #[test]
    fn outcome_names() {
        assert_eq!(ClickOutcome::Ignored.name(), "ignored");
        assert_eq!(ClickOutcome::Selected(sq("a1")).name(), "selected");
    }
}
