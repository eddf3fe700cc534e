//! WebAssembly bindings for the chess board.
//!
//! A canvas front-end forwards pointer-down and key-down events to [`Game`]
//! and redraws by querying [`Game::piece_at`] for every cell.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Game } from 'chess-wasm';
//!
//! await init();
//!
//! const game = new Game();
//! canvas.addEventListener('mousedown', (e) => {
//!     const outcome = game.pointerDown(e.offsetX, e.offsetY);
//!     redraw();
//! });
//! document.addEventListener('keydown', (e) => {
//!     game.keyDown(e.key);
//!     redraw();
//! });
//! ```

use chess_core::{Square, BOARD_SIZE};
use chess_engine::{BoardGeometry, GameState};
use wasm_bindgen::prelude::*;

const DEFAULT_SQUARE_SIZE: u32 = 75;
const MAX_SQUARE_SIZE: u32 = u32::MAX / BOARD_SIZE as u32;

/// A chess game that can be driven from JavaScript.
#[wasm_bindgen]
pub struct Game {
    state: GameState,
    geometry: BoardGeometry,
}

#[wasm_bindgen]
impl Game {
    /// Creates a new game at the starting position with 75-pixel squares.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Game {
            state: GameState::new(),
            geometry: BoardGeometry::new(DEFAULT_SQUARE_SIZE),
        }
    }

    /// Creates a game from board text: piece placement and optional side to move.
    ///
    /// Returns an error if the text is invalid.
    #[wasm_bindgen(js_name = fromFen)]
    pub fn from_fen(fen: &str) -> Result<Game, JsError> {
        let state = GameState::from_fen(fen).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Game {
            state,
            geometry: BoardGeometry::new(DEFAULT_SQUARE_SIZE),
        })
    }

    /// Returns the current position as board text.
    #[wasm_bindgen(js_name = toFen)]
    pub fn to_fen(&self) -> String {
        self.state.to_fen()
    }

    /// Size of one square in pixels.
    #[wasm_bindgen(getter, js_name = squareSize)]
    pub fn square_size(&self) -> u32 {
        self.geometry.square_size()
    }

    /// Changes the square size. Zero, or a size whose board would not fit
    /// in a `u32`, is ignored.
    #[wasm_bindgen(setter, js_name = squareSize)]
    pub fn set_square_size(&mut self, size: u32) {
        if (1..=MAX_SQUARE_SIZE).contains(&size) {
            self.geometry = BoardGeometry::new(size);
        }
    }

    /// Handles a pointer-down at pixel coordinates.
    ///
    /// Returns one of "selected", "deselected", "moved", "rejected",
    /// "ignored", or "outside" when the pointer is off the board.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: i32, y: i32) -> String {
        match self.geometry.square_at(i64::from(x), i64::from(y)) {
            Some(sq) => self.state.click(sq).name().to_string(),
            None => "outside".to_string(),
        }
    }

    /// Handles a key-down. `r` or `R` resets the game; other keys are ignored.
    ///
    /// Returns true if the key reset the game.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> bool {
        if key.eq_ignore_ascii_case("r") {
            self.state.reset();
            true
        } else {
            false
        }
    }

    /// Returns the piece at `(row, col)` as a FEN letter, row 0 being rank 8.
    ///
    /// Returns null for empty or out-of-range cells.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, row: u8, col: u8) -> Option<String> {
        let sq = Square::new(row, col)?;
        self.state
            .piece_at(sq)
            .map(|piece| piece.to_fen_char().to_string())
    }

    /// Returns the side to move ("white" or "black").
    #[wasm_bindgen(js_name = sideToMove)]
    pub fn side_to_move(&self) -> String {
        self.state.side_to_move().name().to_string()
    }

    /// Returns the selected square in algebraic notation, or null.
    #[wasm_bindgen]
    pub fn selection(&self) -> Option<String> {
        self.state.selection().map(|sq| sq.to_algebraic())
    }

    /// Returns the squares the piece on `square` may move to.
    ///
    /// Empty for an invalid square name or a square the side to move
    /// cannot move from.
    #[wasm_bindgen(js_name = legalTargets)]
    pub fn legal_targets(&self, square: &str) -> Vec<String> {
        Square::from_algebraic(square)
            .map(|from| {
                self.state
                    .legal_targets(from)
                    .into_iter()
                    .map(|sq| sq.to_algebraic())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Board width and height in pixels.
    #[wasm_bindgen(js_name = boardSize)]
    pub fn board_size(&self) -> u32 {
        u32::try_from(self.geometry.extent()).unwrap_or(u32::MAX)
    }

    /// Resets the game to the starting position.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
