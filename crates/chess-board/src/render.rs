//! Text rendering of the board.
//!
//! Colored mode paints each square with an ANSI truecolor background and
//! draws the piece letter, uppercase, in white or black. Plain mode prints
//! FEN letters and `.` for empty squares.

use chess_core::{Color, Square, BOARD_SIZE};
use chess_engine::GameState;

use crate::config::{Rgb, ShellConfig};

const WHITE_PIECE: Rgb = [255, 255, 255];
const BLACK_PIECE: Rgb = [0, 0, 0];
const SELECTED_SQUARE: Rgb = [246, 246, 105];
const RESET: &str = "\x1b[0m";

/// Renders the board followed by a status line.
pub fn render(game: &GameState, config: &ShellConfig) -> String {
    let mut out = String::new();
    let selection = game.selection().filter(|_| config.highlight_selection);

    for row in 0..BOARD_SIZE {
        if config.show_coordinates {
            out.push_str(&format!("{} ", BOARD_SIZE - row));
        }
        for col in 0..BOARD_SIZE {
            let Some(sq) = Square::new(row, col) else {
                continue;
            };
            let selected = selection == Some(sq);
            if config.color {
                colored_cell(&mut out, game, sq, selected, config);
            } else {
                plain_cell(&mut out, game, sq, selected);
            }
        }
        out.push('\n');
    }

    if config.show_coordinates {
        out.push_str("  ");
        for file in 'a'..='h' {
            out.push_str(&format!(" {file} "));
        }
        out.push('\n');
    }

    out.push_str(&status_line(game));
    out.push('\n');
    out
}

/// Returns e.g. `White to move` or `Black to move, e7 selected`.
pub fn status_line(game: &GameState) -> String {
    match game.selection() {
        Some(sq) => format!("{} to move, {sq} selected", game.side_to_move()),
        None => format!("{} to move", game.side_to_move()),
    }
}

fn is_light(sq: Square) -> bool {
    (sq.row() + sq.col()) % 2 == 0
}

fn colored_cell(
    out: &mut String,
    game: &GameState,
    sq: Square,
    selected: bool,
    config: &ShellConfig,
) {
    let background = if selected {
        SELECTED_SQUARE
    } else if is_light(sq) {
        config.light_square
    } else {
        config.dark_square
    };
    let [br, bg, bb] = background;
    out.push_str(&format!("\x1b[48;2;{br};{bg};{bb}m"));

    match game.piece_at(sq) {
        Some(piece) => {
            let [fr, fg, fb] = match piece.color {
                Color::White => WHITE_PIECE,
                Color::Black => BLACK_PIECE,
            };
            let letter = piece.kind.to_char().to_ascii_uppercase();
            out.push_str(&format!("\x1b[38;2;{fr};{fg};{fb}m {letter} "));
        }
        None => out.push_str("   "),
    }
    out.push_str(RESET);
}

fn plain_cell(out: &mut String, game: &GameState, sq: Square, selected: bool) {
    let glyph = game.piece_at(sq).map_or('.', |piece| piece.to_fen_char());
    if selected {
        out.push_str(&format!("[{glyph}]"));
    } else {
        out.push_str(&format!(" {glyph} "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Move;

    fn plain() -> ShellConfig {
        ShellConfig {
            color: false,
            ..ShellConfig::default()
        }
    }

    #[test]
    fn plain_start_position() {
        let text = render(&GameState::new(), &plain());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "8  r  n  b  q  k  b  n  r ");
        assert_eq!(lines[4], "4  .  .  .  .  .  .  .  . ");
        assert_eq!(lines[7], "1  R  N  B  Q  K  B  N  R ");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h ");
        assert_eq!(lines[9], "White to move");
    }

    #[test]
    fn plain_without_coordinates() {
        let config = ShellConfig {
            show_coordinates: false,
            ..plain()
        };
        let text = render(&GameState::new(), &config);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], " p  p  p  p  p  p  p  p ");
    }

    #[test]
    fn plain_highlight_marks_selection() {
        let config = ShellConfig {
            highlight_selection: true,
            show_coordinates: false,
            ..plain()
        };
        let mut game = GameState::new();
        game.select(Square::from_algebraic("e2").unwrap());
        let text = render(&game, &config);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[6], " P  P  P  P [P] P  P  P ");
        assert_eq!(lines[8], "White to move, e2 selected");
    }

    #[test]
    fn colored_uses_square_and_piece_colors() {
        let text = render(&GameState::new(), &ShellConfig::default());
        // a8 is light and holds a black rook.
        assert!(text.starts_with("8 \x1b[48;2;235;236;208m\x1b[38;2;0;0;0m R \x1b[0m"));
        // b8 is dark.
        assert!(text.contains("\x1b[48;2;119;149;86m\x1b[38;2;0;0;0m N "));
        // White pieces are drawn in white.
        assert!(text.contains("\x1b[38;2;255;255;255m K "));
    }

    #[test]
    fn colored_highlight_replaces_square_color() {
        let config = ShellConfig {
            highlight_selection: true,
            show_coordinates: false,
            ..ShellConfig::default()
        };
        let mut game = GameState::new();
        game.select(Square::from_algebraic("e2").unwrap());
        let text = render(&game, &config);
        let rank_two = text.lines().nth(6).unwrap();
        assert!(rank_two.contains("\x1b[48;2;246;246;105m\x1b[38;2;255;255;255m P \x1b[0m"));
        assert_eq!(rank_two.matches("\x1b[48;2;246;246;105m").count(), 1);
    }

    #[test]
    fn status_after_move() {
        let mut game = GameState::new();
        game.play(Move::from_uci("e2e4").unwrap());
        assert_eq!(status_line(&game), "Black to move");
    }
}
