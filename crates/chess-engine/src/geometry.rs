//! Mapping between pointer coordinates and board squares.

use chess_core::{Square, BOARD_SIZE};

/// Screen layout of the board: square `(0, 0)` at the origin, each square
/// `square_size` units wide and tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    square_size: u32,
}

impl BoardGeometry {
    pub const fn new(square_size: u32) -> Self {
        BoardGeometry { square_size }
    }

    pub const fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Width and height of the whole board.
    pub const fn extent(&self) -> u64 {
        self.square_size as u64 * BOARD_SIZE as u64
    }

    /// Returns the square under the pointer, or `None` outside the board.
    ///
    /// The row comes from `y` and the column from `x`, each by integer
    /// division by the square size.
    pub fn square_at(&self, x: i64, y: i64) -> Option<Square> {
        let size = i64::from(self.square_size);
        if size == 0 || x < 0 || y < 0 {
            return None;
        }
        let row = u8::try_from(y / size).ok()?;
        let col = u8::try_from(x / size).ok()?;
        Square::new(row, col)
    }

    /// Returns the pointer coordinates of the center of `sq` as `(x, y)`.
    pub fn center_of(&self, sq: Square) -> (i64, i64) {
        let size = i64::from(self.square_size);
        (
            i64::from(sq.col()) * size + size / 2,
            i64::from(sq.row()) * size + size / 2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners() {
        let geometry = BoardGeometry::new(75);
        assert_eq!(geometry.square_at(0, 0), Square::new(0, 0));
        assert_eq!(geometry.square_at(74, 74), Square::new(0, 0));
        assert_eq!(geometry.square_at(75, 0), Square::new(0, 1));
        assert_eq!(geometry.square_at(599, 599), Square::new(7, 7));
    }

    #[test]
    fn row_from_y_column_from_x() {
        let geometry = BoardGeometry::new(75);
        // x = 4 squares across, y = 6 squares down: e2.
        assert_eq!(
            geometry.square_at(4 * 75 + 10, 6 * 75 + 10),
            Square::from_algebraic("e2")
        );
    }

    #[test]
    fn outside_board() {
        let geometry = BoardGeometry::new(75);
        assert_eq!(geometry.square_at(600, 10), None);
        assert_eq!(geometry.square_at(10, 600), None);
        assert_eq!(geometry.square_at(-1, 10), None);
        assert_eq!(geometry.square_at(10, -1), None);
        assert_eq!(geometry.square_at(i64::MAX, 0), None);
    }

    #[test]
    fn zero_size_maps_nothing() {
        assert_eq!(BoardGeometry::new(0).square_at(0, 0), None);
    }

    #[test]
    fn center_maps_back_to_square() {
        let geometry = BoardGeometry::new(75);
        for sq in Square::all() {
            let (x, y) = geometry.center_of(sq);
            assert_eq!(geometry.square_at(x, y), Some(sq));
        }
        assert_eq!(geometry.extent(), 600);
    }
}
