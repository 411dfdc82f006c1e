//! Tetromino definitions and shapes
//!
//! The 7 standard tetrominoes as boolean matrices, plus the single 90°
//! rotation primitive every orientation is derived from.

use serde::{Deserialize, Serialize};

/// The 7 tetromino types, in type-id order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TetrominoType {
    I, // 0 - long bar
    J, // 1
    L, // 2
    O, // 3 - square
    S, // 4
    T, // 5
    Z, // 6
}

impl TetrominoType {
    /// Get all tetromino types in type-id order
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::J,
            TetrominoType::L,
            TetrominoType::O,
            TetrominoType::S,
            TetrominoType::T,
            TetrominoType::Z,
        ]
    }

    /// Numeric type id (0..=6)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a type by its numeric id
    pub fn from_id(id: u8) -> Option<TetrominoType> {
        Self::all().get(id as usize).copied()
    }

    /// One-letter name
    pub fn letter(self) -> char {
        match self {
            TetrominoType::I => 'I',
            TetrominoType::J => 'J',
            TetrominoType::L => 'L',
            TetrominoType::O => 'O',
            TetrominoType::S => 'S',
            TetrominoType::T => 'T',
            TetrominoType::Z => 'Z',
        }
    }

    /// Display colour as an RGB triple
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            TetrominoType::I => (0, 255, 255),   // Cyan
            TetrominoType::J => (0, 0, 255),     // Blue
            TetrominoType::L => (255, 165, 0),   // Orange
            TetrominoType::O => (255, 255, 0),   // Yellow
            TetrominoType::S => (0, 255, 0),     // Green
            TetrominoType::T => (255, 0, 255),   // Magenta
            TetrominoType::Z => (255, 0, 0),     // Red
        }
    }

    /// Spawn orientation for this type
    pub fn base_shape(self) -> Shape {
        let rows: &[&[u8]] = match self {
            TetrominoType::I => &[&[1, 1, 1, 1]],
            TetrominoType::J => &[&[1, 0, 0], &[1, 1, 1]],
            TetrominoType::L => &[&[0, 0, 1], &[1, 1, 1]],
            TetrominoType::O => &[&[1, 1], &[1, 1]],
            TetrominoType::S => &[&[0, 1, 1], &[1, 1, 0]],
            TetrominoType::T => &[&[0, 1, 0], &[1, 1, 1]],
            TetrominoType::Z => &[&[1, 1, 0], &[0, 1, 1]],
        };
        Shape::from_rows(rows)
    }
}

/// Every type paired with its base shape, in type-id order
pub fn all_shapes() -> [(TetrominoType, Shape); 7] {
    TetrominoType::all().map(|kind| (kind, kind.base_shape()))
}

/// A rectangular occupancy matrix, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Rows shorter than the first are padded with empty cells.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut cells = vec![false; height * width];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().take(width).enumerate() {
                cells[r * width + c] = value != 0;
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at (row, col) is filled; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Iterate the (row, col) offsets of the filled cells
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| (i / self.width, i % self.width))
    }

    /// Rotate 90° clockwise: an R×C matrix becomes C×R with
    /// `out[col][R - 1 - row] = in[row][col]`
    pub fn rotated(&self) -> Shape {
        let (rows, cols) = (self.height, self.width);
        let mut cells = vec![false; rows * cols];
        for row in 0..rows {
            for col in 0..cols {
                // output is `rows` wide
                cells[col * rows + (rows - 1 - row)] = self.cells[row * cols + col];
            }
        }
        Shape {
            height: cols,
            width: rows,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for (i, kind) in TetrominoType::all().into_iter().enumerate() {
            assert_eq!(kind.id() as usize, i);
            assert_eq!(TetrominoType::from_id(i as u8), Some(kind));
        }
        assert_eq!(TetrominoType::from_id(7), None);
    }

    #[test]
    fn test_colour_table() {
        assert_eq!(TetrominoType::L.rgb(), (255, 165, 0));
        assert_eq!(TetrominoType::I.rgb(), (0, 255, 255));
        let distinct: std::collections::HashSet<_> =
            TetrominoType::all().map(TetrominoType::rgb).into_iter().collect();
        assert_eq!(distinct.len(), 7);
    }

    #[test]
    fn test_every_piece_has_four_cells() {
        for (_, shape) in all_shapes() {
            assert_eq!(shape.filled().count(), 4);
        }
    }

    #[test]
    fn test_catalog_dimensions() {
        let shapes = all_shapes();
        assert_eq!((shapes[0].1.height(), shapes[0].1.width()), (1, 4));
        assert_eq!((shapes[3].1.height(), shapes[3].1.width()), (2, 2));
        for i in [1, 2, 4, 5, 6] {
            assert_eq!((shapes[i].1.height(), shapes[i].1.width()), (2, 3));
        }
    }

    #[test]
    fn test_j_shape_layout() {
        let j = TetrominoType::J.base_shape();
        assert!(j.is_filled(0, 0));
        assert!(!j.is_filled(0, 1));
        assert!(!j.is_filled(0, 2));
        assert!(j.is_filled(1, 0) && j.is_filled(1, 1) && j.is_filled(1, 2));
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let rotated = TetrominoType::I.base_shape().rotated();
        assert_eq!((rotated.height(), rotated.width()), (4, 1));
        assert_eq!(rotated.filled().count(), 4);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // .T.      T.
        // TTT  ->  TT
        //          T.
        let rotated = TetrominoType::T.base_shape().rotated();
        let expected = Shape::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]);
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_o_is_rotation_fixed_point() {
        let o = TetrominoType::O.base_shape();
        assert_eq!(o.rotated(), o);
    }

    #[test]
    fn test_four_rotations_cycle() {
        for (_, shape) in all_shapes() {
            let cycled = shape.rotated().rotated().rotated().rotated();
            assert_eq!(cycled, shape);
        }
    }
}
