//! Pieces and the active falling piece

use crate::board::Board;
use crate::tetromino::{Shape, TetrominoType};

/// A tetromino in one orientation. Rotation yields a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: TetrominoType,
    shape: Shape,
}

impl Piece {
    /// A piece in its spawn orientation
    pub fn new(kind: TetrominoType) -> Self {
        Self {
            kind,
            shape: kind.base_shape(),
        }
    }

    pub fn kind(&self) -> TetrominoType {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The same piece turned 90° clockwise
    pub fn rotated(&self) -> Piece {
        Piece {
            kind: self.kind,
            shape: self.shape.rotated(),
        }
    }
}

/// An active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    piece: Piece,
    /// Column of the shape's top-left corner
    pub x: i32,
    /// Row of the shape's top-left corner; row 0 is the top
    pub y: i32,
}

impl ActivePiece {
    /// Place a piece at the spawn point for a board `cols` wide.
    ///
    /// Returns None when the spawn position is already blocked.
    pub fn spawn(piece: Piece, board: &Board) -> Option<Self> {
        let active = Self {
            piece,
            x: board.cols() as i32 / 2 - 1,
            y: 0,
        };
        active.is_valid(board).then_some(active)
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn kind(&self) -> TetrominoType {
        self.piece.kind()
    }

    /// Absolute (row, col) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.piece
            .shape()
            .filled()
            .map(|(r, c)| (self.y + r as i32, self.x + c as i32))
    }

    /// Whether the piece sits legally on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        board.fits(self.piece.shape(), self.x, self.y)
    }

    /// Try to move left, returns true if successful
    pub fn move_left(&mut self, board: &Board) -> bool {
        self.shift(-1, 0, board)
    }

    /// Try to move right, returns true if successful
    pub fn move_right(&mut self, board: &Board) -> bool {
        self.shift(1, 0, board)
    }

    /// Try to move down, returns true if successful
    pub fn move_down(&mut self, board: &Board) -> bool {
        self.shift(0, 1, board)
    }

    /// Try to rotate in place.
    ///
    /// The rotated shape is tested at the current origin only; there are
    /// no wall kicks, so a rotation against a wall or the stack is refused.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let rotated = self.piece.rotated();
        if !board.fits(rotated.shape(), self.x, self.y) {
            return false;
        }
        self.piece = rotated;
        true
    }

    /// Write this piece into the board
    pub fn lock_into(&self, board: &mut Board) {
        board.lock(self.piece.shape(), self.x, self.y, self.piece.kind());
    }

    fn shift(&mut self, dx: i32, dy: i32, board: &Board) -> bool {
        if !board.fits(self.piece.shape(), self.x + dx, self.y + dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }
}
