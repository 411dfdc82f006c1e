//! Read-only game snapshots for presentation layers

use crate::tetromino::TetrominoType;
use serde::Serialize;

/// One filled cell of the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveCell {
    pub row: usize,
    pub col: usize,
    pub kind: TetrominoType,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Raw cell values from the top row down: 0 empty, type id + 1 filled
    pub board: Vec<Vec<u8>>,
    pub active: Vec<ActiveCell>,
    pub score: u64,
    pub lines: u32,
    pub game_over: bool,
    pub revision: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Plain-text picture of the board, `#` for locked cells and the piece
    /// letter for the falling piece
    pub fn to_ascii(&self) -> String {
        let mut rows: Vec<Vec<char>> = self
            .board
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&raw| if raw == 0 { '.' } else { '#' })
                    .collect()
            })
            .collect();
        for cell in &self.active {
            if let Some(slot) = rows.get_mut(cell.row).and_then(|row| row.get_mut(cell.col)) {
                *slot = cell.kind.letter();
            }
        }
        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
