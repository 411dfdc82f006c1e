//! Scoring and line accounting

use serde::Serialize;

/// Points for each cleared row
pub const POINTS_PER_ROW: u64 = 100;
/// Extra points for each row of a clear that removed at least one row
pub const CLEAR_BONUS_PER_ROW: u64 = 50;

/// Score and line tally for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Total lines cleared
    pub lines: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one lock that cleared `rows` rows.
    /// Returns the points awarded.
    pub fn add_clear(&mut self, rows: u32) -> u64 {
        let awarded = points_for(rows);
        self.points += awarded;
        self.lines += rows;
        awarded
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Points for clearing `rows` rows in one lock: `100k + 50k`, nothing for 0
pub fn points_for(rows: u32) -> u64 {
    let rows = u64::from(rows);
    let mut points = rows * POINTS_PER_ROW;
    if rows > 0 {
        points += rows * CLEAR_BONUS_PER_ROW;
    }
    points
}
