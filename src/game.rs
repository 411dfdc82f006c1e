//! Core game state and logic

use crate::board::{Board, Cell};
use crate::error::Result;
use crate::piece::ActivePiece;
use crate::randomizer::{PieceSource, UniformSource};
use crate::score::Score;
use crate::settings::Settings;
use crate::snapshot::{ActiveCell, GameSnapshot};

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Terminal until [`Game::reset`]
    GameOver,
}

/// What a single lock did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockReport {
    pub rows_cleared: u32,
    pub points_awarded: u64,
    /// The following spawn was blocked and the game ended
    pub topped_out: bool,
}

/// Result of one [`Game::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is over; nothing changed
    Halted,
    /// The active piece fell one row
    Fell,
    /// The active piece landed and was locked
    Locked(LockReport),
}

/// The main game struct
///
/// All mutation goes through `&mut self`, so a driver that shares the game
/// between a timer and input handlers must serialise access itself.
#[derive(Debug, Clone)]
pub struct Game<S = UniformSource> {
    board: Board,
    /// Current falling piece; None only after the game is over
    active: Option<ActivePiece>,
    source: S,
    score: Score,
    state: GameState,
    /// Bumped on every change a renderer would care about
    revision: u64,
}

impl Game<UniformSource> {
    /// Create a standard 20x10 game with a random seed
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a standard 20x10 game with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(Board::default(), UniformSource::with_seed(seed))
    }

    /// Create a game from validated settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let board = Board::new(settings.board.rows, settings.board.cols)?;
        let source = match settings.seed {
            Some(seed) => UniformSource::with_seed(seed),
            None => UniformSource::new(),
        };
        tracing::debug!(
            rows = board.rows(),
            cols = board.cols(),
            seed = source.seed(),
            "creating game"
        );
        Ok(Self::with_source(board, source))
    }
}

impl Default for Game<UniformSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PieceSource> Game<S> {
    /// Create a game on `board` drawing pieces from `source`.
    ///
    /// The board is cleared first, so the opening spawn always succeeds.
    pub fn with_source(mut board: Board, source: S) -> Self {
        board.reset();
        let mut game = Self {
            board,
            active: None,
            source,
            score: Score::new(),
            state: GameState::Playing,
            revision: 0,
        };
        game.spawn();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the locked cell at (row, col)
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell> {
        self.board.cell_at(row, col)
    }

    pub fn score(&self) -> u64 {
        self.score.points
    }

    pub fn lines_cleared(&self) -> u32 {
        self.score.lines
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn active_piece(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Absolute cells of the falling piece, for rendering
    pub fn active_piece_cells(&self) -> Vec<ActiveCell> {
        let Some(active) = &self.active else {
            return Vec::new();
        };
        active
            .cells()
            .filter_map(|(row, col)| {
                Some(ActiveCell {
                    row: usize::try_from(row).ok()?,
                    col: usize::try_from(col).ok()?,
                    kind: active.kind(),
                })
            })
            .collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.raw_rows(),
            active: self.active_piece_cells(),
            score: self.score.points,
            lines: self.score.lines,
            game_over: self.is_game_over(),
            revision: self.revision,
        }
    }

    /// Advance one step: fall a row, or lock, clear, score and spawn
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Halted;
        }
        if self.move_down() {
            return TickOutcome::Fell;
        }
        TickOutcome::Locked(self.lock_piece())
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(|piece, board| piece.move_left(board))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(|piece, board| piece.move_right(board))
    }

    /// Move down one row; false once the piece has landed
    pub fn move_down(&mut self) -> bool {
        self.try_move(|piece, board| piece.move_down(board))
    }

    /// Rotate clockwise in place, without wall kicks
    pub fn rotate(&mut self) -> bool {
        self.try_move(|piece, board| piece.rotate(board))
    }

    /// Start over: empty board, zero score, fresh piece
    pub fn reset(&mut self) {
        self.board.reset();
        self.score.reset();
        self.state = GameState::Playing;
        self.active = None;
        self.spawn();
        tracing::info!("game reset");
    }

    fn try_move(&mut self, apply: impl FnOnce(&mut ActivePiece, &Board) -> bool) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(piece) = &mut self.active else {
            return false;
        };
        let moved = apply(piece, &self.board);
        if moved {
            self.revision += 1;
        } else {
            tracing::trace!(x = piece.x, y = piece.y, "move rejected");
        }
        moved
    }

    /// Lock the current piece, clear rows, score, and spawn the next
    fn lock_piece(&mut self) -> LockReport {
        let mut report = LockReport {
            rows_cleared: 0,
            points_awarded: 0,
            topped_out: false,
        };
        let Some(piece) = self.active.take() else {
            return report;
        };

        piece.lock_into(&mut self.board);
        // A board has at most 255 rows
        let rows_cleared = self.board.clear_full_rows() as u32;
        report.rows_cleared = rows_cleared;
        report.points_awarded = self.score.add_clear(rows_cleared);
        tracing::debug!(
            kind = ?piece.kind(),
            x = piece.x,
            y = piece.y,
            rows_cleared,
            points = report.points_awarded,
            "piece locked"
        );

        report.topped_out = !self.spawn();
        report
    }

    /// Spawn the next piece; on a blocked spawn the game ends
    fn spawn(&mut self) -> bool {
        self.revision += 1;
        let piece = self.source.next_piece();
        let kind = piece.kind();
        match ActivePiece::spawn(piece, &self.board) {
            Some(active) => {
                tracing::debug!(?kind, "spawned");
                self.active = Some(active);
                true
            }
            None => {
                self.state = GameState::GameOver;
                tracing::info!(
                    ?kind,
                    score = self.score.points,
                    lines = self.score.lines,
                    "game over"
                );
                false
            }
        }
    }
}
