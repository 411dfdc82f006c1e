//! BLOCKFALL - a falling-block puzzle engine
//!
//! Deterministic game state for a 20x10 Tetris-style board: piece catalog,
//! collision checks, locking, line clears and scoring. Rendering, input and
//! timing belong to the caller, which drives [`Game::tick`] on its own
//! cadence and picks that cadence from [`SpeedSettings::interval_for`].
//!
//! ```
//! use blockfall::{Game, TickOutcome};
//!
//! let mut game = Game::with_seed(7);
//! game.move_left();
//! game.rotate();
//! while let TickOutcome::Fell = game.tick() {}
//! assert!(game.board().rows() == 20);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod piece;
pub mod randomizer;
pub mod score;
pub mod settings;
pub mod snapshot;
pub mod tetromino;

pub use board::{Board, Cell, BOARD_HEIGHT, BOARD_WIDTH};
pub use error::{EngineError, Result};
pub use game::{Game, GameState, LockReport, TickOutcome};
pub use piece::{ActivePiece, Piece};
pub use randomizer::{PieceSource, SequenceSource, UniformSource};
pub use score::{points_for, Score};
pub use settings::{BoardSettings, Settings, SpeedSettings, SpeedStep};
pub use snapshot::{ActiveCell, GameSnapshot};
pub use tetromino::{all_shapes, Shape, TetrominoType};
