//! Core rules engine - pure, deterministic, and testable
//!
//! Owns the playing field, the falling and queued pieces, placement legality,
//! line clearing and the score/level progression. There is no rendering,
//! input polling or timing source in here: a frontend calls
//! [`Game::tick`](game::Game::tick) once per frame with the elapsed time and
//! the intents it collected, then draws from the read accessors or a
//! [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`shape`]: the seven tetromino matrices and clockwise rotation
//! - [`piece`]: a shape, a color and a board position
//! - [`board`]: fixed-size grid of locked cells
//! - [`collision`]: the single placement legality check
//! - [`lines`]: full-row detection and compaction
//! - [`progression`]: score, lines, level and fall speed
//! - [`rng`]: seeded piece generation
//! - [`game`]: the per-session controller
//! - [`config`], [`error`]: startup parameters and contract violations
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use blockfall_core::{Game, GameConfig};
//! use blockfall_types::Intent;
//!
//! let mut game = Game::new(GameConfig::default().with_seed(12345)).unwrap();
//!
//! game.tick(Duration::ZERO, &[Intent::MoveLeft, Intent::Rotate, Intent::HardDrop]);
//! let landed_at = game.active().y;
//! assert!(landed_at > 0);
//!
//! // The next gravity step locks the piece and spawns the queued one.
//! let outcome = game.tick(game.fall_interval(), &[]);
//! assert_eq!(outcome.pieces_locked, 1);
//! assert_eq!(game.board().locked_count(), 4);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod lines;
pub mod piece;
pub mod progression;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{drop_distance, is_valid, landing};
pub use config::{GameConfig, ProgressionRules};
pub use error::{BoardError, ConfigError, GameError};
pub use game::{Game, TickOutcome};
pub use lines::{clear_lines, LineClear};
pub use piece::Piece;
pub use progression::{score_for_lines, ClearScore, Progression};
pub use rng::{PieceGenerator, SimpleRng};
pub use shape::Shape;
pub use snapshot::GameSnapshot;
