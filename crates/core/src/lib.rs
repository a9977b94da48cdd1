//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of a falling-block puzzle: the playing
//! field, the falling piece, legality checks, gravity, rotation, line clears
//! and game over. It has **no dependencies** on rendering, input devices or
//! wall clocks, which makes it:
//!
//! - **Deterministic**: Same seed and inputs produce the same game
//! - **Testable**: Time is an explicit parameter; nothing waits on real time
//! - **Portable**: Any host that can paint cells and read key presses can drive it
//!
//! # Module Structure
//!
//! - [`pieces`]: Tetromino catalog and the quarter-turn rotation transform
//! - [`board`]: Grid occupancy, legality, line clearing, spawning
//! - [`piece`]: The falling piece state machine (move, rotate, step, tick)
//! - [`game`]: Orchestrator owning the board and the single active piece
//! - [`intent`]: Edge-triggered intent queue drained once per advance
//! - [`rng`]: Deterministic uniform piece selection
//! - [`config`]: Construction-time configuration and validation
//! - [`snapshot`]: Serializable observation for hosts
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each spawn picks one of the seven pieces uniformly
//! - **Single-candidate rotation**: one orientation is tried; no wall kicks
//! - **Immediate lock**: a piece locks on the first gravity step that leaves it
//!   resting; there is no lock delay
//! - **Soft drop** moves down one cell and never locks
//!
//! # Example
//!
//! ```
//! use tile_tetris_core::{Game, GameConfig};
//! use tile_tetris_types::Intent;
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! game.start();
//!
//! game.submit_intent(Intent::MoveLeft);
//! game.submit_intent(Intent::RotateCw);
//! let report = game.advance_time(16);
//!
//! assert!(report.accepted + report.rejected == 2);
//! assert!(game.active_piece_cells().is_some());
//! assert!(!game.is_game_over());
//! ```
//!
//! # Timing
//!
//! Gravity steps once per [`types::STEP_INTERVAL_MS`] (1000ms by default).
//! Call [`Game::advance_time`] every frame with the elapsed milliseconds.

pub mod board;
pub mod config;
pub mod game;
pub mod intent;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tile_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game::{AdvanceReport, Game};
pub use intent::IntentQueue;
pub use piece::{LockEvent, Piece, StepOutcome};
pub use pieces::{display_id_for, offsets_for, rotate_offsets};
pub use rng::{PieceSequence, PieceSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, CellSnapshot, GameSnapshot};
