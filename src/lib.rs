//! Tile Tetris (workspace facade crate).
//!
//! Exposes the rules engine as `tile_tetris::{core, types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tile_tetris_core as core;
pub use tile_tetris_types as types;
