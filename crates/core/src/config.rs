//! Construction-time game configuration
//!
//! Board size, spawn anchor and gravity cadence are fixed for a game's lifetime.
//! They are checked once, up front, so the rules engine itself never has to
//! report a configuration problem mid-game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pieces::offsets_for;
use crate::types::{
    Bounds, Coord, PieceKind, BOARD_HEIGHT, BOARD_ORIGIN, BOARD_WIDTH, COORD_LIMIT,
    SPAWN_POSITION, STEP_INTERVAL_MS,
};

/// Reasons a [`GameConfig`] cannot produce a playable game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one column and one row (got {width}x{height})")]
    EmptyBoard { width: i32, height: i32 },

    #[error(
        "board at ({x_min}, {y_min}) sized {width}x{height} reaches past the coordinate limit"
    )]
    BoundsOutOfRange {
        x_min: i32,
        y_min: i32,
        width: i32,
        height: i32,
    },

    #[error("step interval must be greater than zero")]
    ZeroStepInterval,

    #[error("piece {kind:?} spawned at ({x}, {y}) would lie outside the board")]
    SpawnOutOfBounds { kind: PieceKind, x: i32, y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Bottom-left cell of the board
    pub origin: Coord,
    pub width: i32,
    pub height: i32,
    /// Anchor new pieces spawn at
    pub spawn: Coord,
    /// Gravity step interval in milliseconds
    pub step_interval_ms: u32,
    /// Seed for uniform piece selection
    pub seed: u32,
}

impl GameConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.origin.x, self.origin.y, self.width, self.height)
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if !self.in_coord_range() {
            return Err(ConfigError::BoundsOutOfRange {
                x_min: self.origin.x,
                y_min: self.origin.y,
                width: self.width,
                height: self.height,
            });
        }
        if self.step_interval_ms == 0 {
            return Err(ConfigError::ZeroStepInterval);
        }

        let bounds = self.bounds();
        for kind in PieceKind::ALL {
            if let Some(cell) = offsets_for(kind)
                .iter()
                .map(|&offset| self.spawn + offset)
                .find(|&cell| !bounds.contains(cell))
            {
                return Err(ConfigError::SpawnOutOfBounds {
                    kind,
                    x: cell.x,
                    y: cell.y,
                });
            }
        }

        Ok(())
    }

    /// Both board corners and the spawn anchor lie within `COORD_LIMIT`.
    fn in_coord_range(&self) -> bool {
        let limit = i64::from(COORD_LIMIT);
        let in_range = |v: i64| (-limit..=limit).contains(&v);
        in_range(i64::from(self.origin.x))
            && in_range(i64::from(self.origin.y))
            && in_range(i64::from(self.origin.x) + i64::from(self.width))
            && in_range(i64::from(self.origin.y) + i64::from(self.height))
            && in_range(i64::from(self.spawn.x))
            && in_range(i64::from(self.spawn.y))
    }

    pub fn with_seed(self, seed: u32) -> Self {
        Self { seed, ..self }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            origin: BOARD_ORIGIN,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            spawn: SPAWN_POSITION,
            step_interval_ms: STEP_INTERVAL_MS,
            seed: 1,
        }
    }
}
