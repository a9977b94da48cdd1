//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no behavior beyond small conversions, making
//! them usable from the rules engine, the host collaborator, and tests alike.
//!
//! # Grid Coordinates
//!
//! The grid is addressed by integer `(x, y)` pairs with the y axis pointing UP:
//!
//! - **Origin**: `(-5, -10)` is the bottom-left cell
//! - **Width**: 10 columns (x in `-5..5`)
//! - **Height**: 20 rows (y in `-10..10`)
//! - **Spawn anchor**: `(-1, 8)` near the top-center
//!
//! A downward step is `(0, -1)`.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STEP_INTERVAL_MS` | 1000 | Gravity step interval |
//!
//! # Examples
//!
//! ```
//! use tile_tetris_types::{Coord, Intent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let intent = Intent::from_str("rotateCw").unwrap();
//! assert_eq!(intent, Intent::RotateCw);
//!
//! assert_eq!(Coord::new(1, 2) + Coord::new(-1, -1), Coord::new(0, 1));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i32 = 20;

/// Bottom-left cell of the default board
pub const BOARD_ORIGIN: Coord = Coord::new(-5, -10);

/// Anchor every new piece spawns at
pub const SPAWN_POSITION: Coord = Coord::new(-1, 8);

/// Gravity step interval in milliseconds (1 step per second)
pub const STEP_INTERVAL_MS: u32 = 1000;

/// Maximum number of intents buffered between two advances
pub const INTENT_QUEUE_CAPACITY: usize = 32;

/// Largest coordinate magnitude a board may reach on either axis
pub const COORD_LIMIT: i32 = 1 << 20;

/// Number of distinct rotation states
pub const ROTATION_STATES: u8 = 4;

/// Grid coordinate (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

/// Axis-aligned grid rectangle, inclusive min and exclusive max on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: i32,
    pub y_min: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x_min: i32, y_min: i32, width: i32, height: i32) -> Self {
        Self {
            x_min,
            y_min,
            width,
            height,
        }
    }

    /// Exclusive upper bound on x
    pub const fn x_max(&self) -> i32 {
        self.x_min + self.width
    }

    /// Exclusive upper bound on y
    pub const fn y_max(&self) -> i32 {
        self.y_min + self.height
    }

    pub const fn contains(&self, c: Coord) -> bool {
        c.x >= self.x_min && c.x < self.x_max() && c.y >= self.y_min && c.y < self.y_max()
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        (self.width as usize) * (self.height as usize)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(BOARD_ORIGIN.x, BOARD_ORIGIN.y, BOARD_WIDTH, BOARD_HEIGHT)
    }
}


/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and tile:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Display identifier a host paints a cell with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl Tile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Cyan => "cyan",
            Tile::Yellow => "yellow",
            Tile::Purple => "purple",
            Tile::Green => "green",
            Tile::Red => "red",
            Tile::Blue => "blue",
            Tile::Orange => "orange",
        }
    }

    /// Single-character glyph for text dumps
    pub fn glyph(&self) -> char {
        match self {
            Tile::Cyan => 'I',
            Tile::Yellow => 'O',
            Tile::Purple => 'T',
            Tile::Green => 'S',
            Tile::Red => 'Z',
            Tile::Blue => 'J',
            Tile::Orange => 'L',
        }
    }
}

/// Discrete player intents fed by the host, one per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl Intent {
    /// Parse intent from camelCase string
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_tetris_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("softDrop"), Some(Intent::SoftDrop));
    /// assert_eq!(Intent::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "moveLeft" => Some(Intent::MoveLeft),
            "moveRight" => Some(Intent::MoveRight),
            "softDrop" => Some(Intent::SoftDrop),
            "rotateCw" => Some(Intent::RotateCw),
            "rotateCcw" => Some(Intent::RotateCcw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::RotateCw => "rotateCw",
            Intent::RotateCcw => "rotateCcw",
        }
    }
}

/// Unit translation a piece may attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Right, Direction::Down];

    pub const fn offset(&self) -> Coord {
        match self {
            Direction::Left => Coord::new(-1, 0),
            Direction::Right => Coord::new(1, 0),
            Direction::Down => Coord::new(0, -1),
        }
    }
}

/// Rotation direction, a quarter turn either way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Cw,
    Ccw,
}

impl Spin {
    /// `+1` for clockwise, `-1` for counter-clockwise
    pub const fn sign(&self) -> i32 {
        match self {
            Spin::Cw => 1,
            Spin::Ccw => -1,
        }
    }

    pub const fn reverse(&self) -> Spin {
        match self {
            Spin::Cw => Spin::Ccw,
            Spin::Ccw => Spin::Cw,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
