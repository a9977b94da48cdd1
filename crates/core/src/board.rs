//! Board module - owns the grid and decides every legality question
//!
//! The board is a fixed rectangle of cells, each empty or filled with the kind of
//! piece that locked there. It stores only committed cells: the falling piece is
//! never part of board state until it locks.
//!
//! Cells live in a flat array, row-major, bottom row first:
//! `index = (y - y_min) * width + (x - x_min)`. Rows shift down with
//! `copy_within`, which handles the overlapping ranges without allocating.

use log::{debug, info};

use crate::config::GameConfig;
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::types::{
    Bounds, Cell, Coord, PieceKind, BOARD_HEIGHT, BOARD_ORIGIN, BOARD_WIDTH, SPAWN_POSITION,
    STEP_INTERVAL_MS,
};

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    bounds: Bounds,
    /// Flat array of cells, row-major, bottom row first
    cells: Vec<Cell>,
    spawn: Coord,
    step_interval_ms: u32,
    source: PieceSource,
    game_over: bool,
}

impl Board {
    /// Create the standard 10x20 board with a seeded uniform piece source
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a board from an already validated configuration
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            bounds: config.bounds(),
            cells: vec![None; config.bounds().area()],
            spawn: config.spawn,
            step_interval_ms: config.step_interval_ms,
            source: PieceSource::uniform(config.seed),
            game_over: false,
        }
    }

    /// Create an empty board covering `bounds` with the given spawn anchor
    pub fn with_bounds(bounds: Bounds, spawn: Coord) -> Self {
        Self {
            bounds,
            cells: vec![None; bounds.area()],
            spawn,
            step_interval_ms: STEP_INTERVAL_MS,
            source: PieceSource::default(),
            game_over: false,
        }
    }

    /// Board of the default size with its bottom-left cell at (0, 0)
    pub fn zero_origin() -> Self {
        let spawn = SPAWN_POSITION - BOARD_ORIGIN;
        Self::with_bounds(Bounds::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT), spawn)
    }

    /// Replace the piece source used by [`Board::spawn_next`]
    pub fn with_source(mut self, source: PieceSource) -> Self {
        self.source = source;
        self
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, c: Coord) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        let col = (c.x - self.bounds.x_min) as usize;
        let row = (c.y - self.bounds.y_min) as usize;
        Some(row * self.bounds.width as usize + col)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn spawn_position(&self) -> Coord {
        self.spawn
    }

    pub fn step_interval_ms(&self) -> u32 {
        self.step_interval_ms
    }

    /// Get cell at a coordinate
    /// Returns None if out of bounds
    pub fn get(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|idx| self.cells[idx])
    }

    /// Within bounds and empty
    pub fn is_cell_free(&self, c: Coord) -> bool {
        matches!(self.get(c), Some(None))
    }

    /// Check whether a set of absolute cells could be occupied by a piece.
    ///
    /// False if any cell lies outside the bounds or is already filled; true
    /// otherwise, including for an empty set. Movement, rotation and spawning
    /// all route through here.
    pub fn is_valid<I>(&self, cells: I) -> bool
    where
        I: IntoIterator<Item = Coord>,
    {
        cells.into_iter().all(|c| self.is_cell_free(c))
    }

    /// Write a piece's current cells into the board.
    ///
    /// # Panics
    ///
    /// Panics if any cell is out of bounds or already filled. Callers validate
    /// the position first, so this only fires on a bug in the engine.
    pub fn commit(&mut self, piece: &Piece) {
        self.commit_cells(&piece.cells(), piece.kind());
    }

    /// Fill `cells` with `kind`, with the same precondition as [`Board::commit`]
    pub fn commit_cells(&mut self, cells: &[Coord], kind: PieceKind) {
        assert!(
            self.is_valid(cells.iter().copied()),
            "commit of {:?} over occupied or out-of-bounds cells {:?}",
            kind,
            cells
        );
        for &c in cells {
            if let Some(idx) = self.index(c) {
                self.cells[idx] = Some(kind);
            }
        }
    }

    /// Erase a piece's current cells from the board, if present.
    ///
    /// Lets a host that painted a piece into the board remove it again before
    /// redrawing it elsewhere.
    pub fn uncommit(&mut self, piece: &Piece) {
        for c in piece.cells() {
            if let Some(idx) = self.index(c) {
                self.cells[idx] = None;
            }
        }
    }

    /// Check if a row is completely filled.
    ///
    /// A board with no columns has no full rows.
    pub fn is_row_full(&self, y: i32) -> bool {
        if self.bounds.width <= 0 || y < self.bounds.y_min || y >= self.bounds.y_max() {
            return false;
        }
        let width = self.bounds.width as usize;
        let start = (y - self.bounds.y_min) as usize * width;
        self.cells[start..start + width].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, dropping the rows above into the gap.
    ///
    /// Rows are scanned from the floor up. After a clear the scan stays on the
    /// same row, since the row above has just moved into it. Returns the number
    /// of rows removed.
    pub fn clear_completed_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = self.bounds.y_min;

        while row < self.bounds.y_max() {
            if self.is_row_full(row) {
                self.clear_line(row);
                cleared += 1;
            } else {
                row += 1;
            }
        }

        if cleared > 0 {
            debug!("cleared {} line(s)", cleared);
        }
        cleared
    }

    /// Empty `row` and shift every row above it down by one
    fn clear_line(&mut self, row: i32) {
        let width = self.bounds.width as usize;
        let start = (row - self.bounds.y_min) as usize * width;
        let end = self.cells.len();

        self.cells.copy_within(start + width..end, start);
        self.cells[end - width..].fill(None);
    }

    /// Spawn a piece of `kind` at the spawn anchor.
    ///
    /// Returns `None` and raises the game-over flag when the spawn cells are
    /// blocked; nothing is written to the board in that case. While the game is
    /// over no piece spawns until [`Board::reset_game_over`].
    pub fn spawn(&mut self, kind: PieceKind) -> Option<Piece> {
        if self.game_over {
            return None;
        }

        let piece = Piece::new(kind, self.spawn, self.step_interval_ms);
        if !self.is_valid(piece.cells()) {
            self.game_over = true;
            info!("game over: {:?} blocked at spawn {:?}", kind, self.spawn);
            return None;
        }

        debug!("spawned {:?} at {:?}", kind, self.spawn);
        Some(piece)
    }

    /// Spawn the next piece drawn from the board's piece source
    pub fn spawn_next(&mut self) -> Option<Piece> {
        if self.game_over {
            return None;
        }
        let kind = self.source.draw();
        self.spawn(kind)
    }

    /// Wipe the board and leave the game-over state. Does not respawn.
    pub fn reset_game_over(&mut self) {
        self.cells.fill(None);
        self.game_over = false;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Iterate filled cells as `(coordinate, kind)`, bottom row first
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coord, PieceKind)> + '_ {
        let width = self.bounds.width as usize;
        let (x_min, y_min) = (self.bounds.x_min, self.bounds.y_min);
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|kind| {
                let c = Coord::new(x_min + (idx % width) as i32, y_min + (idx / width) as i32);
                (c, kind)
            })
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(Coord::new(-5, -10)), Some(0));
        assert_eq!(board.index(Coord::new(4, -10)), Some(9));
        assert_eq!(board.index(Coord::new(-5, -9)), Some(10));
        assert_eq!(board.index(Coord::new(4, 9)), Some(199));
        assert_eq!(board.index(Coord::new(-6, 0)), None);
        assert_eq!(board.index(Coord::new(5, 0)), None);
        assert_eq!(board.index(Coord::new(0, 10)), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::zero_origin();

        board.commit_cells(&[Coord::new(0, 0)], PieceKind::I);
        board.commit_cells(&[Coord::new(5, 10)], PieceKind::T);

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_clear_line_drops_top_row_to_empty() {
        let mut board = Board::zero_origin();
        let top = board.height() - 1;
        for x in 0..board.width() {
            board.commit_cells(&[Coord::new(x, top)], PieceKind::Z);
        }
        board.clear_line(0);
        assert!(!board.is_row_full(top));
        assert!(board.is_row_full(top - 1));
    }

    #[test]
    fn test_zero_origin_spawn_is_top_center() {
        let board = Board::zero_origin();
        assert_eq!(board.spawn_position(), Coord::new(4, 18));
    }
}
