//! Serializable observation of a game, for hosts that render or record state
//! out of process.

use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::piece::Piece;
use crate::pieces::display_id_for;
use crate::types::{Bounds, Coord, PieceKind, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub x: i32,
    pub y: i32,
    pub kind: PieceKind,
    pub tile: Tile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub tile: Tile,
    pub x: i32,
    pub y: i32,
    pub rotation: u8,
    pub cells: [Coord; 4],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        let position = value.position();
        Self {
            kind: value.kind(),
            tile: value.tile(),
            x: position.x,
            y: position.y,
            rotation: value.rotation(),
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub bounds: Bounds,
    /// Committed cells, bottom row first
    pub cells: Vec<CellSnapshot>,
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
    pub pieces_locked: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        let board = game.board();
        let cells = board
            .occupied_cells()
            .map(|(c, kind)| CellSnapshot {
                x: c.x,
                y: c.y,
                kind,
                tile: display_id_for(kind),
            })
            .collect();

        Self {
            bounds: board.bounds(),
            cells,
            active: game.active().map(ActiveSnapshot::from),
            game_over: game.is_game_over(),
            pieces_locked: game.pieces_locked(),
            lines_cleared: game.lines_cleared(),
        }
    }

    /// Plain-text picture of the grid, top row first.
    ///
    /// Committed cells use the tile glyph, the falling piece uses `@`, empty
    /// cells `.`.
    pub fn text_rows(&self) -> Vec<String> {
        let b = self.bounds;
        let width = b.width.max(0) as usize;
        let height = b.height.max(0) as usize;
        let mut grid = vec![vec!['.'; width]; height];

        let mut put = |x: i32, y: i32, ch: char| {
            if b.contains(Coord::new(x, y)) {
                let row = (b.y_max() - 1 - y) as usize;
                grid[row][(x - b.x_min) as usize] = ch;
            }
        };

        for cell in &self.cells {
            put(cell.x, cell.y, cell.tile.glyph());
        }
        if let Some(active) = &self.active {
            for c in active.cells {
                put(c.x, c.y, '@');
            }
        }

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::rng::PieceSource;

    #[test]
    fn test_capture_fresh_game() {
        let mut game =
            Game::with_source(GameConfig::default(), PieceSource::sequence(vec![PieceKind::O]))
                .unwrap();
        game.start();

        let snap = game.snapshot();
        assert!(snap.cells.is_empty());
        assert_eq!(snap.active.map(|a| a.kind), Some(PieceKind::O));
        assert!(!snap.game_over);
    }

    #[test]
    fn test_text_rows_marks_active_piece() {
        let mut game =
            Game::with_source(GameConfig::default(), PieceSource::sequence(vec![PieceKind::O]))
                .unwrap();
        game.start();

        let rows = game.snapshot().text_rows();
        assert_eq!(rows.len(), 20);
        // O at anchor (-1, 8) covers y = 8..=9, the top two rows.
        assert_eq!(rows[0], "....@@....");
        assert_eq!(rows[1], "....@@....");
        assert_eq!(rows[2], "..........");
    }
}
