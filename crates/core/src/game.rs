//! Game module - thin orchestrator over the board and the active piece
//!
//! The game owns the board and the single falling piece outright; nothing is
//! reached through a global. A host drives it once per frame:
//!
//! 1. `submit_intent` for each key press seen this frame
//! 2. `advance_time` with the elapsed frame time
//! 3. read `occupied_cells` / `active_piece_cells` to paint, and poll
//!    `is_game_over`
//!
//! When a piece locks, the replacement returned by the board takes its slot in
//! one assignment, so there is never a moment with two active pieces or none
//! (short of game over).

use log::info;

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::intent::IntentQueue;
use crate::piece::{LockEvent, Piece, StepOutcome};
use crate::pieces::display_id_for;
use crate::rng::PieceSource;
use crate::snapshot::GameSnapshot;
use crate::types::{Coord, Direction, Intent, Spin, Tile};

/// What happened during one [`Game::advance_time`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    /// Intents that moved or rotated the piece
    pub accepted: u32,
    /// Intents that were blocked and left the piece unchanged
    pub rejected: u32,
    /// Set when the active piece locked this advance
    pub lock: Option<LockEvent>,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<Piece>,
    intents: IntentQueue,
    started: bool,
    pieces_locked: u32,
    lines_cleared: u32,
}

impl Game {
    /// Create a game with uniform random pieces seeded from `config.seed`
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_board(Board::from_config(&config)))
    }

    /// Create a game whose pieces come from `source`
    pub fn with_source(config: GameConfig, source: PieceSource) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_board(
            Board::from_config(&config).with_source(source),
        ))
    }

    /// Wrap an existing board, which may already hold committed cells
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            active: None,
            intents: IntentQueue::new(),
            started: false,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.active = self.board.spawn_next();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pending_intents(&self) -> usize {
        self.intents.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Queue an intent for the next advance.
    ///
    /// Returns false if the queue is full or the game is over.
    pub fn submit_intent(&mut self, intent: Intent) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.intents.push(intent)
    }

    /// Apply one intent to the active piece right away.
    ///
    /// Returns whether the piece moved or rotated. Soft drop only moves; it
    /// never locks the piece.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        match self.active.as_mut() {
            Some(piece) => Self::apply_to(piece, intent, &self.board),
            None => false,
        }
    }

    fn apply_to(piece: &mut Piece, intent: Intent, board: &Board) -> bool {
        match intent {
            Intent::MoveLeft => piece.try_move(Direction::Left, board),
            Intent::MoveRight => piece.try_move(Direction::Right, board),
            Intent::SoftDrop => piece.try_move(Direction::Down, board),
            Intent::RotateCw => piece.rotate(Spin::Cw, board),
            Intent::RotateCcw => piece.rotate(Spin::Ccw, board),
        }
    }

    /// Drain queued intents, then run gravity for `delta_ms`.
    ///
    /// Does nothing (beyond discarding queued intents) before `start` or after
    /// game over.
    pub fn advance_time(&mut self, delta_ms: u32) -> AdvanceReport {
        let batch = self.intents.take();
        let mut report = AdvanceReport {
            game_over: self.is_game_over(),
            ..AdvanceReport::default()
        };

        let Some(piece) = self.active.as_mut() else {
            return report;
        };

        for intent in batch {
            if Self::apply_to(piece, intent, &self.board) {
                report.accepted += 1;
            } else {
                report.rejected += 1;
            }
        }

        if let StepOutcome::Locked { lock, next } = piece.tick(delta_ms, &mut self.board) {
            self.pieces_locked += 1;
            self.lines_cleared += lock.lines_cleared as u32;
            self.active = next;
            report.lock = Some(lock);
        }

        report.game_over = self.is_game_over();
        report
    }

    /// Queue `intents` and advance in one call
    pub fn advance(&mut self, delta_ms: u32, intents: &[Intent]) -> AdvanceReport {
        for &intent in intents {
            self.submit_intent(intent);
        }
        self.advance_time(delta_ms)
    }

    /// Committed cells with their display identifiers
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.board
            .occupied_cells()
            .map(|(c, kind)| (c, display_id_for(kind)))
    }

    /// Cells of the falling piece, which are not part of the board yet
    pub fn active_piece_cells(&self) -> Option<[Coord; 4]> {
        self.active.map(|p| p.cells())
    }

    pub fn active_tile(&self) -> Option<Tile> {
        self.active.map(|p| p.tile())
    }

    /// Wipe the board, reset counters and spawn a fresh piece
    pub fn restart(&mut self) {
        self.board.reset_game_over();
        self.intents.clear();
        self.pieces_locked = 0;
        self.lines_cleared = 0;
        self.started = true;
        self.active = self.board.spawn_next();
        info!("game restarted");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_board(Board::new())
    }
}
