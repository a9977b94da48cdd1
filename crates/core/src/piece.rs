//! Active piece - the single falling tetromino and its state machine
//!
//! A piece is `Falling` from spawn until a downward step leaves it resting on
//! something, at which point it locks immediately: the board commits its cells,
//! clears full rows and spawns the next piece. There is no lock delay; the
//! time-since-spawn timer is tracked but never consulted when locking.
//!
//! The piece never mutates the board while moving. Every candidate position is
//! checked with [`Board::is_valid`] and either taken whole or not at all.

use log::debug;

use crate::board::Board;
use crate::pieces::{display_id_for, offsets_for, rotate_offsets, PieceShape};
use crate::types::{Coord, Direction, PieceKind, Spin, Tile, ROTATION_STATES};

/// Falling tetromino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    position: Coord,
    rotation: u8,
    offsets: PieceShape,
    step_interval_ms: u32,
    /// Time since spawn; also the gravity clock
    elapsed_ms: u64,
    /// Gravity clock reading at which the next step is due
    next_step_ms: u64,
}

/// A piece that has become permanent board occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub cells: [Coord; 4],
    pub lines_cleared: usize,
}

/// Result of a gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still falling
    Falling,
    /// The piece locked; `next` is its replacement, or `None` on game over
    Locked {
        lock: LockEvent,
        next: Option<Piece>,
    },
}

impl StepOutcome {
    pub fn is_locked(&self) -> bool {
        matches!(self, StepOutcome::Locked { .. })
    }
}

impl Piece {
    /// Create a piece in spawn orientation anchored at `position`.
    ///
    /// This does not check the position; [`Board::spawn`] does.
    pub fn new(kind: PieceKind, position: Coord, step_interval_ms: u32) -> Self {
        Self {
            kind,
            position,
            rotation: 0,
            offsets: offsets_for(kind),
            step_interval_ms,
            elapsed_ms: 0,
            next_step_ms: u64::from(step_interval_ms),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn tile(&self) -> Tile {
        display_id_for(self.kind)
    }

    /// Anchor coordinate
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Rotation index in `0..4`
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Current relative cell offsets
    pub fn offsets(&self) -> PieceShape {
        self.offsets
    }

    /// Absolute cells at the current anchor
    pub fn cells(&self) -> [Coord; 4] {
        self.cells_at(self.position)
    }

    /// Absolute cells the piece would cover if anchored at `anchor`
    pub fn cells_at(&self, anchor: Coord) -> [Coord; 4] {
        self.offsets.map(|offset| anchor + offset)
    }

    pub fn time_since_spawn_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn time_until_step_ms(&self) -> u64 {
        self.next_step_ms.saturating_sub(self.elapsed_ms)
    }

    /// Try to translate the piece one cell.
    ///
    /// Either the anchor moves by exactly `direction` or nothing changes.
    pub fn try_move(&mut self, direction: Direction, board: &Board) -> bool {
        let target = self.position + direction.offset();
        if !board.is_valid(self.cells_at(target)) {
            return false;
        }
        self.position = target;
        true
    }

    /// Try a single quarter turn in place.
    ///
    /// No alternative positions are tried. If the turned cells do not fit, the
    /// reverse turn is applied and the piece is exactly as it was.
    pub fn rotate(&mut self, spin: Spin, board: &Board) -> bool {
        let saved = self.rotation;
        self.rotation = Self::wrap_rotation(i32::from(self.rotation) + spin.sign());
        rotate_offsets(self.kind, &mut self.offsets, spin);

        if board.is_valid(self.cells()) {
            return true;
        }

        self.rotation = saved;
        rotate_offsets(self.kind, &mut self.offsets, spin.reverse());
        false
    }

    fn wrap_rotation(index: i32) -> u8 {
        index.rem_euclid(i32::from(ROTATION_STATES)) as u8
    }

    /// One gravity step.
    ///
    /// Moves down if possible, then locks if the cell row below is blocked.
    /// On lock the board commits this piece, clears full rows and spawns the
    /// replacement.
    pub fn step(&mut self, board: &mut Board) -> StepOutcome {
        self.try_move(Direction::Down, board);

        let below = self.position + Direction::Down.offset();
        if board.is_valid(self.cells_at(below)) {
            return StepOutcome::Falling;
        }

        self.lock(board)
    }

    fn lock(&self, board: &mut Board) -> StepOutcome {
        board.commit(self);
        let lines_cleared = board.clear_completed_lines();
        debug!(
            "locked {:?} at {:?} after {}ms, {} line(s)",
            self.kind, self.position, self.elapsed_ms, lines_cleared
        );

        let lock = LockEvent {
            kind: self.kind,
            cells: self.cells(),
            lines_cleared,
        };
        StepOutcome::Locked {
            lock,
            next: board.spawn_next(),
        }
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Steps once per interval that came due. Each next due time is the
    /// previous due time plus the interval, so cadence does not drift with
    /// uneven frame times. Stops at the first lock.
    pub fn tick(&mut self, elapsed_ms: u32, board: &mut Board) -> StepOutcome {
        self.elapsed_ms += u64::from(elapsed_ms);

        while self.elapsed_ms >= self.next_step_ms {
            self.next_step_ms += u64::from(self.step_interval_ms.max(1));
            let outcome = self.step(board);
            if outcome.is_locked() {
                return outcome;
            }
        }

        StepOutcome::Falling
    }
}
