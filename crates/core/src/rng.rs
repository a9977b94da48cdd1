//! RNG module - deterministic piece selection
//!
//! Pieces are drawn uniformly at random from the seven-piece catalog, using a
//! small LCG so that the same seed always replays the same game. Hosts and tests
//! that need exact control can instead supply a fixed sequence, which cycles.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Current internal state (for replaying from the same point)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Where the board gets the next piece kind from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceSource {
    /// Uniform random choice over [`PieceKind::ALL`]
    Uniform(SimpleRng),
    /// Fixed sequence, restarting from the front once exhausted
    Sequence(PieceSequence),
}

/// Non-empty cyclic list of piece kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSequence {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl PieceSequence {
    /// An empty list falls back to the catalog order.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds = PieceKind::ALL.to_vec();
        }
        Self { kinds, next: 0 }
    }

    pub fn kinds(&self) -> &[PieceKind] {
        &self.kinds
    }

    fn draw(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

impl PieceSource {
    pub fn uniform(seed: u32) -> Self {
        PieceSource::Uniform(SimpleRng::new(seed))
    }

    /// Cycle through `kinds` in order.
    ///
    /// An empty list falls back to the catalog order.
    pub fn sequence(kinds: impl Into<Vec<PieceKind>>) -> Self {
        PieceSource::Sequence(PieceSequence::new(kinds))
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self {
            PieceSource::Uniform(rng) => {
                let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            PieceSource::Sequence(sequence) => sequence.draw(),
        }
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::uniform(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0), SimpleRng::new(1));
    }

    #[test]
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_source_covers_catalog() {
        let mut source = PieceSource::uniform(42);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let kind = source.draw();
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        assert_eq!(seen.len(), 7, "saw only {:?}", seen);
    }

    #[test]
    fn test_sequence_source_cycles() {
        let mut source = PieceSource::sequence(vec![PieceKind::O, PieceKind::I]);
        assert_eq!(source.draw(), PieceKind::O);
        assert_eq!(source.draw(), PieceKind::I);
        assert_eq!(source.draw(), PieceKind::O);
    }

    #[test]
    fn test_empty_sequence_falls_back_to_catalog() {
        let mut source = PieceSource::sequence(Vec::<PieceKind>::new());
        for kind in PieceKind::ALL {
            assert_eq!(source.draw(), kind);
        }
    }

    #[test]
    fn test_empty_sequence_built_directly_still_draws() {
        let mut source = PieceSource::Sequence(PieceSequence::new(Vec::<PieceKind>::new()));
        assert_eq!(source.draw(), PieceKind::I);
        assert_eq!(source.draw(), PieceKind::ALL[1]);
    }

    #[test]
    fn test_sequence_keeps_given_kinds() {
        let sequence = PieceSequence::new(vec![PieceKind::S, PieceKind::Z]);
        assert_eq!(sequence.kinds(), &[PieceKind::S, PieceKind::Z]);
    }
}
