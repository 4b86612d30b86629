//! RNG module - deterministic piece generation
//!
//! Each new piece gets a uniformly random template and, independently, a
//! uniformly random color. The generator is a small LCG so a seed fully
//! determines the piece sequence.

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{Color, ShapeKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in [0, max), using the high bits (the low bits of an
    /// LCG cycle with a short period).
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Pick one element uniformly
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }
}

/// Source of new pieces for one session
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    seed: u32,
    columns: u16,
}

impl PieceGenerator {
    pub fn new(seed: u32, columns: u16) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
            columns,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Draw a fresh piece at the spawn position
    pub fn next_piece(&mut self) -> Piece {
        let kind = self.rng.choose(&ShapeKind::ALL);
        let color = self.rng.choose(&Color::ALL);
        Piece::spawn(Shape::template(kind), color, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PieceGenerator::new(42, 10);
        let mut b = PieceGenerator::new(42, 10);
        for _ in 0..50 {
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }

    #[test]
    fn next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn every_kind_and_color_eventually_appears() {
        let mut generator = PieceGenerator::new(12345, 10);
        let mut kinds = std::collections::HashSet::new();
        let mut colors = std::collections::HashSet::new();
        for _ in 0..500 {
            let p = generator.next_piece();
            kinds.insert(p.kind());
            colors.insert(p.color);
        }
        assert_eq!(kinds.len(), 7);
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn pieces_spawn_at_row_zero() {
        let mut generator = PieceGenerator::new(3, 10);
        for _ in 0..20 {
            assert_eq!(generator.next_piece().y, 0);
        }
    }
}
