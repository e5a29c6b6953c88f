//! Deterministic random source for grid seeding.
//!
//! A small linear congruential generator keeps the engine dependency-free
//! and makes every randomized board replayable from its seed.

// Numerical Recipes constants, modulus 2^32.
const LCG_MUL: u32 = 1_664_525;
const LCG_INC: u32 = 1_013_904_223;

/// Seeded LCG over `u32`.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Build a generator from a seed. A zero seed is remapped to 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advance one step and return the new 32-bit state.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        self.state
    }

    /// Fair coin flip.
    ///
    /// Draws the top bit. The low bits of a power-of-two-modulus LCG have
    /// short periods (bit 0 strictly alternates) and would stripe a
    /// randomized grid.
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}
