//! RNG module - injectable random source for maze generation
//!
//! The generator never touches ambient randomness. It draws from a
//! [`RandomSource`], which makes every maze reproducible from a seed.
//!
//! [`SimpleRng`] is the default source: a small LCG that is fast, `Clone`,
//! and stable across platforms and crate versions.

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Generate the next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

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

    /// Rebuild a generator from a value returned by [`SimpleRng::state`].
    ///
    /// Unlike [`SimpleRng::new`], zero is taken as-is.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current internal state. [`SimpleRng::from_state`] resumes the
    /// sequence from here.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG have short periods; fold the high half in.
        self.state ^ (self.state >> 16)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
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
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..40 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_next_range_hits_every_value() {
        // Small ranges must not get stuck on a subset (the raw LCG low bit alternates).
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 15];
        for _ in 0..2000 {
            seen[rng.next_range(15) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "{:?}", seen);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(3);
        let mut items = [0u8, 1, 2, 3];
        rng.shuffle(&mut items);
        let mut sorted = items;
        sorted.sort();
        assert_eq!(sorted, [0, 1, 2, 3]);
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut resumed = SimpleRng::from_state(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }

    #[test]
    fn test_zero_state_resumes_sequence() {
        // One LCG step from this seed lands on state 0.
        let mut rng = SimpleRng::new(634_785_765);
        rng.next_u32();
        assert_eq!(rng.state(), 0);

        let mut resumed = SimpleRng::from_state(rng.state());
        assert_eq!(resumed.next_u32(), rng.next_u32());
        assert_eq!(resumed.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        let mut rng = SimpleRng::new(5);
        let mut copy = rng.clone();
        let by_ref = &mut rng;
        fn draw(mut src: impl RandomSource) -> u32 {
            src.next_range(100)
        }
        assert_eq!(draw(by_ref), copy.next_range(100));
    }
}
