//! Fixed parameters of the seed pipeline
//!
//! This module contains the constants that shape how time is sliced into
//! characters, how many permutation words are scored per seed, and the
//! limits applied to generation.

/// Seed derivation constants
pub mod seed {
    /// Ticks per second used when sampling the clock (100 ns resolution)
    pub const TICKS_PER_SECOND: u128 = 10_000_000;
    /// Nanoseconds in a single tick
    pub const NANOS_PER_TICK: u128 = 1_000_000_000 / TICKS_PER_SECOND;
    /// Minimum width of the zero-padded tick string
    pub const TIME_STRING_WIDTH: usize = 17;
    /// Widths of the chunks the tick string is split into, in order
    pub const CHUNK_WIDTHS: [usize; 6] = [3, 2, 4, 2, 3, 3];
    /// Number of characters taking part in each permutation word
    pub const CHUNK_COUNT: usize = CHUNK_WIDTHS.len();
    /// Number of permutation words scored per seed (6!)
    ///
    /// This dominates the cost of a single seed derivation.
    pub const PERMUTATION_COUNT: usize = 720;
}

/// Number generation constants
pub mod generator {
    /// Modulus applied to a fresh seed to obtain a padding digit
    pub const PADDING_MODULUS: u64 = 17;
    /// Default number of padding rounds allowed while the clock stands still
    pub const DEFAULT_PADDING_ROUNDS: usize = 4096;
    /// Largest accepted padding round bound
    pub const MAX_PADDING_ROUNDS: usize = 1_000_000;
    /// Largest number of digits a single generation may request
    pub const MAX_DESIRED_SIZE: usize = 1_000_000;
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_cover_time_string() {
        assert_eq!(
            seed::CHUNK_WIDTHS.iter().sum::<usize>(),
            seed::TIME_STRING_WIDTH
        );
    }

    #[test]
    fn test_permutation_count_is_chunk_factorial() {
        assert_eq!(
            (1..=seed::CHUNK_COUNT).product::<usize>(),
            seed::PERMUTATION_COUNT
        );
    }

    #[test]
    fn test_tick_resolution() {
        assert_eq!(seed::NANOS_PER_TICK, 100);
    }
}
