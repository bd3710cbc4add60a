//! Time-derived seeds
//!
//! A seed is computed from nothing but the clock. The current time in
//! 100 ns ticks is rendered as a zero-padded decimal string and cut into
//! six chunks. Each chunk value names a character, and every ordering of
//! those six characters forms a permutation word. The seed is the sum of the
//! scores of all 720 permutation words.
//!
//! Two reads microseconds apart usually land on different chunk values, so
//! successive seeds differ without any conventional generator involved.

use itertools::Itertools;

use crate::{
    clock::Clock,
    config::ZeroScorePolicy,
    constants::seed::{CHUNK_COUNT, CHUNK_WIDTHS, PERMUTATION_COUNT, TIME_STRING_WIDTH},
    digits::digit_sum,
    error::Error,
    scorer::WordScorer,
};

/// Renders `ticks` in decimal, left-padded with zeros to the time string width
pub fn padded_time(ticks: u128) -> String {
    format!("{ticks:0>width$}", width = TIME_STRING_WIDTH)
}

/// Splits a string from [`padded_time`] into its chunk values
///
/// Only the leading [`TIME_STRING_WIDTH`] characters take part. The string
/// must be ASCII decimal digits at least that long.
fn time_chunks(time: &str) -> [u32; CHUNK_COUNT] {
    let digits = time.as_bytes();
    let mut chunks = [0; CHUNK_COUNT];
    let mut start = 0;
    for (chunk, width) in chunks.iter_mut().zip(CHUNK_WIDTHS) {
        *chunk = digits[start..start + width]
            .iter()
            .fold(0, |value, digit| value * 10 + u32::from(digit - b'0'));
        start += width;
    }
    chunks
}

/// Converts a chunk value to the character with that code
///
/// # Errors
///
/// Returns `Error::CodepointOutOfRange` for surrogate code points and values
/// above `char::MAX`.
pub fn chunk_character(value: u32) -> Result<char, Error> {
    char::from_u32(value).ok_or(Error::CodepointOutOfRange { value })
}

/// Builds every ordering of `characters` as a word
///
/// Repeated characters are not deduplicated, so six characters always yield
/// [`PERMUTATION_COUNT`] words.
pub fn permutation_words(characters: &[char]) -> Vec<String> {
    characters
        .iter()
        .permutations(characters.len())
        .map(|ordering| ordering.into_iter().collect())
        .collect_vec()
}

/// Derives seeds and word indices from a clock
#[derive(Debug, Clone, Copy)]
pub struct SeedEngine<C> {
    clock: C,
    zero_score: ZeroScorePolicy,
}

impl<C: Clock> SeedEngine<C> {
    /// Creates an engine reading time from `clock`
    pub fn new(clock: C, zero_score: ZeroScorePolicy) -> Self {
        Self { clock, zero_score }
    }

    /// Computes a seed from the current time
    ///
    /// The result is the sum of the scores of all permutation words, at most
    /// `9 * PERMUTATION_COUNT`.
    ///
    /// # Errors
    ///
    /// * `Error::CodepointOutOfRange` - a chunk does not name a character
    /// * `Error::DivisionByZero` - a permutation word scored zero under
    ///   [`ZeroScorePolicy::Fault`]
    pub fn time_seed(&self) -> Result<u64, Error> {
        let time = padded_time(self.clock.ticks());
        let characters: Vec<char> = time_chunks(&time)
            .into_iter()
            .map(chunk_character)
            .collect::<Result<_, _>>()?;
        let index = digit_sum(&time);

        let scorer = WordScorer::new(&self.clock, self.zero_score);
        let words = permutation_words(&characters);
        debug_assert_eq!(words.len(), PERMUTATION_COUNT);

        let seed = words.iter().try_fold(0, |sum, word| {
            scorer.score(word, index).map(|score| sum + u64::from(score))
        })?;
        log::trace!("time {time} gave seed {seed}");
        Ok(seed)
    }

    /// Picks an index in `0..len` from a fresh seed
    ///
    /// # Errors
    ///
    /// * `Error::EmptyWordList` - `len` is zero
    /// * Any error of [`SeedEngine::time_seed`]
    pub fn random_index(&self, len: usize) -> Result<usize, Error> {
        if len == 0 {
            return Err(Error::EmptyWordList);
        }
        Ok((self.time_seed()? % len as u64) as usize)
    }
}
