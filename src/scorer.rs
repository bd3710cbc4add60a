//! Word scoring
//!
//! A word's score is the single digit obtained by reducing each character
//! code, summing the reductions and reducing the sum once more. The score is
//! then perturbed by the current time so that equal words do not always
//! score alike.

use crate::{clock::Clock, config::ZeroScorePolicy, digits::reduce_to_single_digit, error::Error};

/// Computes the time-independent part of a word's score
///
/// Each character code is reduced to a single digit, the digits are summed
/// and the sum is reduced again. Only a word made entirely of `'\0'`
/// characters (or the empty word) scores zero.
pub fn base_score(word: &str) -> u8 {
    let total: u64 = word
        .chars()
        .map(|c| u64::from(reduce_to_single_digit(u64::from(u32::from(c)))))
        .sum();
    reduce_to_single_digit(total)
}

/// Scores words against a clock
#[derive(Debug, Clone, Copy)]
pub struct WordScorer<C> {
    clock: C,
    zero_score: ZeroScorePolicy,
}

impl<C: Clock> WordScorer<C> {
    /// Creates a scorer reading time from `clock`
    pub fn new(clock: C, zero_score: ZeroScorePolicy) -> Self {
        Self { clock, zero_score }
    }

    /// Scores `word` at position `index`, returning a digit in `0..=9`
    ///
    /// Starting from [`base_score`], if the current time in whole seconds
    /// multiplied by `index` is divisible by the score, the score is replaced
    /// by the last digit of the time multiplied by the score.
    ///
    /// # Errors
    ///
    /// Returns `Error::DivisionByZero` when the base score is zero and the
    /// scorer is configured with [`ZeroScorePolicy::Fault`].
    pub fn score(&self, word: &str, index: u64) -> Result<u8, Error> {
        let score = base_score(word);
        let seconds = u128::from(self.clock.seconds());

        if score == 0 {
            return match self.zero_score {
                ZeroScorePolicy::Skip => {
                    log::trace!("zero score for {word:?}, perturbation skipped");
                    Ok(0)
                }
                ZeroScorePolicy::Fault => Err(Error::DivisionByZero),
            };
        }

        let divisor = u128::from(score);
        if (seconds * u128::from(index)) % divisor == 0 {
            Ok(((seconds * divisor) % 10) as u8)
        } else {
            Ok(score)
        }
    }
}
