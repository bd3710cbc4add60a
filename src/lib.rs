//! # Random Algorithm
//!
//! This library generates numbers of a requested size from nothing but the
//! current wall-clock time and a word list. Seeds are derived by slicing the
//! time into characters, scoring every permutation of them, and summing the
//! scores. The only conventional random source is the shuffle applied to
//! the word list before each digit is drawn.
//!
//! The output is not cryptographically secure and carries no uniformity
//! guarantees. With a [`FixedClock`](clock::FixedClock) and a seeded
//! shuffle, every step is reproducible.
//!
//! ```no_run
//! let number = random_algorithm::generate(8)?;
//! assert!(number.significant_digits() >= 8);
//! # Ok::<(), random_algorithm::Error>(())
//! ```

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::doc_markdown)]

pub mod clock;
pub mod config;
pub mod constants;
pub mod digits;
mod error;
pub mod generator;
pub mod scorer;
pub mod seed;
pub mod words;

pub use error::{Error, InvalidArgument};
pub use generator::{DesiredSize, Digits, Generator, SharedGenerator};
pub use words::WordStore;

/// Generates a number with at least `desired_size` significant digits
///
/// Uses the bundled English word list, the system clock and default
/// options. Each call builds its own generator; keep a [`Generator`] around
/// to avoid reloading the word list.
///
/// # Errors
///
/// * `Error::InvalidArgument` - `desired_size` is not a positive integer
/// * Any error of [`Generator::generate`]
pub fn generate<S>(desired_size: S) -> Result<Digits, Error>
where
    S: TryInto<DesiredSize, Error = Error>,
{
    let size = desired_size.try_into()?;
    Generator::english()?.generate_sized(size)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_generate_meets_size() {
        for size in [1, 3, 5] {
            let digits = generate(size).unwrap();
            assert!(digits.significant_digits() >= size);
            assert!(digits.as_str().chars().all(|c| c.is_ascii_digit()));
            assert!(!digits.as_str().starts_with('0'));
        }
    }

    #[test]
    fn test_generate_rejects_invalid_sizes() {
        assert_eq!(generate(0), Err(InvalidArgument::TooSmall(0).into()));
        assert_eq!(generate(-1), Err(InvalidArgument::TooSmall(-1).into()));
        assert_eq!(generate(1.5), Err(InvalidArgument::NotAnInteger.into()));
    }

    #[test]
    fn test_generate_fits_u64_for_small_sizes() {
        let digits = generate(4).unwrap();
        assert!(u64::try_from(&digits).unwrap() >= 1000);
    }
}
