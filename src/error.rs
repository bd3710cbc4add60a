//! Error types for number generation

use serde::Serialize;
use thiserror::Error;

/// Reasons a requested size was rejected
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The size has a fractional part or is not finite
    #[error("desired size must be an integer")]
    NotAnInteger,
    /// The size is zero or negative
    #[error("desired size must be at least 1, got {0}")]
    TooSmall(i128),
    /// The size does not fit in memory addressing
    #[error("desired size {0} is too large")]
    TooLarge(i128),
    /// The size could not be parsed as a number
    #[error("desired size {0:?} is not a number")]
    NotANumber(String),
}

/// Errors produced while building a generator or generating a number
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested size is not a positive integer
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// A word store was built without any words
    #[error("word list cannot be empty")]
    EmptyWordList,
    /// A word store was given an empty word
    #[error("word at position {position} is empty")]
    EmptyWord {
        /// Position of the offending entry
        position: usize,
    },
    /// A word reduced to zero while zero scores are configured to fault
    #[error("word score reduced to zero, cannot apply perturbation")]
    DivisionByZero,
    /// A time chunk does not name a valid character
    #[error("chunk value {value} is not a valid character code")]
    CodepointOutOfRange {
        /// The rejected chunk value
        value: u32,
    },
    /// Padding did not reach the desired size within the configured rounds
    #[error("padding did not complete within {rounds} rounds")]
    PaddingExhausted {
        /// Number of rounds attempted
        rounds: usize,
    },
    /// A word list file could not be read
    #[error("word list unreadable: {0}")]
    WordListUnreadable(String),
    /// Options failed to parse or validate
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}
