//! Number generation
//!
//! A [`Generator`] assembles a number one digit at a time. For each digit
//! the word list is shuffled, a time-derived index selects a word, and the
//! word's score at that index becomes the next digit. Leading zeros do not
//! count toward the requested size, so the number is then padded with
//! digits taken from fresh seeds until it is long enough.

use std::{
    num::{NonZeroUsize, ParseIntError},
    str::FromStr,
    sync::{Mutex, PoisonError},
};

use serde::Serialize;

use crate::{
    clock::{Clock, SystemClock},
    config::Options,
    constants::generator::{MAX_DESIRED_SIZE, PADDING_MODULUS},
    error::{Error, InvalidArgument},
    scorer::WordScorer,
    seed::SeedEngine,
    words::WordStore,
};

/// The number of significant digits requested from a generation
///
/// Always at least one. Built from integers, floats or text; anything that
/// is not a positive whole number is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DesiredSize(NonZeroUsize);

impl DesiredSize {
    /// Creates a desired size
    ///
    /// # Errors
    ///
    /// * `InvalidArgument::TooSmall` - `size` is zero
    /// * `InvalidArgument::TooLarge` - `size` exceeds [`MAX_DESIRED_SIZE`]
    pub fn new(size: usize) -> Result<Self, Error> {
        if size > MAX_DESIRED_SIZE {
            return Err(InvalidArgument::TooLarge(size as i128).into());
        }
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(InvalidArgument::TooSmall(0).into())
    }

    /// Returns the size as a plain number
    pub fn get(self) -> usize {
        self.0.get()
    }

    fn from_wide(size: i128) -> Result<Self, Error> {
        if size < 1 {
            return Err(InvalidArgument::TooSmall(size).into());
        }
        let size = usize::try_from(size).map_err(|_| InvalidArgument::TooLarge(size))?;
        Self::new(size)
    }
}

macro_rules! desired_size_from_int {
    ($($int:ty),*) => {$(
        impl TryFrom<$int> for DesiredSize {
            type Error = Error;

            fn try_from(size: $int) -> Result<Self, Error> {
                Self::from_wide(size as i128)
            }
        }
    )*};
}

desired_size_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<f64> for DesiredSize {
    type Error = Error;

    /// Accepts floats with no fractional part, such as `3.0`
    #[allow(clippy::float_cmp)]
    fn try_from(size: f64) -> Result<Self, Error> {
        if !size.is_finite() || size.trunc() != size {
            return Err(InvalidArgument::NotAnInteger.into());
        }
        Self::from_wide(size as i128)
    }
}

impl FromStr for DesiredSize {
    type Err = Error;

    /// Parses a size from text, accepting whole numbers written as floats
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(size) = s.parse::<i128>() {
            return Self::from_wide(size);
        }
        match s.parse::<f64>() {
            Ok(size) => Self::try_from(size),
            Err(_) => Err(InvalidArgument::NotANumber(s.to_owned()).into()),
        }
    }
}

impl TryFrom<&str> for DesiredSize {
    type Error = Error;

    fn try_from(size: &str) -> Result<Self, Error> {
        size.parse()
    }
}

/// A generated number in canonical decimal form
///
/// The value may be wider than any primitive integer, so it is kept as
/// text without leading zeros. Checked conversions to `u64` and `u128` are
/// available. Serializes as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub struct Digits(String);

impl Digits {
    /// Parses an accumulator of decimal digits, dropping leading zeros
    fn from_accumulator(accumulator: &str) -> Self {
        let significant = accumulator.trim_start_matches('0');
        if significant.is_empty() {
            Self("0".to_owned())
        } else {
            Self(significant.to_owned())
        }
    }

    /// Returns the decimal text of the number
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of significant decimal digits
    ///
    /// Zero has no significant digits.
    pub fn significant_digits(&self) -> usize {
        if self.0 == "0" { 0 } else { self.0.len() }
    }
}

impl TryFrom<&Digits> for u64 {
    type Error = ParseIntError;

    fn try_from(digits: &Digits) -> Result<Self, Self::Error> {
        digits.0.parse()
    }
}

impl TryFrom<&Digits> for u128 {
    type Error = ParseIntError;

    fn try_from(digits: &Digits) -> Result<Self, Self::Error> {
        digits.0.parse()
    }
}

/// Number of digits left after stripping leading zeros
fn significant_len(accumulator: &str) -> usize {
    accumulator.trim_start_matches('0').len()
}

/// First decimal digit of `n`
fn leading_digit(mut n: u64) -> char {
    while n >= 10 {
        n /= 10;
    }
    char::from(b'0' + n as u8)
}

/// Generates numbers from a word list and a clock
///
/// The generator owns its word list and shuffles it on every digit. The
/// shuffle uses the generator's own [`fastrand::Rng`]; everything else is
/// derived from the clock.
#[derive(Debug, Clone)]
pub struct Generator<C = SystemClock> {
    words: WordStore,
    clock: C,
    rng: fastrand::Rng,
    options: Options,
}

impl Generator {
    /// Creates a generator over `words` using the system clock
    pub fn new(words: WordStore) -> Self {
        Self::with_clock(words, SystemClock)
    }

    /// Creates a generator over the bundled English word list
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWordList` only if the bundled list is empty.
    pub fn english() -> Result<Self, Error> {
        Ok(Self::new(WordStore::english()?))
    }
}

impl<C: Clock> Generator<C> {
    /// Creates a generator over `words` reading time from `clock`
    pub fn with_clock(words: WordStore, clock: C) -> Self {
        Self {
            words,
            clock,
            rng: fastrand::Rng::new(),
            options: Options::default(),
        }
    }

    /// Replaces the options after validating them
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` if the options fail validation.
    pub fn with_options(mut self, options: Options) -> Result<Self, Error> {
        self.options = options.checked()?;
        Ok(self)
    }

    /// Replaces the generator used for shuffling the word list
    pub fn with_rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = rng;
        self
    }

    /// Returns the word list in its current order
    pub fn words(&self) -> &WordStore {
        &self.words
    }

    /// Returns the active options
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn seed_engine(&self) -> SeedEngine<&C> {
        SeedEngine::new(&self.clock, self.options.zero_score)
    }

    fn scorer(&self) -> WordScorer<&C> {
        WordScorer::new(&self.clock, self.options.zero_score)
    }

    /// Computes a seed from the current time
    ///
    /// # Errors
    ///
    /// See [`SeedEngine::time_seed`].
    pub fn time_seed(&self) -> Result<u64, Error> {
        self.seed_engine().time_seed()
    }

    /// Picks an index into the word list from a fresh seed
    ///
    /// The index is always below the word count.
    ///
    /// # Errors
    ///
    /// See [`SeedEngine::time_seed`].
    pub fn random_index(&self) -> Result<usize, Error> {
        self.seed_engine().random_index(self.words.len())
    }

    /// Scores `word` at `index` against the generator's clock
    ///
    /// # Errors
    ///
    /// See [`WordScorer::score`].
    pub fn ascii_reduce(&self, word: &str, index: u64) -> Result<u8, Error> {
        self.scorer().score(word, index)
    }

    /// Generates a number with at least `desired_size` significant digits
    ///
    /// The size is validated before the word list is touched, so a rejected
    /// request leaves the generator unchanged.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidArgument` - `desired_size` is not a positive integer
    /// * `Error::PaddingExhausted` - the clock stood still for more padding
    ///   rounds than the options allow
    /// * Any error of [`Generator::time_seed`] or [`Generator::ascii_reduce`]
    pub fn generate<S>(&mut self, desired_size: S) -> Result<Digits, Error>
    where
        S: TryInto<DesiredSize, Error = Error>,
    {
        self.generate_sized(desired_size.try_into()?)
    }

    /// Generates a number with at least `size` significant digits
    ///
    /// # Errors
    ///
    /// See [`Generator::generate`].
    pub fn generate_sized(&mut self, size: DesiredSize) -> Result<Digits, Error> {
        let size = size.get();
        log::debug!("generating a number of {size} digits");

        let mut accumulator = String::with_capacity(size);
        for _ in 0..size {
            self.words.shuffle(&mut self.rng);
            let index = self.random_index()?;
            let word = &self.words[index];
            let digit = self.ascii_reduce(word, index as u64)?;
            log::trace!("word {word:?} at {index} scored {digit}");
            accumulator.push(char::from(b'0' + digit));
        }

        // Rounds only count toward the bound while the clock stands still
        let mut rounds = 0;
        let mut stalled = 0;
        let mut last_ticks = self.clock.ticks();
        while significant_len(&accumulator) < size {
            if stalled == self.options.max_padding_rounds {
                log::warn!("padding stalled at {accumulator:?} after {stalled} rounds");
                return Err(Error::PaddingExhausted { rounds: stalled });
            }
            let padding = leading_digit(self.time_seed()? % PADDING_MODULUS);
            log::trace!("padding with {padding}");
            accumulator.push(padding);
            rounds += 1;

            let ticks = self.clock.ticks();
            if ticks == last_ticks {
                stalled += 1;
            } else {
                stalled = 0;
                last_ticks = ticks;
            }
        }

        let digits = Digits::from_accumulator(&accumulator);
        log::debug!("generated {digits} after {rounds} padding rounds");
        Ok(digits)
    }
}

/// A generator shared between threads
///
/// Each generation holds the lock for its whole duration, so the shuffle
/// and the read at the selected index are never interleaved with another
/// caller's shuffle.
#[derive(Debug)]
pub struct SharedGenerator<C = SystemClock> {
    inner: Mutex<Generator<C>>,
}

impl<C: Clock> SharedGenerator<C> {
    /// Wraps a generator for shared use
    pub fn new(generator: Generator<C>) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }

    /// Generates a number, see [`Generator::generate`]
    ///
    /// A lock poisoned by a panicking caller is recovered: the word list is
    /// always a complete permutation between shuffles.
    ///
    /// # Errors
    ///
    /// See [`Generator::generate`].
    pub fn generate<S>(&self, desired_size: S) -> Result<Digits, Error>
    where
        S: TryInto<DesiredSize, Error = Error>,
    {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generate(desired_size)
    }

    /// Returns the wrapped generator
    pub fn into_inner(self) -> Generator<C> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock> From<Generator<C>> for SharedGenerator<C> {
    fn from(generator: Generator<C>) -> Self {
        Self::new(generator)
    }
}
