//! Word list storage
//!
//! A [`WordStore`] holds the ordered, non-empty list of words a generator
//! draws from. The list is shuffled in place on every generated digit but
//! its membership never changes after construction.

use std::{ops::Index, path::Path};

use itertools::Itertools;
use serde::Serialize;

use crate::error::Error;

/// The bundled English word list, one word per line
const ENGLISH: &str = include_str!("../words/english.txt");

/// An ordered, non-empty list of non-empty words
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordStore {
    words: Vec<String>,
}

impl WordStore {
    /// Creates a store from a list of words, keeping their order
    ///
    /// # Errors
    ///
    /// * `Error::EmptyWordList` - `words` is empty
    /// * `Error::EmptyWord` - one of the words is the empty string
    pub fn new(words: Vec<String>) -> Result<Self, Error> {
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        if let Some(position) = words.iter().position(String::is_empty) {
            return Err(Error::EmptyWord { position });
        }
        log::debug!("loaded word list with {} words", words.len());
        Ok(Self { words })
    }

    /// Creates a store from text holding one word per line
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWordList` if the text holds no words.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToOwned::to_owned)
                .collect_vec(),
        )
    }

    /// Reads a store from a file holding one word per line
    ///
    /// # Errors
    ///
    /// * `Error::WordListUnreadable` - the file could not be read
    /// * `Error::EmptyWordList` - the file holds no words
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::WordListUnreadable(format!("{}: {e}", path.display())))?;
        Self::from_text(&text)
    }

    /// Creates a store over the bundled English word list
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWordList` only if the bundled list is empty.
    pub fn english() -> Result<Self, Error> {
        Self::from_text(ENGLISH)
    }

    /// Returns the number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: a store cannot be constructed empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at `index` in the current order
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Iterates the words in their current order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Permutes the words in place, uniformly at random
    pub fn shuffle(&mut self, rng: &mut fastrand::Rng) {
        rng.shuffle(&mut self.words);
    }
}

impl Index<usize> for WordStore {
    type Output = str;

    /// Returns the word at `index` in the current order
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn store(words: &[&str]) -> WordStore {
        WordStore::new(words.iter().map(ToString::to_string).collect()).unwrap()
    }

    #[test]
    fn test_new_keeps_order() {
        let words = store(&["cat", "dog", "cow"]);
        assert_eq!(words.len(), 3);
        assert!(!words.is_empty());
        assert_eq!(words.iter().collect_vec(), ["cat", "dog", "cow"]);
        assert_eq!(words.get(1), Some("dog"));
        assert_eq!(words.get(3), None);
        assert_eq!(&words[2], "cow");
    }

    #[test]
    fn test_new_rejects_empty_list() {
        assert_eq!(WordStore::new(Vec::new()), Err(Error::EmptyWordList));
    }

    #[test]
    fn test_new_rejects_empty_word() {
        let result = WordStore::new(vec!["cat".to_string(), String::new()]);
        assert_eq!(result, Err(Error::EmptyWord { position: 1 }));
    }

    #[test]
    fn test_from_text_skips_blank_lines() {
        let words = WordStore::from_text("cat\n\n  dog  \r\n\t\ncow\n").unwrap();
        assert_eq!(words.iter().collect_vec(), ["cat", "dog", "cow"]);
    }

    #[test]
    fn test_from_text_blank_is_empty_list() {
        assert_eq!(WordStore::from_text("\n \n"), Err(Error::EmptyWordList));
    }

    #[test]
    fn test_english_is_non_empty() {
        let words = WordStore::english().unwrap();
        assert!(words.len() > 100);
        assert!(words.iter().all(|word| !word.is_empty()));
    }

    #[test]
    fn test_from_file_missing() {
        let result = WordStore::from_file("/definitely/not/a/word/list.txt");
        assert!(matches!(result, Err(Error::WordListUnreadable(_))));
    }

    #[test]
    fn test_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "random-algorithm-words-{}.txt",
            fastrand::u64(..)
        ));
        std::fs::write(&path, "alpha\nbeta\n").unwrap();
        let words = WordStore::from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(words.unwrap().iter().collect_vec(), ["alpha", "beta"]);
    }

    #[test]
    fn test_shuffle_preserves_membership() {
        let mut words = WordStore::english().unwrap();
        let before = words.iter().map(ToOwned::to_owned).sorted().collect_vec();

        let mut rng = fastrand::Rng::with_seed(42);
        words.shuffle(&mut rng);

        let after = words.iter().map(ToOwned::to_owned).sorted().collect_vec();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let mut first = store(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let mut second = first.clone();

        first.shuffle(&mut fastrand::Rng::with_seed(9));
        second.shuffle(&mut fastrand::Rng::with_seed(9));

        assert_eq!(first, second);
    }
}
