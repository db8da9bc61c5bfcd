//! Dictionary lookup behind a small trait so the game never depends on a
//! particular spell-checking backend.

use crate::wordbank::WordListError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Language tag the game asks the checker for.
pub const ENGLISH: &str = "en";

/// Answers whether a word is a recognized dictionary word in a language.
pub trait SpellChecker {
    fn check_spelling(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn check_spelling(&self, word: &str, language: &str) -> bool {
        (**self).check_spelling(word, language)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Box<T> {
    fn check_spelling(&self, word: &str, language: &str) -> bool {
        (**self).check_spelling(word, language)
    }
}

/// Spell checker backed by a newline-delimited word list for one language.
#[derive(Debug, Clone)]
pub struct WordListSpellChecker {
    language: String,
    words: HashSet<String>,
}

impl WordListSpellChecker {
    pub fn from_word_list(data: &str, language: &str) -> Self {
        let words = data
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            language: language.to_string(),
            words,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, language: &str) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_word_list(&data, language))
    }

    /// The bundled English dictionary.
    pub fn embedded() -> Self {
        Self::from_word_list(EMBEDDED_DICTIONARY, ENGLISH)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordListSpellChecker {
    fn check_spelling(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(&word.to_lowercase())
    }
}
