//! Validation rules for submitted words.
//!
//! Everything here is a pure function over borrowed state, so the session and
//! both front ends share the exact same checks and rejection wording.

use crate::spelling::{ENGLISH, SpellChecker};
use thiserror::Error;

pub const MIN_WORD_LENGTH: usize = 3;

/// Why a submitted word was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("word is too short")]
    TooShort,
    #[error("cannot reuse the root word")]
    IsRootWord,
    #[error("word is not original")]
    NotOriginal,
    #[error("word cannot be spelled from the root word")]
    NotPossible,
    #[error("word is not recognized")]
    NotReal,
}

impl Rejection {
    /// Alert title shown to the player.
    pub fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Too short",
            Self::IsRootWord => "Cannot use the word",
            Self::NotOriginal => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
        }
    }

    /// Alert body shown to the player.
    pub fn message(self, root: &str) -> String {
        match self {
            Self::TooShort => format!("Words must be at least {MIN_WORD_LENGTH} letters long"),
            Self::IsRootWord => format!("Please enter a word other than '{root}'"),
            Self::NotOriginal => "Be more original".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root}'!"),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
        }
    }
}

/// Lowercase and trim raw player input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True if every char of `word` can be taken from a distinct position of `root`.
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();
    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

pub fn is_real<S: SpellChecker + ?Sized>(word: &str, checker: &S) -> bool {
    checker.check_spelling(word, ENGLISH)
}

/// Run a normalized, non-empty candidate through every check in order.
///
/// Spellability is checked before the dictionary lookup.
pub fn validate<S: SpellChecker + ?Sized>(
    candidate: &str,
    root: &str,
    used_words: &[String],
    checker: &S,
) -> Result<(), Rejection> {
    if candidate.chars().count() < MIN_WORD_LENGTH {
        return Err(Rejection::TooShort);
    }
    if candidate == root {
        return Err(Rejection::IsRootWord);
    }
    if !is_original(candidate, used_words) {
        return Err(Rejection::NotOriginal);
    }
    if !is_possible(candidate, root) {
        return Err(Rejection::NotPossible);
    }
    if !is_real(candidate, checker) {
        return Err(Rejection::NotReal);
    }
    Ok(())
}
