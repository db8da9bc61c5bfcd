use crate::info_log;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");

/// Root word used when the candidate list has nothing to offer.
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

const CONFIG_DIR_NAME: &str = "word-scramble";
const START_WORDS_FILE: &str = "start.txt";

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.is_empty() { None } else { Some(word) }
}

pub fn load_start_words_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

pub fn load_start_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let io_err = |source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line.map_err(io_err)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Pick a root word uniformly at random, or [`DEFAULT_ROOT_WORD`] for an empty list.
pub fn pick_root_word<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> String {
    words
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| DEFAULT_ROOT_WORD.to_string())
}

/// Per-user start word list, e.g. `~/.config/word-scramble/start.txt` on Linux.
pub fn user_start_words_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(START_WORDS_FILE))
}

/// Resolve the start word list: an explicit path, then the per-user file, then the embedded list.
///
/// # Errors
///
/// Fails if the chosen file exists in configuration but cannot be read.
pub fn load_start_words(explicit: Option<&Path>) -> Result<Vec<String>, WordListError> {
    if let Some(path) = explicit {
        return load_start_words_from_file(path);
    }
    if let Some(path) = user_start_words_path()
        && path.is_file()
    {
        info_log!("Loading start words from {}", path.display());
        return load_start_words_from_file(path);
    }
    Ok(load_start_words_from_str(EMBEDDED_START_WORDS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    #[test]
    fn test_load_from_str_normalizes() {
        let words = load_start_words_from_str("Silkworm\n  ANTELOPE \n\n\nbaseball\n");
        assert_eq!(words, vec!["silkworm", "antelope", "baseball"]);
    }

    #[test]
    fn test_load_from_str_handles_crlf() {
        let words = load_start_words_from_str("alphabet\r\nbackward\r\n");
        assert_eq!(words, vec!["alphabet", "backward"]);
    }

    #[test]
    fn test_embedded_start_words_not_empty() {
        let words = load_start_words_from_str(EMBEDDED_START_WORDS);
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_lowercase())));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("word_scramble_wordbank_test.txt");
        fs::write(&path, "Marshmallow\nnotebook\n").unwrap();

        let words = load_start_words_from_file(&path).unwrap();
        assert_eq!(words, vec!["marshmallow", "notebook"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let path = std::env::temp_dir().join("word_scramble_does_not_exist.txt");
        let _ = fs::remove_file(&path);

        let err = load_start_words_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("word_scramble_does_not_exist.txt"));
    }

    #[test]
    fn test_load_start_words_explicit_path_wins() {
        let path = std::env::temp_dir().join("word_scramble_explicit_start.txt");
        fs::write(&path, "waterfall\n").unwrap();

        let words = load_start_words(Some(path.as_path())).unwrap();
        assert_eq!(words, vec!["waterfall"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_start_words_explicit_missing_is_fatal() {
        let path = std::env::temp_dir().join("word_scramble_explicit_missing.txt");
        let _ = fs::remove_file(&path);
        assert!(load_start_words(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_pick_root_word_from_list() {
        let words = vec!["alpha".to_string(), "bravo".to_string(), "charlie".to_string()];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let root = pick_root_word(&words, &mut rng);
            assert!(words.contains(&root));
        }
    }

    #[test]
    fn test_pick_root_word_empty_list_falls_back() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_root_word(&[], &mut rng), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn test_user_start_words_path_file_name() {
        if let Some(path) = user_start_words_path() {
            assert!(path.ends_with("word-scramble/start.txt"));
        }
    }
}
