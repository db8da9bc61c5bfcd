// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod game_state;
pub mod logging;
pub mod rules;
pub mod spelling;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use game_state::{GameInterface, GameSession, SessionView, Submission, UserAction, game_loop};
pub use rules::{Rejection, is_possible};
pub use spelling::{SpellChecker, WordListSpellChecker};
pub use wordbank::{
    DEFAULT_ROOT_WORD, WordListError, load_start_words_from_file, load_start_words_from_str,
    pick_root_word,
};
