use std::io;
use std::process;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::game_state::{GameSession, game_loop};
use word_scramble::logging;
use word_scramble::spelling::{ENGLISH, WordListSpellChecker};
use word_scramble::tui::TuiInterface;
use word_scramble::wordbank::load_start_words;

fn main() {
    let cli = parse_cli();
    if let Err(e) = logging::init(&logging::log_target(cli.log_file.as_deref(), !cli.plain)) {
        eprintln!("Failed to open log file: {e}");
        process::exit(1);
    }

    // Without a word list the game cannot start.
    let start_words = match load_start_words(cli.start_words_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    let checker = match &cli.dictionary_path {
        Some(path) => match WordListSpellChecker::from_file(path, ENGLISH) {
            Ok(checker) => checker,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        None => WordListSpellChecker::embedded(),
    };
    log::info!(
        "Loaded {} start words and {} dictionary words",
        start_words.len(),
        checker.len()
    );

    let mut session = match cli.seed {
        Some(seed) => GameSession::with_seed(start_words, checker, seed),
        None => GameSession::new(start_words, checker),
    };

    if cli.plain {
        game_loop(&mut session, CliInterface::new(io::stdin().lock()));
    } else {
        match TuiInterface::new() {
            // The interface is dropped, restoring the terminal, when the loop returns
            Ok(interface) => game_loop(&mut session, interface),
            Err(e) => {
                eprintln!("Failed to initialize terminal: {e}");
                process::exit(1);
            }
        }
    }

    println!("Final score: {}", session.score());
}
