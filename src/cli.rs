use crate::game_state::{GameInterface, SessionView, UserAction};
use crate::rules::Rejection;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Word Scramble CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub start_words_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary used to recognize words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Use the plain line interface instead of the full-screen TUI
    #[arg(long)]
    pub plain: bool,

    /// Seed for picking root words, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum WordInput {
    Word(String),
    NewWord,
    Exit,
}

/// Commands are matched case-insensitively; anything else is a word attempt.
fn parse_input(line: &str) -> WordInput {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        ":quit" | "exit" => WordInput::Exit,
        ":new" | "next" => WordInput::NewWord,
        _ => WordInput::Word(trimmed.to_string()),
    }
}

pub fn read_word<R: BufRead>(reader: &mut R) -> WordInput {
    println!("\nEnter a word (':new' for a new root word, ':quit' to exit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => WordInput::Exit,
        Ok(_) => parse_input(&input),
    }
}

pub fn display_new_game(view: &SessionView) {
    println!("Your word is: {}", view.root_word);
    println!("Score: {}", view.score);
}

pub fn display_used_words(used_words: &[String]) {
    for word in used_words {
        println!("  {word} ({})", word.chars().count());
    }
}

pub fn display_accepted(view: &SessionView, word: &str, points: usize) {
    println!("Accepted '{word}' (+{points}). Score: {}", view.score);
    display_used_words(view.used_words);
}

pub fn display_rejection(rejection: Rejection, root_word: &str) {
    println!("{}: {}", rejection.title(), rejection.message(root_word));
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait
/// This struct wraps a `BufRead` reader and implements the game interface for line-based play
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        match read_word(&mut self.reader) {
            WordInput::Word(word) => Some(UserAction::Submit(word)),
            WordInput::NewWord => Some(UserAction::ChangeWord),
            WordInput::Exit => Some(UserAction::Exit),
        }
    }

    fn display_new_game(&mut self, view: &SessionView) {
        display_new_game(view);
    }

    fn display_accepted(&mut self, view: &SessionView, word: &str, points: usize) {
        display_accepted(view, word, points);
    }

    fn display_rejection(&mut self, rejection: Rejection, root_word: &str) {
        display_rejection(rejection, root_word);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
