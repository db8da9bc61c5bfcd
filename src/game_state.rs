use crate::rules::{self, Rejection};
use crate::spelling::SpellChecker;
use crate::wordbank::pick_root_word;
use crate::{debug_log, info_log};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Outcome of a submission that was not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted { word: String, points: usize },
    /// Input was empty after trimming.
    Ignored,
}

/// Read-only snapshot of the session for rendering.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub root_word: &'a str,
    pub score: usize,
    pub used_words: &'a [String],
}

/// One player's round: root word, score and the words accepted so far.
pub struct GameSession<S: SpellChecker> {
    start_words: Vec<String>,
    checker: S,
    rng: StdRng,
    root_word: String,
    score: usize,
    used_words: Vec<String>,
    active: bool,
}

impl<S: SpellChecker> GameSession<S> {
    pub fn new(start_words: Vec<String>, checker: S) -> Self {
        Self::with_rng(start_words, checker, StdRng::from_os_rng())
    }

    /// Session whose root words are reproducible for a given seed.
    pub fn with_seed(start_words: Vec<String>, checker: S, seed: u64) -> Self {
        Self::with_rng(start_words, checker, StdRng::seed_from_u64(seed))
    }

    fn with_rng(start_words: Vec<String>, checker: S, rng: StdRng) -> Self {
        Self {
            start_words,
            checker,
            rng,
            root_word: String::new(),
            score: 0,
            used_words: Vec::new(),
            active: false,
        }
    }

    /// Draw a fresh root word and reset score and used words.
    pub fn start_game(&mut self) {
        self.root_word = pick_root_word(&self.start_words, &mut self.rng);
        self.score = 0;
        self.used_words.clear();
        self.active = true;
        info_log!("start_game() - New root word: '{}'", self.root_word);
    }

    /// Validate `raw` and commit it on success.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] hit; the session is left unchanged.
    pub fn submit_word(&mut self, raw: &str) -> Result<Submission, Rejection> {
        let candidate = rules::normalize(raw);
        if candidate.is_empty() {
            debug_log!("submit_word() - Ignoring empty input");
            return Ok(Submission::Ignored);
        }

        if let Err(rejection) =
            rules::validate(&candidate, &self.root_word, &self.used_words, &self.checker)
        {
            debug_log!("submit_word() - Rejected '{}': {}", candidate, rejection);
            return Err(rejection);
        }

        let points = candidate.chars().count();
        self.used_words.insert(0, candidate.clone());
        self.score += points;
        info_log!(
            "submit_word() - Accepted '{}' for {} points, score now {}",
            candidate,
            points,
            self.score
        );
        Ok(Submission::Accepted {
            word: candidate,
            points,
        })
    }

    pub fn is_possible(&self, word: &str) -> bool {
        rules::is_possible(word, &self.root_word)
    }

    pub fn is_original(&self, word: &str) -> bool {
        rules::is_original(word, &self.used_words)
    }

    pub fn is_real(&self, word: &str) -> bool {
        rules::is_real(word, &self.checker)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            root_word: &self.root_word,
            score: self.score,
            used_words: &self.used_words,
        }
    }
}

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    ChangeWord,
    Exit,
}

/// Presentation side of the game loop.
///
/// Implemented by the line-oriented `CliInterface` and the ratatui `TuiInterface`.
pub trait GameInterface {
    /// Next player action, or `None` when nothing usable was entered.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_new_game(&mut self, view: &SessionView);
    fn display_accepted(&mut self, view: &SessionView, word: &str, points: usize);
    fn display_rejection(&mut self, rejection: Rejection, root_word: &str);
    fn display_exit_message(&mut self);
}

impl<T: GameInterface + ?Sized> GameInterface for &mut T {
    fn read_action(&mut self) -> Option<UserAction> {
        (**self).read_action()
    }

    fn display_new_game(&mut self, view: &SessionView) {
        (**self).display_new_game(view);
    }

    fn display_accepted(&mut self, view: &SessionView, word: &str, points: usize) {
        (**self).display_accepted(view, word, points);
    }

    fn display_rejection(&mut self, rejection: Rejection, root_word: &str) {
        (**self).display_rejection(rejection, root_word);
    }

    fn display_exit_message(&mut self) {
        (**self).display_exit_message();
    }
}

/// Drive `session` from the actions `interface` produces until the player exits.
pub fn game_loop<S: SpellChecker, I: GameInterface>(session: &mut GameSession<S>, mut interface: I) {
    session.start_game();
    interface.display_new_game(&session.view());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::ChangeWord => {
                session.start_game();
                interface.display_new_game(&session.view());
            }
            UserAction::Submit(raw) => match session.submit_word(&raw) {
                Ok(Submission::Accepted { word, points }) => {
                    interface.display_accepted(&session.view(), &word, points);
                }
                Ok(Submission::Ignored) => {}
                Err(rejection) => {
                    interface.display_rejection(rejection, session.root_word());
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::{ENGLISH, WordListSpellChecker};

    fn checker() -> WordListSpellChecker {
        WordListSpellChecker::from_word_list("silk\nworm\nmilk\nsilo\nsoil\nworms\n", ENGLISH)
    }

    fn silkworm_session() -> GameSession<WordListSpellChecker> {
        let mut session = GameSession::with_seed(vec!["silkworm".to_string()], checker(), 1);
        session.start_game();
        session
    }

    /// Records every display call and replays scripted actions.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: Vec<Option<UserAction>>,
        new_games: Vec<String>,
        accepted: Vec<(String, usize, usize)>,
        rejections: Vec<Rejection>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into_iter().rev().collect(),
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop().unwrap_or(Some(UserAction::Exit))
        }

        fn display_new_game(&mut self, view: &SessionView) {
            self.new_games.push(view.root_word.to_string());
        }

        fn display_accepted(&mut self, view: &SessionView, word: &str, points: usize) {
            self.accepted.push((word.to_string(), points, view.score));
        }

        fn display_rejection(&mut self, rejection: Rejection, _root_word: &str) {
            self.rejections.push(rejection);
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(vec!["silkworm".to_string()], checker());
        assert!(!session.is_active());
        assert_eq!(session.root_word(), "");
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn test_start_game_activates() {
        let session = silkworm_session();
        assert!(session.is_active());
        assert_eq!(session.root_word(), "silkworm");
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_start_game_empty_list_uses_default() {
        let mut session = GameSession::with_seed(Vec::new(), checker(), 3);
        session.start_game();
        assert_eq!(session.root_word(), crate::wordbank::DEFAULT_ROOT_WORD);
    }

    #[test]
    fn test_silkworm_scenario() {
        let mut session = silkworm_session();

        assert_eq!(
            session.submit_word("silk"),
            Ok(Submission::Accepted {
                word: "silk".to_string(),
                points: 4
            })
        );
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words(), ["silk"]);

        assert_eq!(session.submit_word("silk"), Err(Rejection::NotOriginal));
        assert_eq!(session.score(), 4);

        assert_eq!(session.submit_word("si"), Err(Rejection::TooShort));
        assert_eq!(session.submit_word("silkworm"), Err(Rejection::IsRootWord));
        assert_eq!(session.submit_word("silks"), Err(Rejection::NotPossible));
        assert_eq!(session.submit_word("klis"), Err(Rejection::NotReal));

        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn test_submit_normalizes_input() {
        let mut session = silkworm_session();
        assert!(session.submit_word("  MILK \n").is_ok());
        assert_eq!(session.used_words(), ["milk"]);
        assert_eq!(session.submit_word("Milk"), Err(Rejection::NotOriginal));
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut session = silkworm_session();
        assert_eq!(session.submit_word("   "), Ok(Submission::Ignored));
        assert_eq!(session.submit_word(""), Ok(Submission::Ignored));
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn test_used_words_newest_first_and_score_sums() {
        let mut session = silkworm_session();
        for word in ["silk", "worm", "milk", "soil"] {
            assert!(session.submit_word(word).is_ok());
        }
        assert_eq!(session.used_words(), ["soil", "milk", "worm", "silk"]);
        assert_eq!(session.score(), 16);
    }

    #[test]
    fn test_start_game_resets_state() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();
        session.submit_word("worms").unwrap();
        assert_eq!(session.score(), 9);

        session.start_game();
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
        assert!(session.submit_word("silk").is_ok());
    }

    #[test]
    fn test_predicates() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();
        assert!(session.is_possible("worm"));
        assert!(!session.is_possible("mill"));
        assert!(!session.is_original("silk"));
        assert!(session.is_original("worm"));
        assert!(session.is_real("worm"));
        assert!(!session.is_real("klis"));
    }

    #[test]
    fn test_idle_session_rejects_as_not_possible() {
        let mut session = GameSession::with_seed(vec!["silkworm".to_string()], checker(), 1);
        assert_eq!(session.submit_word("silk"), Err(Rejection::NotPossible));
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let words: Vec<String> = ["alphabet", "baseball", "elephant", "notebook", "umbrella"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut a = GameSession::with_seed(words.clone(), checker(), 42);
        let mut b = GameSession::with_seed(words, checker(), 42);
        for _ in 0..5 {
            a.start_game();
            b.start_game();
            assert_eq!(a.root_word(), b.root_word());
        }
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut session = GameSession::with_seed(vec!["silkworm".to_string()], checker(), 1);
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        game_loop(&mut session, &mut interface);
        assert_eq!(interface.new_games, vec!["silkworm"]);
        assert!(interface.exited);
    }

    #[test]
    fn test_game_loop_submissions() {
        let mut session = GameSession::with_seed(vec!["silkworm".to_string()], checker(), 1);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Submit("silk".to_string())),
            None,
            Some(UserAction::Submit("silk".to_string())),
            Some(UserAction::Submit("   ".to_string())),
            Some(UserAction::Submit("worm".to_string())),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut session, &mut interface);

        assert_eq!(
            interface.accepted,
            vec![("silk".to_string(), 4, 4), ("worm".to_string(), 4, 8)]
        );
        assert_eq!(interface.rejections, vec![Rejection::NotOriginal]);
        assert_eq!(session.score(), 8);
    }

    #[test]
    fn test_game_loop_change_word_resets() {
        let mut session = GameSession::with_seed(vec!["silkworm".to_string()], checker(), 1);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Submit("silk".to_string())),
            Some(UserAction::ChangeWord),
            Some(UserAction::Submit("silk".to_string())),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut session, &mut interface);

        assert_eq!(interface.new_games.len(), 2);
        assert!(interface.rejections.is_empty());
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words(), ["silk"]);
    }
}
