//! Guess-the-number game engine
//!
//! State machine per user: no game -> playing -> no game. Transitions are
//! driven by `start` and `evaluate_guess`; the session itself lives in the
//! shared store.

use std::cmp::Ordering;
use std::sync::Arc;

use rand::Rng;
use tracing::info;

use crate::session::{GameSession, InMemorySessionStore};

/// Lower bound of the secret number range (inclusive)
pub const SECRET_MIN: i64 = 1;
/// Upper bound of the secret number range (inclusive)
pub const SECRET_MAX: i64 = 100;

/// Keywords that end the current game, matched case-insensitively
const EXIT_KEYWORDS: [&str; 3] = ["выход", "exit", "закончить"];

/// Outcome of evaluating one in-game turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess below the secret; game continues
    TooLow,
    /// Guess above the secret; game continues
    TooHigh,
    /// Guess matched the secret; game over
    Win { guess: i64, attempts: u32 },
    /// Player used an exit keyword; game over, secret revealed
    Quit { secret: i64 },
    /// Input was neither a number nor an exit keyword; game continues
    Invalid,
}

impl GuessOutcome {
    /// User-facing reply text for this outcome
    pub fn text(&self) -> String {
        match self {
            GuessOutcome::TooLow => "Мое число больше! Попробуйте еще раз.".to_string(),
            GuessOutcome::TooHigh => "Мое число меньше! Попробуйте еще раз.".to_string(),
            GuessOutcome::Win { guess, attempts } => format!(
                "Поздравляю! Вы угадали число {} за {} попыток. Хотите сыграть еще?",
                guess, attempts
            ),
            GuessOutcome::Quit { secret } => format!(
                "Игра завершена. Число было: {}. Чем еще могу помочь?",
                secret
            ),
            GuessOutcome::Invalid => {
                "Пожалуйста, введите число от 1 до 100 или 'выход' для завершения игры."
                    .to_string()
            }
        }
    }
}

/// Game engine operating on the shared session store
pub struct GameEngine {
    sessions: Arc<InMemorySessionStore>,
}

impl GameEngine {
    /// Create a new engine over a session store
    pub fn new(sessions: Arc<InMemorySessionStore>) -> Self {
        Self { sessions }
    }

    /// Start a new game for the user and return the announcement text.
    ///
    /// Any game already in progress for this user is discarded silently.
    pub fn start(&self, user_id: &str) -> String {
        self.start_with_rng(user_id, &mut rand::thread_rng())
    }

    /// Start a new game with a specific RNG (useful for testing)
    pub fn start_with_rng<R: Rng>(&self, user_id: &str, rng: &mut R) -> String {
        let secret = rng.gen_range(SECRET_MIN..=SECRET_MAX);
        self.sessions.insert(user_id, GameSession::new(secret));
        info!("Started new game for user: {}", user_id);

        "Я загадал число от 1 до 100. Попробуйте угадать!".to_string()
    }

    /// Evaluate one in-game turn for the user.
    ///
    /// Returns `None` when the user has no active game. Attempt counting is
    /// not done here; the router bumps the counter once per in-game turn
    /// whether or not the input parsed.
    pub fn evaluate_guess(&self, user_id: &str, raw_input: &str) -> Option<GuessOutcome> {
        let session = self.sessions.get(user_id).filter(|s| s.active)?;

        let input = raw_input.trim();
        let lowered = input.to_lowercase();
        if EXIT_KEYWORDS.contains(&lowered.as_str()) {
            self.sessions.end_game(user_id);
            return Some(GuessOutcome::Quit {
                secret: session.secret,
            });
        }

        let Ok(guess) = input.parse::<i64>() else {
            return Some(GuessOutcome::Invalid);
        };

        // Out-of-range guesses are accepted and compared like any other;
        // no range validation.
        match guess.cmp(&session.secret) {
            Ordering::Less => Some(GuessOutcome::TooLow),
            Ordering::Greater => Some(GuessOutcome::TooHigh),
            Ordering::Equal => {
                self.sessions.end_game(user_id);
                Some(GuessOutcome::Win {
                    guess,
                    attempts: session.attempts,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn engine() -> (Arc<InMemorySessionStore>, GameEngine) {
        let store = Arc::new(InMemorySessionStore::new());
        let engine = GameEngine::new(Arc::clone(&store));
        (store, engine)
    }

    #[test]
    fn test_start_creates_session_in_range() {
        let (store, engine) = engine();
        let text = engine.start("u1");

        let session = store.get("u1").unwrap();
        assert!(session.active);
        assert!((SECRET_MIN..=SECRET_MAX).contains(&session.secret));
        assert_eq!(session.attempts, 0);
        assert!(text.contains("от 1 до 100"));
    }

    #[test]
    fn test_start_with_rng_is_deterministic() {
        let (store, engine) = engine();
        engine.start_with_rng("u1", &mut StepRng::new(7, 0));
        engine.start_with_rng("u2", &mut StepRng::new(7, 0));

        assert_eq!(
            store.get("u1").unwrap().secret,
            store.get("u2").unwrap().secret
        );
    }

    #[test]
    fn test_start_discards_previous_game() {
        let (store, engine) = engine();
        store.insert("u1", GameSession::new(42));
        store.increment_attempts("u1");

        engine.start("u1");
        assert_eq!(store.get("u1").unwrap().attempts, 0);
    }

    #[test]
    fn test_no_session_yields_none() {
        let (_store, engine) = engine();
        assert!(engine.evaluate_guess("u1", "50").is_none());
    }

    #[test]
    fn test_ended_session_yields_none() {
        let (store, engine) = engine();
        store.insert("u1", GameSession::new(42));
        store.end_game("u1");
        assert!(engine.evaluate_guess("u1", "50").is_none());
    }

    #[test]
    fn test_low_and_high_feedback() {
        let (store, engine) = engine();
        store.insert("u1", GameSession::new(42));

        assert_eq!(engine.evaluate_guess("u1", "10"), Some(GuessOutcome::TooLow));
        assert_eq!(engine.evaluate_guess("u1", "90"), Some(GuessOutcome::TooHigh));
        assert!(store.is_in_game("u1"));
    }

    #[test]
    fn test_repeated_guess_is_stable() {
        let (store, engine) = engine();
        store.insert("u1", GameSession::new(42));

        assert_eq!(engine.evaluate_guess("u1", "10"), Some(GuessOutcome::TooLow));
        assert_eq!(engine.evaluate_guess("u1", "10"), Some(GuessOutcome::TooLow));
        assert_eq!(store.get("u1").unwrap().secret, 42);
    }

    #[test]
    fn test_out_of_range_guesses_are_compared() {
        let (store, engine) = engine();
        store.insert("u1", GameSession::new(42));

        assert_eq!(engine.evaluate_guess("u1", "0"), Some(GuessOutcome::TooLow));
        assert_eq!(
            engine.evaluate_guess("u1", "101"),
            Some(GuessOutcome::TooHigh)
        );
        assert_eq!(
            engine.evaluate_guess("u1", "-5"),
            Some(GuessOutcome::TooLow)
        );
    }

    #[test]
    fn test_win_ends_game_and_reports_attempts() {
        let (store, engine) = engine();
        store.insert("u1", GameSession::new(42));
        store.increment_attempts("u1");
        store.increment_attempts("u1");

        let outcome = engine.evaluate_guess("u1", "42").unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::Win {
                guess: 42,
                attempts: 2
            }
        );
        assert!(!store.is_in_game("u1"));
        assert!(outcome.text().contains("за 2 попыток"));
    }

    #[test]
    fn test_exit_keyword_reveals_secret() {
        let (store, engine) = engine();
        store.insert("u1", GameSession::new(42));

        let outcome = engine.evaluate_guess("u1", "выход").unwrap();
        assert_eq!(outcome, GuessOutcome::Quit { secret: 42 });
        assert!(!store.is_in_game("u1"));
        assert!(outcome.text().contains("42"));
    }

    #[test]
    fn test_exit_keywords_are_case_insensitive() {
        let (store, engine) = engine();
        store.insert("u1", GameSession::new(42));
        assert_eq!(
            engine.evaluate_guess("u1", "Выход"),
            Some(GuessOutcome::Quit { secret: 42 })
        );

        store.insert("u1", GameSession::new(42));
        assert_eq!(
            engine.evaluate_guess("u1", "EXIT"),
            Some(GuessOutcome::Quit { secret: 42 })
        );
    }

    #[test]
    fn test_unparseable_input_keeps_state() {
        let (store, engine) = engine();
        store.insert("u1", GameSession::new(42));

        assert_eq!(
            engine.evaluate_guess("u1", "сорок два"),
            Some(GuessOutcome::Invalid)
        );
        let session = store.get("u1").unwrap();
        assert!(session.active);
        assert_eq!(session.attempts, 0);
    }

    #[test]
    fn test_guess_input_is_trimmed() {
        let (store, engine) = engine();
        store.insert("u1", GameSession::new(42));
        assert_eq!(
            engine.evaluate_guess("u1", "  42  "),
            Some(GuessOutcome::Win {
                guess: 42,
                attempts: 0
            })
        );
    }
}
