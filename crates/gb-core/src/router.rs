//! Dialogue routing
//!
//! The sole entry point for a turn: resolves a reply by consulting, in
//! priority order, the special commands, the active game session, the
//! knowledge base and the keyword fallback, then picks the quick-reply
//! set for the resulting state.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::fallback;
use crate::game::GameEngine;
use crate::knowledge::KnowledgeBase;
use crate::reply::Reply;
use crate::session::InMemorySessionStore;

/// Command that starts a new game, matched case-insensitively
const PLAY_COMMAND: &str = "играть";
/// Command that prints the help text, matched case-insensitively
const HELP_COMMAND: &str = "помощь";

const HELP_TEXT: &str = "Я могу ответить на ваши вопросы или сыграть с вами в игру \
                         'Угадай число'. Просто скажите 'играть'.";

/// Substring that marks a reply as game-related for suggestion purposes
const GAME_HINT: &str = "игра";

// Quick-reply labels
const QUICK_PLAY: &str = "Играть";
const QUICK_EXIT: &str = "Выход";
const QUICK_HELP: &str = "Помощь";
const QUICK_GREET: &str = "Привет";
const QUICK_BYE: &str = "Пока";
const QUICK_NO: &str = "Нет";
/// Numeric anchors offered while a game is running
const QUICK_GUESSES: [&str; 3] = ["50", "25", "75"];

/// Routes each incoming turn to the right responder
pub struct DialogueRouter {
    sessions: Arc<InMemorySessionStore>,
    engine: GameEngine,
    knowledge: Arc<dyn KnowledgeBase>,
    /// Per-user turn locks; a whole turn holds the lock so that the
    /// session read-modify-write cannot interleave between two requests
    /// for the same user. Different users take different locks.
    turn_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl DialogueRouter {
    /// Create a new router
    pub fn new(
        sessions: Arc<InMemorySessionStore>,
        engine: GameEngine,
        knowledge: Arc<dyn KnowledgeBase>,
    ) -> Self {
        Self {
            sessions,
            engine,
            knowledge,
            turn_locks: DashMap::new(),
        }
    }

    /// Resolve one turn for a user. Never fails: every input, however
    /// malformed, yields a textual reply.
    pub async fn handle(&self, user_id: &str, message: &str) -> Reply {
        let lock = self.turn_lock(user_id);
        let _guard = lock.lock().await;

        let trimmed = message.trim();
        let command = trimmed.to_lowercase();

        let (text, quick_replies) = if command == PLAY_COMMAND {
            let text = self.engine.start(user_id);
            (text, labels(&[QUICK_EXIT]))
        } else if command == HELP_COMMAND {
            (
                HELP_TEXT.to_string(),
                labels(&[QUICK_PLAY, QUICK_GREET, QUICK_BYE]),
            )
        } else {
            let text = match self.engine.evaluate_guess(user_id, trimmed) {
                Some(outcome) => outcome.text(),
                None => self.answer(trimmed).await,
            };
            let quick_replies = self.suggestions_for(user_id, &text);
            (text, quick_replies)
        };

        // One turn, one attempt, as long as a game is (still) running --
        // including the start turn and turns whose guess did not parse.
        if self.sessions.is_in_game(user_id) {
            self.sessions.increment_attempts(user_id);
        }

        Reply::new(text, quick_replies)
    }

    /// Answer a non-game message: knowledge base first, fallback second
    async fn answer(&self, message: &str) -> String {
        let matched = self.knowledge.respond(message).await;
        if matched.trim().is_empty() {
            debug!("No knowledge-base match, using fallback responder");
            fallback::respond(message)
        } else {
            matched
        }
    }

    /// Pick the quick-reply set from the post-turn state: numeric anchors
    /// while a game is running, otherwise keyed off the reply text.
    fn suggestions_for(&self, user_id: &str, text: &str) -> Vec<String> {
        if self.sessions.is_in_game(user_id) {
            let mut suggestions = labels(&QUICK_GUESSES);
            suggestions.push(QUICK_EXIT.to_string());
            suggestions
        } else if text.to_lowercase().contains(GAME_HINT) {
            labels(&[QUICK_PLAY, QUICK_NO, QUICK_HELP])
        } else {
            labels(&[QUICK_PLAY, QUICK_HELP, QUICK_BYE])
        }
    }

    /// Get or create the turn lock for a user
    fn turn_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.turn_locks
            .entry(user_id.to_string())
            .or_default()
            .clone()
    }
}

fn labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|l| l.to_string()).collect()
}
