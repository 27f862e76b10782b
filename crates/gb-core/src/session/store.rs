//! In-memory session storage
//!
//! Thread-safe session storage using DashMap. Different users land on
//! different shards, so they never contend on a single lock; serializing
//! whole turns for the same user is the router's responsibility.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::session::GameSession;

/// In-memory game session store keyed by user identifier
///
/// A missing key behaves as "no active game"; none of the operations can
/// fail.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<DashMap<String, GameSession>>,
}

impl InMemorySessionStore {
    /// Create a new session store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Get a snapshot of a user's session if one exists
    pub fn get(&self, user_id: &str) -> Option<GameSession> {
        self.sessions.get(user_id).map(|s| s.clone())
    }

    /// Insert or overwrite a user's session
    pub fn insert(&self, user_id: &str, session: GameSession) {
        self.sessions.insert(user_id.to_string(), session);
    }

    /// Whether the user currently has an active game
    pub fn is_in_game(&self, user_id: &str) -> bool {
        self.sessions
            .get(user_id)
            .map(|s| s.active)
            .unwrap_or(false)
    }

    /// End a user's game, retaining the record. Returns false if the user
    /// has no session at all.
    pub fn end_game(&self, user_id: &str) -> bool {
        if let Some(mut session) = self.sessions.get_mut(user_id) {
            session.end();
            debug!("Ended game for user: {}", user_id);
            true
        } else {
            false
        }
    }

    /// Bump the attempt counter for a user's session
    pub fn increment_attempts(&self, user_id: &str) {
        if let Some(mut session) = self.sessions.get_mut(user_id) {
            session.attempts += 1;
        }
    }

    /// Remove a session entirely
    pub fn remove(&self, user_id: &str) -> Option<GameSession> {
        self.sessions.remove(user_id).map(|(_, s)| s)
    }

    /// Get session count
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
