//! Session types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user state for one guess-the-number game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Whether a game is in progress
    pub active: bool,
    /// The number to guess; fixed for the session's lifetime
    pub secret: i64,
    /// Turns taken while this session was active
    pub attempts: u32,
    /// Session creation timestamp
    pub started_at: DateTime<Utc>,
}

impl GameSession {
    /// Create a new active session around a secret number
    pub fn new(secret: i64) -> Self {
        Self {
            active: true,
            secret,
            attempts: 0,
            started_at: Utc::now(),
        }
    }

    /// End the game, keeping the record around
    pub fn end(&mut self) {
        self.active = false;
    }
}
