//! gb-core: Guess Bot Gateway Core Library
//!
//! Core logic for the conversational bot: per-user game sessions, the
//! guess-the-number engine, the knowledge-base capability, the keyword
//! fallback responder and the dialogue router that ties them together.

pub mod config;
pub mod error;
pub mod fallback;
pub mod game;
pub mod knowledge;
pub mod reply;
pub mod router;
pub mod session;

pub use config::{ApiConfig, Config};
pub use error::{Error, Result};
pub use game::{GameEngine, GuessOutcome, SECRET_MAX, SECRET_MIN};
pub use knowledge::{KnowledgeBase, NullKnowledgeBase};
pub use reply::Reply;
pub use router::DialogueRouter;
pub use session::{GameSession, InMemorySessionStore};
