//! Knowledge base capability
//!
//! The pattern-matching responder is an external capability: text in, best
//! match out. Production wires a real engine behind the trait; tests wire
//! stubs with fixed answers.

use async_trait::async_trait;

/// Opaque pattern-matching responder
///
/// The query may be long-running (a remote engine, a large pattern set);
/// callers should budget for it.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Best-match reply for the message, or an empty string for "no match".
    ///
    /// Non-empty results are used verbatim, without validation.
    async fn respond(&self, message: &str) -> String;
}

/// Knowledge base that never matches.
///
/// Lets the gateway run standalone on the fallback responder alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullKnowledgeBase;

#[async_trait]
impl KnowledgeBase for NullKnowledgeBase {
    async fn respond(&self, _message: &str) -> String {
        String::new()
    }
}
