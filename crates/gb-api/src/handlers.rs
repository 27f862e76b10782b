//! HTTP API handlers
//!
//! Request handlers for the chat endpoint. The dialogue contract has no
//! failure modes, so the chat handler always answers 200 with a reply.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use gb_core::Reply;

use crate::server::AppState;

/// User identifier used when the client does not supply one
const DEFAULT_USER_ID: &str = "default_user";

/// Incoming chat message payload
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// User identifier for session continuity
    #[serde(default)]
    pub user_id: Option<String>,
    /// Message text
    pub message: String,
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Chat endpoint - resolve a reply for the user's message
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Json<Reply> {
    debug!("send_message request: {:?}", req);

    let user_id = req.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string());
    let reply = state.dialogue.handle(&user_id, req.message.trim()).await;

    Json(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use gb_core::{DialogueRouter, GameEngine, InMemorySessionStore, NullKnowledgeBase};

    fn test_state() -> AppState {
        let sessions = Arc::new(InMemorySessionStore::new());
        let engine = GameEngine::new(Arc::clone(&sessions));
        let dialogue = Arc::new(DialogueRouter::new(
            sessions,
            engine,
            Arc::new(NullKnowledgeBase),
        ));
        AppState { dialogue }
    }

    #[test]
    fn test_request_deserialization() {
        let json = r#"{"user_id":"u1","message":"привет"}"#;
        let req: SendMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_id.as_deref(), Some("u1"));
        assert_eq!(req.message, "привет");
    }

    #[test]
    fn test_request_without_user_id() {
        let json = r#"{"message":"привет"}"#;
        let req: SendMessageRequest = serde_json::from_str(json).unwrap();
        assert!(req.user_id.is_none());
    }

    #[tokio::test]
    async fn test_send_message_returns_reply() {
        let state = test_state();
        let req = SendMessageRequest {
            user_id: Some("u1".to_string()),
            message: "привет".to_string(),
        };

        let Json(reply) = send_message(State(state), Json(req)).await;
        assert_eq!(reply.text, "Привет! Как я могу вам помочь?");
        assert!(!reply.quick_replies.is_empty());
    }

    #[tokio::test]
    async fn test_missing_user_id_uses_default() {
        let state = test_state();
        let req = SendMessageRequest {
            user_id: None,
            message: "играть".to_string(),
        };

        let Json(reply) = send_message(State(state.clone()), Json(req)).await;
        assert_eq!(reply.quick_replies, vec!["Выход"]);

        // Follow-up without a user id lands in the same session
        let req = SendMessageRequest {
            user_id: None,
            message: "выход".to_string(),
        };
        let Json(reply) = send_message(State(state), Json(req)).await;
        assert!(reply.text.contains("Игра завершена"));
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(health().await, "OK");
    }
}
