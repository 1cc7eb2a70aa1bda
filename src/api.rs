//! Wire types for the backend chat exchange and classification of its
//! responses into a single outcome the event loop can apply.

use serde::{Deserialize, Serialize};

use crate::core::constants::{ERROR_REPLY, FALLBACK_REPLY};

#[derive(Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

/// Result of one send: the explicit success-with-payload /
/// failure-with-reason type awaited by the messaging controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// HTTP OK with a non-empty `reply` field.
    Reply(String),
    /// HTTP OK, parseable body, but the `reply` field is absent or empty.
    MissingReply,
    /// Non-OK status, connection error, or unparseable body.
    Failed,
}

impl ReplyOutcome {
    /// The text the bot bubble should carry for this outcome. Failure detail
    /// goes to the log, never to the transcript.
    pub fn bubble_text(self) -> String {
        match self {
            ReplyOutcome::Reply(text) => text,
            ReplyOutcome::MissingReply => FALLBACK_REPLY.to_string(),
            ReplyOutcome::Failed => ERROR_REPLY.to_string(),
        }
    }
}

/// Map an HTTP status + body pair onto an outcome.
pub fn classify_reply(status_ok: bool, body: &str) -> ReplyOutcome {
    if !status_ok {
        tracing::warn!(body, "chat endpoint returned a non-success status");
        return ReplyOutcome::Failed;
    }
    match serde_json::from_str::<ChatReply>(body) {
        Ok(ChatReply { reply: Some(text) }) if !text.is_empty() => ReplyOutcome::Reply(text),
        Ok(_) => {
            tracing::warn!("chat endpoint response carries no usable reply");
            ReplyOutcome::MissingReply
        }
        Err(err) => {
            tracing::warn!(%err, "failed to parse chat endpoint response");
            ReplyOutcome::Failed
        }
    }
}
