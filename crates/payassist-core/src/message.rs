//! Chat message model and response envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Outcome flag carried by the envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    #[default]
    Success,
    Error,
}

/// A single chat message. Built once per reply and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "1735689600000",
    "content": "Here are your transaction records",
    "role": "assistant",
    "createdAt": "2025-01-01T00:00:00Z"
}))]
pub struct Message {
    id: String,
    content: String,
    role: Role,
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            role,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Envelope returned by `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub message: Message,
    #[serde(default)]
    pub status: ResponseStatus,
}

impl ChatResponse {
    pub fn success(message: Message) -> Self {
        Self {
            message,
            status: ResponseStatus::Success,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn message_serializes_camel_case() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let msg = Message::new("1", "hi", Role::Assistant, at);
        let json = serde_json::to_value(ChatResponse::success(msg)).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["message"]["role"], "assistant");
        assert_eq!(json["message"]["createdAt"], "2025-01-01T00:00:00Z");
        assert!(json["message"].get("created_at").is_none());
    }

    #[test]
    fn missing_status_defaults_to_success() {
        let raw = r#"{"message":{"id":"7","content":"x","role":"user","createdAt":"2025-01-01T00:00:00Z"}}"#;
        let resp: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.status, ResponseStatus::Success);
        assert_eq!(resp.message.role(), Role::User);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let raw = r#"{"id":"7","content":"x","role":"system","createdAt":"2025-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<Message>(raw).is_err());
    }
}
