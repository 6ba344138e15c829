//! Wraps generated reply text into a [`ChatResponse`].

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::message::{ChatResponse, Message, Role};

#[derive(Debug, Error)]
pub enum AssembleError {
    /// The system clock reported a time before the Unix epoch, so no
    /// millisecond id can be derived from it.
    #[error("system clock is before the Unix epoch ({0})")]
    ClockBeforeEpoch(DateTime<Utc>),
}

/// Build a successful envelope for `content`, stamped with the current time.
pub fn assemble(content: impl Into<String>) -> Result<ChatResponse, AssembleError> {
    assemble_at(content, Utc::now())
}

/// Same as [`assemble`] with an explicit clock reading.
///
/// The message id is the Unix timestamp of `now` in milliseconds, so two
/// replies produced in different milliseconds never share an id.
pub fn assemble_at(
    content: impl Into<String>,
    now: DateTime<Utc>,
) -> Result<ChatResponse, AssembleError> {
    let millis = u64::try_from(now.timestamp_millis())
        .map_err(|_| AssembleError::ClockBeforeEpoch(now))?;
    let message = Message::new(millis.to_string(), content, Role::Assistant, now);
    Ok(ChatResponse::success(message))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
