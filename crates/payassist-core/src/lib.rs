//! # payassist-core
//!
//! Domain logic for the Smart Payment Assistant: the chat message model,
//! the keyword responder and the response assembler. Nothing here touches
//! I/O, so the HTTP layer can call it from any task.

pub mod assemble;
pub mod message;
pub mod responder;

pub use assemble::{assemble, assemble_at, AssembleError};
pub use message::{ChatResponse, Message, ResponseStatus, Role};
pub use responder::{classify, generate, Category};
