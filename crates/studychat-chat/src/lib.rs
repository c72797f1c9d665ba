//! Conversation management for studychat
//!
//! This crate owns the ordered turn list for the current session, derives the
//! bounded context window sent to the completion API, and runs the
//! one-request-in-flight submit cycle.

pub mod conversation;
pub mod session;

pub use conversation::{derive_context, Conversation, CONTEXT_WINDOW_TURNS};
pub use session::{ChatSession, SubmitOutcome, CONNECTION_ERROR_MESSAGE};

// Include test module
#[cfg(test)]
mod tests;
