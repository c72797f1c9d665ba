//! Completion API client for studychat
//!
//! One request/response cycle per user submission: bounded history plus one
//! new message out, one text reply (or a single error kind) back.

mod client;
mod error;

pub use client::{CompletionClient, GeminiClient, DEFAULT_MODEL, GEMINI_API_URL};
pub use error::CompletionError;
