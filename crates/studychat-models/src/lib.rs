// Models module - data structures for conversation state and API communication
pub mod requests;
pub mod responses;
pub mod types;

// Re-export commonly used types
pub use requests::{Content, GenerateRequest, Part, SystemInstruction};
pub use responses::{Candidate, GenerateResponse, UsageMetadata};
pub use types::{Role, Turn};
