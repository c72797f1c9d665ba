use anyhow::{bail, Result};

use studychat_api::{DEFAULT_MODEL, GEMINI_API_URL};

use crate::cli::Cli;

/// Persona sent with every request. Static for the whole session.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful high school teacher. \
    Answer only questions related to high school curriculum (Math, Physics, Biology, \
    History, Literature etc.). Keep answers concise and educational. If asked about \
    irrelevant topics (games, celebrities), politely decline.";

/// Pre-canned prompts shown while the conversation is still empty.
pub const SUGGESTIONS: &[&str] = &[
    "Explain Newton's second law with an example",
    "What caused the First World War?",
    "How does photosynthesis work?",
];

/// Configuration for the completion client, resolved at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub system_instruction: String,
    pub verbose: bool,
}

/// Resolve configuration from CLI arguments. clap already folds in the
/// environment (GEMINI_API_KEY, STUDYCHAT_*), so precedence is
/// CLI flag > env > built-in default.
pub fn setup_from_cli(cli: &Cli) -> Result<ClientConfig> {
    let Some(api_key) = cli.api_key.clone().filter(|k| !k.trim().is_empty()) else {
        bail!("No API key configured. Set GEMINI_API_KEY or pass --api-key.");
    };

    Ok(ClientConfig {
        api_key,
        api_url: cli
            .api_url
            .clone()
            .unwrap_or_else(|| GEMINI_API_URL.to_string()),
        model: cli.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        system_instruction: cli
            .system_instruction
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_INSTRUCTION.to_string()),
        verbose: cli.verbose,
    })
}
