// Logging module - request/response debug logging
pub mod request_logger;

use std::path::PathBuf;

use anyhow::{Context, Result};

pub use request_logger::{log_request, log_request_to_file, log_response, log_response_to_file};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = if max_chars >= 3 { max_chars - 3 } else { 0 };
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base studychat directory (~/.studychat)
pub fn get_studychat_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let studychat_dir = PathBuf::from(home_dir).join(".studychat");

    if !studychat_dir.exists() {
        std::fs::create_dir_all(&studychat_dir)
            .context("Failed to create studychat directory")?;
    }

    Ok(studychat_dir)
}

/// Get or create the logs directory (~/.studychat/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_studychat_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir).context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}
