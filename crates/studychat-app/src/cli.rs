use clap::Parser;

/// CLI arguments for studychat
#[derive(Parser)]
#[command(name = "studychat")]
#[command(about = "Study Chat - terminal tutor chat backed by a hosted completion API")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// API key for the completion API
    #[arg(long, value_name = "KEY", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the completion API (e.g. for a local proxy)
    #[arg(long, value_name = "URL", env = "STUDYCHAT_API_URL")]
    pub api_url: Option<String>,

    /// Override the model name
    #[arg(long, value_name = "MODEL", env = "STUDYCHAT_MODEL")]
    pub model: Option<String>,

    /// Override the system instruction (tutor persona)
    #[arg(long, value_name = "TEXT", env = "STUDYCHAT_SYSTEM_INSTRUCTION")]
    pub system_instruction: Option<String>,

    /// Enable verbose debug output (shows HTTP requests, responses, headers, etc.)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
