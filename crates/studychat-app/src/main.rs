use anyhow::Result;
use clap::Parser;

// Local modules
mod cli;
mod config;
mod repl;

use cli::Cli;
use config::setup_from_cli;
use repl::run_repl;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = setup_from_cli(&cli)?;

    run_repl(config).await
}
