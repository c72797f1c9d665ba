use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use studychat_api::GeminiClient;
use studychat_chat::{ChatSession, SubmitOutcome};

use crate::config::{ClientConfig, SUGGESTIONS};

const PROMPT: &str = "you> ";

/// Run the interactive REPL loop.
pub async fn run_repl(config: ClientConfig) -> Result<()> {
    println!("{}", "Study Chat - ask your tutor anything".bright_cyan().bold());
    println!(
        "{}",
        format!("Model: {} @ {}", config.model, config.api_url).bright_black()
    );
    println!(
        "{}",
        "Type 'exit' or 'quit' to leave. While the conversation is empty, /1../3 prefill a suggestion.\n"
            .bright_black()
    );

    let client = GeminiClient::new(
        config.api_key,
        config.model,
        config.api_url,
        Some(config.system_instruction),
        config.verbose,
    );
    let mut session = ChatSession::new(client);
    let mut editor = DefaultEditor::new()?;

    loop {
        if session.conversation().is_empty() {
            print_suggestions();
        }

        // A prior /N shortcut prefills the next prompt
        let mut prefill: Option<&str> = None;

        let line = loop {
            let readline = match prefill.take() {
                Some(initial) => editor.readline_with_initial(PROMPT, (initial, "")),
                None => editor.readline(PROMPT),
            };

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed == "exit" || trimmed == "quit" {
                        println!("{}", "Bye!".bright_black());
                        return Ok(());
                    }
                    if session.conversation().is_empty() {
                        if let Some(suggestion) = parse_suggestion_shortcut(trimmed) {
                            prefill = Some(suggestion);
                            continue;
                        }
                    }
                    break line;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{}", "Bye!".bright_black());
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let _ = editor.add_history_entry(line.trim());

        println!("{}", "tutor is thinking...".bright_black().italic());
        match session.submit(&line).await {
            SubmitOutcome::Reply(reply) => {
                println!("{} {}\n", "tutor>".bright_green().bold(), reply);
            }
            SubmitOutcome::Failed => {
                // Fixed message; the raw failure went to the request logs
                let last = session
                    .conversation()
                    .turns()
                    .last()
                    .map(|t| t.text.clone())
                    .unwrap_or_default();
                println!("{} {}\n", "tutor>".red().bold(), last.red());
            }
            SubmitOutcome::Dropped => {}
        }
    }
}

fn print_suggestions() {
    println!("{}", "Suggestions on what to ask your tutor:".bright_black());
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        println!("  {} {}", format!("/{}", i + 1).bright_yellow(), suggestion);
    }
    println!();
}

fn parse_suggestion_shortcut(input: &str) -> Option<&'static str> {
    let index: usize = input.strip_prefix('/')?.parse().ok()?;
    SUGGESTIONS.get(index.checked_sub(1)?).copied()
}
