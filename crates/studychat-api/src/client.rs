use async_trait::async_trait;
use colored::Colorize;

use studychat_logging::{log_request, log_request_to_file, log_response, log_response_to_file};
use studychat_models::{Content, GenerateRequest, GenerateResponse, SystemInstruction};

use crate::error::CompletionError;

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// One remote completion call: prior history plus a new user message in,
/// model text out. Implementations make exactly one outbound request per
/// invocation, with no retries.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        user_text: &str,
        history: &[Content],
    ) -> Result<String, CompletionError>;
}

/// Completion client for the Gemini `generateContent` API.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    system_instruction: Option<SystemInstruction>,
    client: reqwest::Client,
    verbose: bool,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        system_instruction: Option<String>,
        verbose: bool,
    ) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            api_key,
            model,
            base_url,
            system_instruction: system_instruction.map(SystemInstruction::new),
            client: reqwest::Client::new(),
            verbose,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(
        &self,
        user_text: &str,
        history: &[Content],
    ) -> Result<String, CompletionError> {
        let request = GenerateRequest::new(self.system_instruction.clone(), history, user_text);
        let url = self.generate_url();

        log_request(&url, &request, &self.api_key, self.verbose);
        // Log request to file for persistent debugging
        let request_timestamp = log_request_to_file(&url, &request, &self.model, &self.api_key)
            .unwrap_or_default();

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        log_response(&status, &headers, &body, self.verbose);
        let _ = log_response_to_file(&status, &headers, &body, request_timestamp, &self.model);

        if !status.is_success() {
            return Err(CompletionError::status(status, &body));
        }

        let generate_response: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::malformed(format!("invalid response body: {}", e)))?;

        if let Some(usage) = &generate_response.usage_metadata {
            println!(
                "{} Prompt: {} | Completion: {} | Total: {}",
                "tokens".bright_black(),
                usage.prompt_token_count.to_string().bright_black(),
                usage.candidates_token_count.to_string().bright_black(),
                usage.total_token_count.to_string().bright_black()
            );
        }

        generate_response
            .text()
            .ok_or_else(|| CompletionError::malformed("no text content in response"))
    }
}
