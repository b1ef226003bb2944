use std::time::Duration;

use futures::StreamExt;
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::Config,
    constants::prompts,
    errors::{AppError, AppResult},
};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Client for an Ollama-style `/api/generate` endpoint. The endpoint always
/// streams NDJSON chunks; this client accumulates the `response` field of
/// each chunk into the full completion.
pub struct LlmService {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl LlmService {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(config.llm_timeout_seconds))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.llm_url.clone(),
            model: config.llm_model.clone(),
        })
    }

    /// Sends a prompt and returns the concatenated completion text.
    ///
    /// Malformed stream chunks are skipped with a warning rather than
    /// failing the whole generation; transport and HTTP status failures
    /// surface as `AppError::LlmError`.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        log::info!("Sending LLM prompt ({} chars) to {}", prompt.len(), self.url);
        log::debug!(
            "Prompt preview: {}",
            prompt.chars().take(500).collect::<String>()
        );

        let payload = GenerateRequest {
            model: &self.model,
            prompt,
            stream: true,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::LlmError(format!("Failed to contact LLM service at {}: {}", self.url, e))
            })?
            .error_for_status()
            .map_err(|e| AppError::LlmError(format!("LLM service returned an error: {}", e)))?;

        let mut stream = response.bytes_stream();
        let mut buffer = String::new();
        let mut full_text = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| AppError::LlmError(format!("LLM stream error: {}", e)))?;
            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(newline) = buffer.find('\n') {
                let line = buffer[..newline].trim().to_string();
                buffer.drain(..=newline);
                append_chunk_response(&line, &mut full_text);
            }
        }

        // the final chunk is not always newline-terminated
        append_chunk_response(buffer.trim(), &mut full_text);

        Ok(full_text.trim().to_string())
    }

    /// Asks the model whether a user's answer to one question is correct,
    /// returning its free-text explanation.
    pub async fn evaluate_quiz_answer(
        &self,
        question: &str,
        options: &[String],
        answer: &str,
    ) -> AppResult<String> {
        let prompt = prompts::evaluate_answer_prompt(question, options, answer);
        self.generate(&prompt).await
    }
}

fn append_chunk_response(line: &str, full_text: &mut String) {
    if line.is_empty() {
        return;
    }
    match serde_json::from_str::<Value>(line) {
        Ok(value) => {
            if let Some(piece) = value.get("response").and_then(Value::as_str) {
                full_text.push_str(piece);
            }
        }
        Err(_) => {
            log::warn!(
                "Skipping invalid LLM stream chunk: {}",
                line.chars().take(100).collect::<String>()
            );
        }
    }
}
