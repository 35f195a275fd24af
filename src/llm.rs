use serde::Serialize;
use reqwest::Client;
use crate::config::Config;
use crate::error::{Result, AppError};
use crate::prompt::{build_prompt, SYSTEM_INSTRUCTION};

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    response_format: ResponseFormat,
}

/// Thin client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.chat_completions_url(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Asks the model for the top keywords of `content` and returns the raw
    /// JSON text it produced.
    pub async fn extract_keywords(&self, content: &str) -> Result<String> {
        let prompt = build_prompt(content);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                Message {
                    role: "user",
                    content: &prompt,
                },
            ],
            response_format: ResponseFormat { kind: "json_object" },
        };

        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_else(|e| e.to_string());
            return Err(AppError::Provider(format!(
                "Error code: {} - {}",
                status.as_u16(),
                provider_error_message(&text)
            )));
        }

        let json: serde_json::Value = res.json().await?;
        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AppError::Provider("response did not contain message content".to_string()))?
            .trim()
            .to_string();

        Ok(reply)
    }
}

/// Pulls `error.message` out of a provider error body, falling back to the
/// raw text when the body isn't the usual shape.
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
