use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::SuggestionClient;
use crate::config::Config;

/// Literal result for calls attempted without a credential. CI jobs grep
/// for this string, keep it stable.
pub const MISSING_KEY_ERROR: &str = "Error: PERPLEXITY_API_KEY not set.";

/// Minimal request/response structs for the Perplexity Chat Completions API.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Perplexity-based implementation of SuggestionClient.
pub struct PerplexityClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

impl PerplexityClient {
    /// Credential and endpoint come in as explicit config values; the
    /// client itself never reads the environment.
    pub fn new(cfg: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");

        PerplexityClient {
            client,
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
            api_base_url: cfg.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.api_base_url)
    }

    fn call_chat(&self, api_key: &str, prompt: &str, max_tokens: u32) -> Result<String> {
        let url = self.chat_url();

        log::info!("Calling Perplexity model {:?}", self.model);

        let req = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: prompt.to_string(),
            }],
            max_tokens,
        };

        let resp = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&req)
            .send()
            .context("failed to send request to Perplexity")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(anyhow!(
                "Perplexity API error: HTTP {} - {}",
                status.as_u16(),
                text
            ));
        }

        // Parse from the raw body so a shape mismatch can carry the body
        // along for diagnosis in the report.
        let body = resp
            .text()
            .context("failed to read Perplexity response body")?;

        let chat_resp: ChatResponse = serde_json::from_str(&body)
            .map_err(|_| anyhow!("unexpected Perplexity response shape: {body}"))?;

        let content = chat_resp
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| anyhow!("no choices in Perplexity response: {body}"))?;

        Ok(content)
    }
}

impl SuggestionClient for PerplexityClient {
    fn suggest(&self, prompt: &str, max_tokens: u32) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            log::warn!("no API key configured; skipping model call");
            return MISSING_KEY_ERROR.to_string();
        };

        match self.call_chat(api_key, prompt, max_tokens) {
            Ok(content) => content,
            Err(err) => {
                log::error!("model call failed: {err:#}");
                format!("Error: {err:#}")
            }
        }
    }
}
