//! Client for the hosted generative-language backend.
//!
//! One awaited network call per chat request, no retries and no explicit
//! timeout. Failures come back as [`CoreError`] values so the HTTP layer can
//! apply its own fallback-reply policy; nothing here decides what the user
//! sees.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::llm::settings::LlmSettings;

const MAX_OUTPUT_TOKENS: u32 = 512;
const TEMPERATURE: f64 = 0.7;

pub struct LlmClient {
    http: reqwest::Client,
    settings: LlmSettings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate: `candidates[0].content.parts[0].text`.
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|part| part.text.trim().to_string())
    }
}

impl LlmClient {
    pub fn new(settings: LlmSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    /// Ask the backend for a reply to one user message.
    pub async fn generate_reply(&self, message: &str) -> CoreResult<String> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::InvalidInput("missing model API key".to_string()))?;

        // This backend takes the API key as a URL query parameter.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.settings.base_url, self.settings.model, api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: message.to_string(),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction(&self.settings.system_prompt),
                }],
            },
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|error| CoreError::Backend(format!("request failed: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CoreError::Backend(format!(
                "backend returned {status}: {body}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|error| CoreError::Backend(format!("invalid response body: {error}")))?;

        parsed
            .first_text()
            .filter(|text| !text.is_empty())
            .ok_or_else(|| CoreError::Backend("response carried no text".to_string()))
    }
}

/// The persona prompt plus today's date, told to the model on every request.
fn system_instruction(prompt: &str) -> String {
    format!("{prompt}\nDate: {}", chrono::Local::now().format("%B %d, %Y"))
}
