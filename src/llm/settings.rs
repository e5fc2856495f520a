use std::env;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_SYSTEM_PROMPT: &str =
    "You are Aura, a desktop assistant. Respond naturally and briefly.";

/// Settings for the hosted model backend, resolved once at startup.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub base_url: String,
    /// Missing credentials are not an error here; they surface at the first
    /// model call.
    pub api_key: Option<String>,
    pub model: String,
    pub system_prompt: String,
}

impl LlmSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        let base_url = env::var("AURA_LLM_BASE_URL")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = env::var("AURA_LLM_API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|value| !value.is_empty());
        let model = env::var("AURA_LLM_MODEL")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let system_prompt = env::var("AURA_LLM_SYSTEM_PROMPT")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        Self {
            base_url,
            api_key,
            model,
            system_prompt,
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}
