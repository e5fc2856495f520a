use std::env;
use std::path::PathBuf;

use crate::llm::LlmSettings;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Process-wide configuration, built once in `main` and handed to the
/// server. Nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds.
    pub bind_addr: String,
    /// Directory static assets are served from.
    pub static_dir: PathBuf,
    pub llm: LlmSettings,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("AURA_ADDR")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let static_dir = env::var("AURA_STATIC_DIR")
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            bind_addr,
            static_dir,
            llm: LlmSettings::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: PathBuf::from("."),
            llm: LlmSettings::default(),
        }
    }
}
