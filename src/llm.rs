pub mod client;
pub mod settings;

pub use client::LlmClient;
pub use settings::LlmSettings;
