//! Configuration types for Somaleo.
//!
//! `TutorConfig` represents the top-level `somaleo.toml`. Every field has a
//! default, so an empty or missing file yields a working configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the tutor backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TutorConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on a POST body, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    1 << 20
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Chat-completion API settings.
///
/// The credential itself is never stored here, only the name of the
/// environment variable that holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Sent as `HTTP-Referer` (OpenRouter app attribution).
    #[serde(default = "default_referer")]
    pub referer: String,

    /// Sent as `X-Title` (OpenRouter app attribution).
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "mistralai/mistral-7b-instruct".to_string()
}

fn default_temperature() -> f64 {
    0.4
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_api_key_env() -> String {
    "OPENROUTER_API_KEY".to_string()
}

fn default_referer() -> String {
    "http://localhost".to_string()
}

fn default_title() -> String {
    "Kenyan CBC AI Agent".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
            referer: default_referer(),
            title: default_title(),
        }
    }
}
