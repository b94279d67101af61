//! Configuration loader for Somaleo.
//!
//! Reads a TOML file (`somaleo.toml` by default) and deserializes it into
//! [`TutorConfig`]. Falls back to defaults when the file is missing or
//! malformed, so the server always starts.

use std::path::Path;

use somaleo_types::config::TutorConfig;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "somaleo.toml";

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`TutorConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config; omitted fields keep their defaults.
pub async fn load_config(path: &Path) -> TutorConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return TutorConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return TutorConfig::default();
        }
    };

    match toml::from_str::<TutorConfig>(&content) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            TutorConfig::default()
        }
    }
}
