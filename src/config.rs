//! Deployment configuration and shared config-file utilities:
//! loading/saving JSON config files and resolving backend URLs
//! from fields or environment variables.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generic load for any Serde config type with a `Default` implementation.
/// Falls back to `T::default()` if the file is missing or unparsable.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(config) => {
                println!("[{}] Loaded config from {}", label, path.display());
                config
            }
            Err(e) => {
                eprintln!(
                    "[{}] Failed to parse config {}: {} — using defaults",
                    label,
                    path.display(),
                    e
                );
                T::default()
            }
        },
        Err(_) => {
            println!(
                "[{}] No config file at {} — using defaults",
                label,
                path.display()
            );
            T::default()
        }
    }
}

/// Generic save for any Serde config type.
pub fn save_json_config<T: Serialize>(path: &Path, config: &T, label: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write config file: {}", e))?;
    println!("[{}] Saved config to {}", label, path.display());
    Ok(())
}

/// Read a URL from an environment variable. Empty values count as unset.
fn env_url(var: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

// ── Deployment Config ──────────────────────────────────

/// Environment variable naming the self-hosted override base URL.
pub const API_URL_ENV: &str = "DEVCARD_API_URL";
/// Environment variable naming the managed backend base URL.
pub const MANAGED_BACKEND_URL_ENV: &str = "DEVCARD_MANAGED_BACKEND_URL";

/// Backend topology configuration, read once at startup and immutable
/// thereafter. Passed explicitly into the endpoint resolver so tests
/// never need to simulate a hosting environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Complete endpoint for self-hosted deployments. When set it wins
    /// unconditionally and no path is appended.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Managed backend base URL, used only on recognized preview/dev hosts.
    #[serde(default)]
    pub managed_backend_url: Option<String>,
}

impl DeploymentConfig {
    /// Read both URLs from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_url: env_url(API_URL_ENV),
            managed_backend_url: env_url(MANAGED_BACKEND_URL_ENV),
        }
    }

    /// Load from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        load_json_config(path, "Deploy")
    }

    /// Save to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        save_json_config(path, self, "Deploy")
    }
}

// ── Page Context ───────────────────────────────────────

/// Host identity of the page (or process) embedding the preview client.
/// Supplied explicitly instead of read from ambient globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Bare hostname, e.g. "localhost" or "cards.example.com".
    pub hostname: String,
    /// Full origin, e.g. "https://cards.example.com".
    pub origin: String,
}

impl PageContext {
    pub fn new(hostname: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            origin: origin.into(),
        }
    }

    /// Context for local development.
    pub fn localhost(port: u16) -> Self {
        Self {
            hostname: "localhost".to_string(),
            origin: format!("http://localhost:{}", port),
        }
    }
}
