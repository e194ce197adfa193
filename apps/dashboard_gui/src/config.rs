//! Startup configuration for the dashboard.
//!
//! The API base URL is resolved once at startup and injected into the backend
//! bridge; nothing reads it ambiently after that. Precedence, lowest to
//! highest: built-in default, `workbench.toml`, `WORKBENCH_API_BASE_URL`,
//! `--api-url`.

use std::{collections::HashMap, fs};

use tracing::warn;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

const CONFIG_FILE: &str = "workbench.toml";
const ENV_API_BASE_URL: &str = "WORKBENCH_API_BASE_URL";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_base_url: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

pub fn load_startup_config(cli_api_url: Option<String>) -> StartupConfig {
    let file_value = fs::read_to_string(CONFIG_FILE)
        .ok()
        .and_then(|raw| toml::from_str::<HashMap<String, String>>(&raw).ok())
        .and_then(|file_cfg| file_cfg.get("api_base_url").cloned());
    let env_value = std::env::var(ENV_API_BASE_URL).ok();

    StartupConfig {
        api_base_url: resolve_base_url(file_value, env_value, cli_api_url),
    }
}

fn resolve_base_url(
    file_value: Option<String>,
    env_value: Option<String>,
    cli_value: Option<String>,
) -> String {
    let raw = cli_value
        .or(env_value)
        .or(file_value)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    normalize_base_url(&raw)
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_URL.to_string();
    }

    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => trimmed.to_string(),
        Ok(url) => {
            warn!(
                base_url = trimmed,
                scheme = url.scheme(),
                "unsupported API base URL scheme; using default"
            );
            DEFAULT_API_BASE_URL.to_string()
        }
        Err(err) => {
            warn!(base_url = trimmed, %err, "invalid API base URL; using default");
            DEFAULT_API_BASE_URL.to_string()
        }
    }
}
