use std::{fs, path::Path};

use log::info;
use serde::Deserialize;

use crate::error::{Context, Result};

use super::{validator, Config};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "SKINCARE_BOT_API_URL";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    api: RawApiConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawApiConfig {
    base_url: Option<String>,
    recommendations_path: Option<String>,
}

impl RawConfig {
    fn apply(self, config: &mut Config) {
        if let Some(base_url) = self.api.base_url {
            config.api.base_url = base_url;
        }
        if let Some(path) = self.api.recommendations_path {
            config.api.recommendations_path = path;
        }
    }
}

/// Resolve the runtime configuration.
///
/// Built-in defaults are overlaid by the optional JSON file, then by
/// `SKINCARE_BOT_API_URL`, then by an explicit `api_url` (the CLI flag).
pub fn load_config(path: Option<&Path>, api_url: Option<&str>) -> Result<Config> {
    let env_url = std::env::var(API_URL_ENV).ok();
    resolve(path, env_url.as_deref(), api_url)
}

fn resolve(path: Option<&Path>, env_url: Option<&str>, api_url: Option<&str>) -> Result<Config> {
    let mut config = Config::builtin();

    if let Some(path) = path {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config JSON at {}", path.display()))?;
        let raw: RawConfig = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse config JSON at {}", path.display()))?;
        raw.apply(&mut config);
        info!("loaded configuration from {}", path.display());
    }

    if let Some(url) = env_url.filter(|url| !url.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }

    if let Some(url) = api_url {
        config.api.base_url = url.trim().to_string();
    }

    validator::validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults_without_sources() {
        let config = resolve(None, None, None).expect("builtin config");
        assert_eq!(config, Config::builtin());
    }

    #[test]
    fn file_overrides_only_given_keys() {
        let file = config_file(r#"{ "api": { "base_url": "https://api.example.com" } }"#);
        let config = resolve(Some(file.path()), None, None).expect("load file");
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.recommendations_path, "/api/recommendations");
    }

    #[test]
    fn env_then_flag_take_precedence() {
        let file = config_file(r#"{ "api": { "base_url": "https://file.example.com" } }"#);

        let from_env = resolve(Some(file.path()), Some("https://env.example.com"), None)
            .expect("env override");
        assert_eq!(from_env.api.base_url, "https://env.example.com");

        let from_flag = resolve(
            Some(file.path()),
            Some("https://env.example.com"),
            Some("http://127.0.0.1:8080"),
        )
        .expect("flag override");
        assert_eq!(from_flag.api.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn blank_env_value_is_ignored() {
        let config = resolve(None, Some("   "), None).expect("blank env");
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn malformed_file_reports_path() {
        let file = config_file("{ not json");
        let err = resolve(Some(file.path()), None, None).expect_err("parse should fail");
        assert!(
            err.to_string().contains("failed to parse config JSON"),
            "unexpected error message: {err}"
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");
        assert!(resolve(Some(&path), None, None).is_err());
    }
}
