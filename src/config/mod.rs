use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub mod loader;
pub mod validator;

pub use loader::{load_config, API_URL_ENV};
pub use validator::validate_config;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_RECOMMENDATIONS_PATH: &str = "/api/recommendations";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub recommendations_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

impl Config {
    pub fn builtin() -> Self {
        Config {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                recommendations_path: DEFAULT_RECOMMENDATIONS_PATH.to_string(),
            },
        }
    }

    /// Absolute URL the answer record is posted to.
    pub fn endpoint(&self) -> Result<Url> {
        let base = Url::parse(&self.api.base_url).map_err(|err| {
            AppError::message(format!("invalid base url `{}`: {err}", self.api.base_url))
        })?;
        base.join(&self.api.recommendations_path).map_err(|err| {
            AppError::message(format!(
                "cannot join `{}` onto `{}`: {err}",
                self.api.recommendations_path, self.api.base_url
            ))
        })
    }
}
