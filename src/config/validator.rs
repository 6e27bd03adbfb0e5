use reqwest::Url;

use crate::error::{AppError, Result};

use super::Config;

/// Validate the resolved configuration and surface every problem at once.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut issues = Vec::new();

    validate_base_url(&config.api.base_url, &mut issues);
    validate_path(&config.api.recommendations_path, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "configuration invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_base_url(base_url: &str, issues: &mut Vec<String>) {
    if base_url.trim().is_empty() {
        issues.push("api.base_url must not be empty".to_string());
        return;
    }

    match Url::parse(base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => issues.push(format!(
            "api.base_url must use http or https, got `{}`",
            url.scheme()
        )),
        Err(err) => issues.push(format!("api.base_url `{base_url}` is not a URL: {err}")),
    }
}

fn validate_path(path: &str, issues: &mut Vec<String>) {
    if !path.starts_with('/') {
        issues.push(format!(
            "api.recommendations_path must start with `/`, got `{path}`"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_builtin() {
        validate_config(&Config::builtin()).expect("builtin config should be valid");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = Config::builtin();
        config.api.base_url = "ftp://example.com".to_string();
        let err = validate_config(&config).expect_err("validation should fail");
        assert!(
            err.to_string().contains("http or https"),
            "unexpected error message: {err}"
        );
    }

    #[test]
    fn collects_all_issues() {
        let mut config = Config::builtin();
        config.api.base_url = "not a url".to_string();
        config.api.recommendations_path = "api/recommendations".to_string();

        let message = validate_config(&config)
            .expect_err("validation should fail")
            .to_string();
        assert!(message.contains("is not a URL"), "unexpected: {message}");
        assert!(message.contains("must start with"), "unexpected: {message}");
    }
}
