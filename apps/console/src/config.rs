//! # Console Configuration
//!
//! Backend URL, session token, and operator name for one console run.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--api-url`, `--token`, `--operator`)
//! 2. Environment variables (`APEXCLUB_*`)
//! 3. Defaults (local backend, anonymous, "console")
//!
//! Read-only after startup - a console run is one operator, one backend.

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "APEXCLUB_API_URL";
/// Environment variable holding the admin session token.
pub const API_TOKEN_ENV: &str = "APEXCLUB_API_TOKEN";
/// Environment variable naming the operator recorded on invoices.
pub const OPERATOR_ENV: &str = "APEXCLUB_OPERATOR";

/// Resolved console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend base URL, no trailing slash required.
    pub api_url: String,

    /// Admin session token; requests go out anonymous without one.
    pub token: Option<String>,

    /// Operator recorded as `closedBy` on every submission.
    pub operator: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            api_url: "http://localhost:4000".to_string(),
            token: None,
            operator: "console".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Builds config from the environment, then applies flag overrides.
    pub fn resolve(
        api_url: Option<&str>,
        token: Option<&str>,
        operator: Option<&str>,
    ) -> Self {
        let mut config = ConsoleConfig::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_url = url;
        }
        if let Ok(token) = std::env::var(API_TOKEN_ENV) {
            config.token = Some(token);
        }
        if let Ok(operator) = std::env::var(OPERATOR_ENV) {
            config.operator = operator;
        }

        if let Some(url) = api_url {
            config.api_url = url.to_string();
        }
        if let Some(token) = token {
            config.token = Some(token.to_string());
        }
        if let Some(operator) = operator {
            config.operator = operator.to_string();
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_win() {
        let config = ConsoleConfig::resolve(
            Some("https://club.example.com"),
            Some("t-123"),
            Some("priya"),
        );
        assert_eq!(config.api_url, "https://club.example.com");
        assert_eq!(config.token.as_deref(), Some("t-123"));
        assert_eq!(config.operator, "priya");
    }

    #[test]
    fn test_defaults() {
        // env may leak into this test in CI; only assert the shape of the
        // fallback operator when nothing else is set
        let config = ConsoleConfig::resolve(None, None, None);
        assert!(!config.api_url.is_empty());
        assert!(!config.operator.is_empty());
    }
}
