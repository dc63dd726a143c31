//! # Token Provider
//!
//! Bearer-token supply for backend requests.
//!
//! The console never reads tokens from ambient storage. Whoever constructs
//! the client decides where tokens come from (env var, keychain, a login
//! flow) and what "session expired" means (re-login prompt, process exit).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ApiClient ──► TokenProvider::token() ──► Authorization: Bearer <...>  │
//! │                                                                         │
//! │  backend 401 ──► TokenProvider::on_unauthorized() ──► caller's policy  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Supplies the bearer token for backend requests.
///
/// `Send + Sync` because the client is shared across async tasks.
pub trait TokenProvider: Send + Sync {
    /// Returns the current token, if a session exists.
    ///
    /// Requests go out without an `Authorization` header when this is
    /// `None`; the backend answers 401 and `on_unauthorized` fires.
    fn token(&self) -> Option<String>;

    /// Called once per request that the backend rejected with 401.
    ///
    /// Default is a no-op; interactive hosts hook their re-login here.
    fn on_unauthorized(&self) {}
}

/// A fixed token, known at construction time.
///
/// The usual provider for the CLI console (token from the environment)
/// and for tests.
#[derive(Debug, Clone)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    /// Wraps a token string.
    pub fn new(token: impl Into<String>) -> Self {
        StaticToken(Some(token.into()))
    }

    /// A provider with no session at all.
    pub fn anonymous() -> Self {
        StaticToken(None)
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token() {
        let provider = StaticToken::new("abc123");
        assert_eq!(provider.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_anonymous_has_no_token() {
        assert!(StaticToken::anonymous().token().is_none());
    }
}
