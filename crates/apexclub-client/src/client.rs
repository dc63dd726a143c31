//! # API Client
//!
//! The HTTP client for the club backend.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  endpoint method                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build request ──► attach Bearer token (TokenProvider)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  send ──► transport error? ──► ClientError::Transport                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  status 401 ──► provider.on_unauthorized() ──► ClientError::Unauthorized│
//! │  status non-2xx ──► parse {message} ──► ClientError::Api (verbatim)     │
//! │  status 2xx ──► deserialize body ──► typed response                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call is an independent request/response - no retries, no queuing,
//! no cross-request state beyond the shared connection pool.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use apexclub_core::{Package, Subscription, Trainer};

use crate::auth::TokenProvider;
use crate::error::{ClientError, ClientResult};
use crate::payloads::ApiMessage;

/// How long a backend call may take before we give up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the club backend REST API.
///
/// Cheap to clone is not a goal - construct once at startup and share.
pub struct ApiClient<A> {
    http: reqwest::Client,
    base_url: String,
    auth: A,
}

impl<A: TokenProvider> ApiClient<A> {
    /// Creates a client for a backend base URL (e.g. `https://club.example.com`).
    pub fn new(base_url: impl Into<String>, auth: A) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(ApiClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        })
    }

    // -------------------------------------------------------------------------
    // Catalog reads
    // -------------------------------------------------------------------------

    /// Fetches all membership packages.
    pub async fn packages(&self) -> ClientResult<Vec<Package>> {
        debug!("fetching packages");
        self.get_json("/api/admin/packages").await
    }

    /// Fetches all trainer employees.
    pub async fn trainers(&self) -> ClientResult<Vec<Trainer>> {
        debug!("fetching trainers");
        self.get_json("/api/admin/employees/role/Trainer").await
    }

    /// Fetches a member's subscriptions.
    pub async fn member_subscriptions(&self, member_id: &str) -> ClientResult<Vec<Subscription>> {
        debug!(member_id = %member_id, "fetching subscriptions");
        self.get_json(&format!("/api/admin/members/{}/subscriptions", member_id))
            .await
    }

    // -------------------------------------------------------------------------
    // Request plumbing
    // -------------------------------------------------------------------------

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.http.get(self.url(path));
        self.execute(request).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.http.post(self.url(path)).json(body);
        self.execute(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        mut request: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        if let Some(token) = self.auth.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("backend rejected the session token");
            self.auth.on_unauthorized();
            return Err(ClientError::Unauthorized);
        }

        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_message(&bytes, status),
            });
        }

        serde_json::from_slice(&bytes).map_err(ClientError::Decode)
    }
}

/// Pulls the backend's `message` field out of an error body, falling back
/// to the HTTP status line when the body is empty or not JSON.
fn extract_message(body: &[u8], status: StatusCode) -> String {
    serde_json::from_slice::<ApiMessage>(body)
        .map(|m| m.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("https://club.example.com/", StaticToken::anonymous()).unwrap();
        assert_eq!(client.url("/api/admin/packages"),
            "https://club.example.com/api/admin/packages");
    }

    #[test]
    fn test_extract_message_from_json_body() {
        let body = br#"{"message":"Member not found"}"#;
        assert_eq!(
            extract_message(body, StatusCode::NOT_FOUND),
            "Member not found"
        );
    }

    #[test]
    fn test_extract_message_falls_back_to_status() {
        assert_eq!(
            extract_message(b"<html>oops</html>", StatusCode::BAD_GATEWAY),
            "Bad Gateway"
        );
        assert_eq!(extract_message(b"", StatusCode::NOT_FOUND), "Not Found");
    }
}
