//! # apexclub-client: REST Client for the Club Backend
//!
//! Owns all communication with the club backend: catalog reads, sale and
//! renewal submission, membership transfer. Pricing math lives in
//! [`apexclub_core`]; this crate ships the derived figures over the wire.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use apexclub_client::{ApiClient, StaticToken};
//!
//! # async fn demo() -> Result<(), apexclub_client::ClientError> {
//! let client = ApiClient::new(
//!     "https://club.example.com",
//!     StaticToken::new("token-from-login"),
//! )?;
//!
//! let packages = client.packages().await?;
//! println!("{} packages on offer", packages.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Auth
//!
//! Tokens come from an injected [`TokenProvider`], never from ambient
//! storage. A 401 response surfaces as [`ClientError::Unauthorized`] after
//! the provider's `on_unauthorized` hook has fired.

pub mod auth;
pub mod client;
pub mod error;
pub mod members;
pub mod payloads;

pub use auth::{StaticToken, TokenProvider};
pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use payloads::{ApiAck, FreshSaleRequest, RenewRequest, TransferRequest};
