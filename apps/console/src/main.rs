//! # Apex Club Console
//!
//! CLI admin console for club membership sales: list packages and trainers,
//! inspect a member's subscriptions, and price/submit sales, renewals, and
//! transfers against the club backend.
//!
//! ## Startup Sequence
//! ```text
//! 1. Initialize logging (tracing-subscriber, RUST_LOG-aware)
//! 2. Parse arguments (clap)
//! 3. Resolve config (flags > APEXCLUB_* env > defaults)
//! 4. Build the API client with a static token provider
//! 5. Dispatch the subcommand
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod input;

use tracing::info;
use tracing_subscriber::EnvFilter;

use apexclub_client::{ApiClient, StaticToken};

use commands::SaleKind;
use config::ConsoleConfig;
use error::ConsoleError;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ConsoleError> {
    let matches = cli::build_cli().get_matches();

    let config = ConsoleConfig::resolve(
        matches.value_of(cli::API_URL_ARG),
        matches.value_of(cli::TOKEN_ARG),
        matches.value_of(cli::OPERATOR_ARG),
    );
    info!(api_url = %config.api_url, operator = %config.operator, "console starting");

    let auth = match &config.token {
        Some(token) => StaticToken::new(token.clone()),
        None => StaticToken::anonymous(),
    };
    let client = ApiClient::new(config.api_url.clone(), auth)?;

    match matches.subcommand() {
        ("packages", Some(_)) => commands::list_packages(&client).await,
        ("trainers", Some(_)) => commands::list_trainers(&client).await,
        ("subscriptions", Some(sub)) => {
            let member_id = sub.value_of(cli::MEMBER_ARG).unwrap_or_default();
            commands::list_subscriptions(&client, member_id).await
        }
        ("sale", Some(sub)) => commands::run_sale(&client, &config, sub, SaleKind::Fresh).await,
        ("renew", Some(sub)) => commands::run_sale(&client, &config, sub, SaleKind::Renewal).await,
        ("transfer", Some(sub)) => commands::run_transfer(&client, &config, sub).await,
        // SubcommandRequiredElseHelp makes this unreachable
        _ => Ok(()),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Default level is `info`; override with `RUST_LOG` (e.g.
/// `RUST_LOG=apexclub_client=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
