//! # Console Commands
//!
//! One handler per subcommand. Handlers fetch what they need, drive the
//! core session, print the derived quote, and submit unless `--dry-run`.

use clap::ArgMatches;
use tracing::debug;

use apexclub_client::{ApiClient, TokenProvider, TransferRequest};
use apexclub_core::{
    Package, PaymentMethod, QuoteInputs, SaleQuote, SaleSession, TaxRate, STANDARD_GST_BPS,
};

use crate::cli;
use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::input;

/// Which write endpoint a priced session goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleKind {
    Fresh,
    Renewal,
}

// =============================================================================
// Catalog listings
// =============================================================================

pub async fn list_packages<A: TokenProvider>(client: &ApiClient<A>) -> Result<(), ConsoleError> {
    let packages = client.packages().await?;

    println!("{:<38} {:<24} {:>6} {:>12}  {}", "ID", "NAME", "TYPE", "RATE", "DURATION");
    for package in &packages {
        let kind = if package.membership_type.requires_trainer() { "pt" } else { "gen" };
        println!(
            "{:<38} {:<24} {:>6} {:>12}  {} {:?}{}",
            package.id,
            package.name,
            kind,
            package.base_rate.to_string(),
            package.duration_value,
            package.duration_type,
            if package.active { "" } else { "  (inactive)" },
        );
    }
    println!("{} packages", packages.len());
    Ok(())
}

pub async fn list_trainers<A: TokenProvider>(client: &ApiClient<A>) -> Result<(), ConsoleError> {
    let trainers = client.trainers().await?;

    for trainer in &trainers {
        println!(
            "{:<38} {:<24} {}",
            trainer.id,
            trainer.name,
            trainer.phone.as_deref().unwrap_or("-"),
        );
    }
    println!("{} trainers", trainers.len());
    Ok(())
}

pub async fn list_subscriptions<A: TokenProvider>(
    client: &ApiClient<A>,
    member_id: &str,
) -> Result<(), ConsoleError> {
    let subscriptions = client.member_subscriptions(member_id).await?;
    let today = chrono::Local::now().date_naive();

    for sub in &subscriptions {
        println!(
            "{:<24} {} → {}  {:>12}  due {:>10}  [{:?}]",
            sub.package_name,
            sub.start_date,
            sub.end_date,
            sub.amount.to_string(),
            sub.balance.to_string(),
            sub.status_on(today),
        );
    }
    println!("{} subscriptions", subscriptions.len());
    Ok(())
}

// =============================================================================
// Sale / renewal
// =============================================================================

pub async fn run_sale<A: TokenProvider>(
    client: &ApiClient<A>,
    config: &ConsoleConfig,
    matches: &ArgMatches<'_>,
    kind: SaleKind,
) -> Result<(), ConsoleError> {
    let packages = client.packages().await?;
    let session = build_session(matches, &packages)?;

    print_quote(session.quote(), session.inputs(), "Plans total");

    if matches.is_present(cli::DRY_RUN_ARG) {
        println!("(dry run - nothing submitted)");
        return Ok(());
    }

    let ack = match kind {
        SaleKind::Fresh => client.submit_sale(&session, &config.operator).await?,
        SaleKind::Renewal => client.submit_renewal(&session, &config.operator).await?,
    };

    match (&ack.invoice_number, &ack.message) {
        (Some(invoice), _) => println!("Recorded as invoice {}", invoice),
        (None, Some(message)) => println!("{}", message),
        (None, None) => println!("Recorded."),
    }
    Ok(())
}

/// Builds a priced session from the sale/renew flags against the fetched
/// package catalog.
fn build_session(
    matches: &ArgMatches<'_>,
    packages: &[Package],
) -> Result<SaleSession, ConsoleError> {
    let member_id = matches
        .value_of(cli::MEMBER_ARG)
        .unwrap_or_default()
        .to_string();
    let mut session = SaleSession::new(member_id);

    for plan_id in cli::values_of(matches, cli::PLAN_ARG) {
        let package = packages
            .iter()
            .find(|p| p.id == plan_id)
            .ok_or_else(|| ConsoleError::Input(format!("package not found: {}", plan_id)))?;
        debug!(package_id = %package.id, name = %package.name, "selecting plan");
        session.toggle_package(package)?;
    }

    for assignment in cli::values_of(matches, cli::TRAINER_ARG) {
        let (package_id, trainer_id) = input::parse_assignment(assignment)?;
        session.assign_trainer(package_id, Some(trainer_id.to_string()))?;
    }

    for assignment in cli::values_of(matches, cli::START_ARG) {
        let (package_id, date) = input::parse_assignment(assignment)?;
        session.set_start_date(package_id, Some(input::parse_date(date)?))?;
    }

    if let Some(discount) = matches.value_of(cli::DISCOUNT_ARG) {
        session.set_discount(input::parse_rupees(discount)?)?;
    }
    if let Some(surcharge) = matches.value_of(cli::SURCHARGE_ARG) {
        session.set_surcharge(input::parse_rupees(surcharge)?)?;
    }
    if matches.is_present(cli::GST_ARG) {
        session.set_apply_taxes(true);
        session.set_tax_rate(gst_rate(matches)?)?;
    }
    if let Some(paid) = matches.value_of(cli::PAID_ARG) {
        session.set_amount_paid(input::parse_rupees(paid)?)?;
    }
    if let Some(method) = matches.value_of(cli::METHOD_ARG) {
        session.payment_method = input::parse_payment_method(method)?;
    }
    session.set_comment(matches.value_of(cli::COMMENT_ARG).map(String::from))?;

    Ok(session)
}

// =============================================================================
// Transfer
// =============================================================================

pub async fn run_transfer<A: TokenProvider>(
    client: &ApiClient<A>,
    config: &ConsoleConfig,
    matches: &ArgMatches<'_>,
) -> Result<(), ConsoleError> {
    let member_id = matches.value_of(cli::MEMBER_ARG).unwrap_or_default();
    let to_member = matches.value_of(cli::TO_ARG).unwrap_or_default();
    let charge = input::parse_rupees(matches.value_of(cli::CHARGE_ARG).unwrap_or_default())?;

    let mut inputs = QuoteInputs::default();
    if matches.is_present(cli::GST_ARG) {
        inputs.apply_taxes = true;
        inputs.tax_rate = gst_rate(matches)?;
    }
    if let Some(paid) = matches.value_of(cli::PAID_ARG) {
        inputs.amount_paid = input::parse_rupees(paid)?;
    }

    let quote = SaleQuote::from_amount(charge, &inputs);
    print_quote(&quote, &inputs, "Charge");

    if matches.is_present(cli::DRY_RUN_ARG) {
        println!("(dry run - nothing submitted)");
        return Ok(());
    }

    let method = match matches.value_of(cli::METHOD_ARG) {
        Some(text) => input::parse_payment_method(text)?,
        None => PaymentMethod::default(),
    };
    let request = TransferRequest::new(
        to_member,
        charge,
        &quote,
        method,
        matches.value_of(cli::COMMENT_ARG).map(String::from),
        config.operator.clone(),
    );

    let ack = client.submit_transfer(member_id, &request).await?;
    println!("{}", ack.message.as_deref().unwrap_or("Transfer recorded."));
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn gst_rate(matches: &ArgMatches<'_>) -> Result<TaxRate, ConsoleError> {
    match matches.value_of(cli::GST_RATE_ARG) {
        Some(text) => {
            let pct: f64 = text
                .parse()
                .map_err(|_| ConsoleError::Input(format!("invalid GST rate: {}", text)))?;
            Ok(TaxRate::from_percentage(pct))
        }
        None => Ok(TaxRate::from_bps(STANDARD_GST_BPS)),
    }
}

/// Prints the derived quote the way the sale screen shows it.
fn print_quote(quote: &SaleQuote, inputs: &QuoteInputs, base_label: &str) {
    println!("  {:<13} {:>14}", base_label, quote.plans_total.to_string());
    if !inputs.surcharge.is_zero() {
        println!("  Surcharge     {:>14}", inputs.surcharge.to_string());
    }
    if !inputs.discount.is_zero() {
        println!("  Discount      {:>14}", format!("-{}", inputs.discount));
    }
    println!("  Subtotal      {:>14}", quote.subtotal.to_string());
    if inputs.apply_taxes {
        println!(
            "  CGST ({}%)   {:>14}",
            inputs.tax_rate.half_percentage(),
            quote.cgst.to_string()
        );
        println!(
            "  SGST ({}%)   {:>14}",
            inputs.tax_rate.half_percentage(),
            quote.sgst.to_string()
        );
    }
    println!("  Payable       {:>14}", quote.payable.to_string());
    if !inputs.amount_paid.is_zero() {
        println!("  Paid          {:>14}", inputs.amount_paid.to_string());
    }
    println!("  Remaining     {:>14}", quote.remaining.to_string());
}
