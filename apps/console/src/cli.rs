//! # Command-Line Definition
//!
//! ## Console Commands
//! ```text
//! apexclub-console packages                         list packages on offer
//! apexclub-console trainers                         list trainer employees
//! apexclub-console subscriptions --member <id>      a member's subscriptions
//! apexclub-console sale --member <id> --plan <id> … price + submit a sale
//! apexclub-console renew --member <id> --plan <id> … price + submit a renewal
//! apexclub-console transfer --member <id> --to <id> --charge <amt>
//! ```
//!
//! `sale` and `renew` share the pricing flags; `--dry-run` prints the
//! derived quote without submitting anything.

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use crate::config::{API_TOKEN_ENV, API_URL_ENV, OPERATOR_ENV};

// Global flags
pub const API_URL_ARG: &str = "api-url";
pub const TOKEN_ARG: &str = "token";
pub const OPERATOR_ARG: &str = "operator";

// Shared pricing flags
pub const MEMBER_ARG: &str = "member";
pub const PLAN_ARG: &str = "plan";
pub const TRAINER_ARG: &str = "trainer";
pub const START_ARG: &str = "start";
pub const DISCOUNT_ARG: &str = "discount";
pub const SURCHARGE_ARG: &str = "surcharge";
pub const GST_ARG: &str = "gst";
pub const GST_RATE_ARG: &str = "gst-rate";
pub const PAID_ARG: &str = "paid";
pub const METHOD_ARG: &str = "method";
pub const COMMENT_ARG: &str = "comment";
pub const DRY_RUN_ARG: &str = "dry-run";

// Transfer flags
pub const TO_ARG: &str = "to";
pub const CHARGE_ARG: &str = "charge";

pub fn build_cli() -> App<'static, 'static> {
    App::new("apexclub-console")
        .about("Apex Club membership sale console")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name(API_URL_ARG)
                .long(API_URL_ARG)
                .env(API_URL_ENV)
                .value_name("URL")
                .help("Club backend base URL")
                .takes_value(true),
        )
        .arg(
            Arg::with_name(TOKEN_ARG)
                .long(TOKEN_ARG)
                .env(API_TOKEN_ENV)
                .value_name("TOKEN")
                .help("Admin session token")
                .takes_value(true),
        )
        .arg(
            Arg::with_name(OPERATOR_ARG)
                .long(OPERATOR_ARG)
                .env(OPERATOR_ENV)
                .value_name("NAME")
                .help("Operator recorded on invoices")
                .takes_value(true),
        )
        .subcommand(SubCommand::with_name("packages").about("List packages on offer"))
        .subcommand(SubCommand::with_name("trainers").about("List trainer employees"))
        .subcommand(
            SubCommand::with_name("subscriptions")
                .about("List a member's subscriptions")
                .arg(member_arg()),
        )
        .subcommand(pricing_flags(
            SubCommand::with_name("sale").about("Price and submit a fresh sale"),
        ))
        .subcommand(pricing_flags(
            SubCommand::with_name("renew")
                .about("Price and submit a plan renewal (start dates required)"),
        ))
        .subcommand(
            SubCommand::with_name("transfer")
                .about("Transfer a membership to another member")
                .arg(member_arg())
                .arg(
                    Arg::with_name(TO_ARG)
                        .long(TO_ARG)
                        .value_name("MEMBER_ID")
                        .help("Member receiving the membership")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name(CHARGE_ARG)
                        .long(CHARGE_ARG)
                        .value_name("RUPEES")
                        .help("Transfer charge")
                        .takes_value(true)
                        .required(true),
                )
                .arg(gst_arg())
                .arg(gst_rate_arg())
                .arg(paid_arg())
                .arg(method_arg())
                .arg(comment_arg())
                .arg(dry_run_arg()),
        )
}

fn pricing_flags(sub: App<'static, 'static>) -> App<'static, 'static> {
    sub.arg(member_arg())
        .arg(
            Arg::with_name(PLAN_ARG)
                .long(PLAN_ARG)
                .value_name("PACKAGE_ID")
                .help("Package to include (repeatable)")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .required(true),
        )
        .arg(
            Arg::with_name(TRAINER_ARG)
                .long(TRAINER_ARG)
                .value_name("PACKAGE_ID=TRAINER_ID")
                .help("Assign a trainer to a selected plan (repeatable)")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name(START_ARG)
                .long(START_ARG)
                .value_name("PACKAGE_ID=YYYY-MM-DD")
                .help("Commitment date for a selected plan (repeatable)")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name(DISCOUNT_ARG)
                .long(DISCOUNT_ARG)
                .value_name("RUPEES")
                .help("Flat discount before tax")
                .takes_value(true),
        )
        .arg(
            Arg::with_name(SURCHARGE_ARG)
                .long(SURCHARGE_ARG)
                .value_name("RUPEES")
                .help("Admission/registration charge before tax")
                .takes_value(true),
        )
        .arg(gst_arg())
        .arg(gst_rate_arg())
        .arg(paid_arg())
        .arg(method_arg())
        .arg(comment_arg())
        .arg(dry_run_arg())
}

fn member_arg() -> Arg<'static, 'static> {
    Arg::with_name(MEMBER_ARG)
        .long(MEMBER_ARG)
        .value_name("MEMBER_ID")
        .help("Member the operation is for")
        .takes_value(true)
        .required(true)
}

fn gst_arg() -> Arg<'static, 'static> {
    Arg::with_name(GST_ARG)
        .long(GST_ARG)
        .help("Apply GST to the invoice")
}

fn gst_rate_arg() -> Arg<'static, 'static> {
    Arg::with_name(GST_RATE_ARG)
        .long(GST_RATE_ARG)
        .value_name("PERCENT")
        .help("GST rate when --gst is set (default 18)")
        .takes_value(true)
}

fn paid_arg() -> Arg<'static, 'static> {
    Arg::with_name(PAID_ARG)
        .long(PAID_ARG)
        .value_name("RUPEES")
        .help("Amount collected up front")
        .takes_value(true)
}

fn method_arg() -> Arg<'static, 'static> {
    Arg::with_name(METHOD_ARG)
        .long(METHOD_ARG)
        .value_name("METHOD")
        .help("Payment method: cash, card, upi, bank (default cash)")
        .takes_value(true)
}

fn comment_arg() -> Arg<'static, 'static> {
    Arg::with_name(COMMENT_ARG)
        .long(COMMENT_ARG)
        .value_name("TEXT")
        .help("Invoice comment")
        .takes_value(true)
}

fn dry_run_arg() -> Arg<'static, 'static> {
    Arg::with_name(DRY_RUN_ARG)
        .long(DRY_RUN_ARG)
        .help("Print the derived quote without submitting")
}

/// Convenience: collects a repeatable arg's values.
pub fn values_of<'a>(matches: &'a ArgMatches<'a>, name: &str) -> Vec<&'a str> {
    matches
        .values_of(name)
        .map(|v| v.collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_parses_repeatable_plans() {
        let matches = build_cli().get_matches_from(vec![
            "apexclub-console",
            "sale",
            "--member",
            "m-1",
            "--plan",
            "p-1",
            "--plan",
            "p-2",
            "--gst",
            "--paid",
            "4000",
            "--dry-run",
        ]);

        let sub = matches.subcommand_matches("sale").unwrap();
        assert_eq!(sub.value_of(MEMBER_ARG), Some("m-1"));
        assert_eq!(values_of(sub, PLAN_ARG), vec!["p-1", "p-2"]);
        assert!(sub.is_present(GST_ARG));
        assert!(sub.is_present(DRY_RUN_ARG));
    }

    #[test]
    fn test_transfer_requires_charge() {
        let result = build_cli().get_matches_from_safe(vec![
            "apexclub-console",
            "transfer",
            "--member",
            "m-1",
            "--to",
            "m-2",
        ]);
        assert!(result.is_err());
    }
}
