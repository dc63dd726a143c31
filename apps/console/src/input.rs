//! # Input Parsing
//!
//! Turns command-line text into core types. All money is entered in
//! rupees ("9000" or "9000.50") and converted to paise immediately -
//! nothing downstream ever sees a float.

use apexclub_core::{Money, PaymentMethod};
use chrono::NaiveDate;

/// Parses a rupee amount ("9000", "9000.5", "9000.50") into Money.
pub fn parse_rupees(text: &str) -> Result<Money, String> {
    let text = text.trim();
    let (rupees_part, paise_part) = match text.split_once('.') {
        Some((r, p)) => (r, p),
        None => (text, ""),
    };

    let rupees: i64 = rupees_part
        .parse()
        .map_err(|_| format!("invalid amount: {}", text))?;
    if rupees < 0 {
        return Err(format!("amount cannot be negative: {}", text));
    }

    let paise = match paise_part.len() {
        0 => 0,
        1 | 2 => {
            let digits: i64 = paise_part
                .parse()
                .map_err(|_| format!("invalid amount: {}", text))?;
            if paise_part.len() == 1 {
                digits * 10
            } else {
                digits
            }
        }
        _ => return Err(format!("amounts use at most 2 decimals: {}", text)),
    };

    Ok(Money::from_paise(rupees * 100 + paise))
}

/// Parses a payment method name as typed at the front desk.
pub fn parse_payment_method(text: &str) -> Result<PaymentMethod, String> {
    match text.to_lowercase().as_str() {
        "cash" => Ok(PaymentMethod::Cash),
        "card" | "credit" | "debit" => Ok(PaymentMethod::Card),
        "upi" => Ok(PaymentMethod::Upi),
        "bank" | "bank_transfer" | "transfer" => Ok(PaymentMethod::BankTransfer),
        other => Err(format!("unknown payment method: {}", other)),
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date (expected YYYY-MM-DD): {}", text))
}

/// Parses a `package-id=value` assignment used by `--trainer` and `--start`.
pub fn parse_assignment(text: &str) -> Result<(&str, &str), String> {
    match text.split_once('=') {
        Some((package_id, value)) if !package_id.is_empty() && !value.is_empty() => {
            Ok((package_id, value))
        }
        _ => Err(format!("expected package-id=value, got: {}", text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rupees() {
        assert_eq!(parse_rupees("9000").unwrap(), Money::from_rupees(9000));
        assert_eq!(parse_rupees("9000.50").unwrap(), Money::from_paise(900050));
        assert_eq!(parse_rupees("9000.5").unwrap(), Money::from_paise(900050));
        assert_eq!(parse_rupees("0").unwrap(), Money::zero());

        assert!(parse_rupees("-100").is_err());
        assert!(parse_rupees("9000.505").is_err());
        assert!(parse_rupees("abc").is_err());
        assert!(parse_rupees("9000.x").is_err());
    }

    #[test]
    fn test_parse_payment_method() {
        assert_eq!(parse_payment_method("cash").unwrap(), PaymentMethod::Cash);
        assert_eq!(parse_payment_method("Card").unwrap(), PaymentMethod::Card);
        assert_eq!(parse_payment_method("UPI").unwrap(), PaymentMethod::Upi);
        assert_eq!(
            parse_payment_method("bank").unwrap(),
            PaymentMethod::BankTransfer
        );
        assert!(parse_payment_method("crypto").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(parse_date("01/03/2025").is_err());
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("pkg-1=trainer-9").unwrap(),
            ("pkg-1", "trainer-9")
        );
        assert!(parse_assignment("pkg-1").is_err());
        assert!(parse_assignment("=trainer-9").is_err());
        assert!(parse_assignment("pkg-1=").is_err());
    }
}
