//! # Sale Session
//!
//! The typed form state behind one sale screen: the selected plans, the
//! pricing inputs, and the quote derived from them.
//!
//! Every mutation re-derives the quote immediately, so a session's quote
//! is never stale relative to its inputs. A session is created fresh per
//! flow and discarded after submission; nothing is cached across flows.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::quote::{QuoteInputs, SaleQuote};
use crate::selection::PlanSelection;
use crate::types::{Package, PaymentMethod, TaxRate};
use crate::validation;

/// Mutable state for a fresh-sale or renewal screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SaleSession {
    /// Member the sale is for.
    pub member_id: String,

    /// Packages toggled on.
    selection: PlanSelection,

    /// Discount, surcharge, tax switch/rate, amount paid.
    inputs: QuoteInputs,

    /// Derived figures; recomputed on every mutation.
    quote: SaleQuote,

    /// How the member is paying.
    pub payment_method: PaymentMethod,

    /// Free-text note carried onto the invoice.
    pub comment: Option<String>,
}

impl SaleSession {
    /// Creates an empty session for a member.
    pub fn new(member_id: impl Into<String>) -> Self {
        SaleSession {
            member_id: member_id.into(),
            selection: PlanSelection::new(),
            inputs: QuoteInputs::default(),
            quote: SaleQuote::zero(),
            payment_method: PaymentMethod::default(),
            comment: None,
        }
    }

    // -------------------------------------------------------------------------
    // State transitions (each re-derives the quote)
    // -------------------------------------------------------------------------

    /// Toggles a package in or out of the sale.
    pub fn toggle_package(&mut self, package: &Package) -> CoreResult<bool> {
        let selected = self.selection.toggle(package)?;
        self.recompute();
        Ok(selected)
    }

    /// Assigns (or clears) the trainer on a selected plan.
    pub fn assign_trainer(
        &mut self,
        package_id: &str,
        trainer_id: Option<String>,
    ) -> CoreResult<()> {
        self.selection.assign_trainer(package_id, trainer_id)
    }

    /// Sets (or clears) the start date on a selected plan.
    pub fn set_start_date(
        &mut self,
        package_id: &str,
        start_date: Option<chrono::NaiveDate>,
    ) -> CoreResult<()> {
        self.selection.set_start_date(package_id, start_date)
    }

    /// Sets the flat discount.
    pub fn set_discount(&mut self, discount: Money) -> CoreResult<()> {
        validation::validate_amount("discount", discount)?;
        self.inputs.discount = discount;
        self.recompute();
        Ok(())
    }

    /// Sets the surcharge (admission/registration fee).
    pub fn set_surcharge(&mut self, surcharge: Money) -> CoreResult<()> {
        validation::validate_amount("surcharge", surcharge)?;
        self.inputs.surcharge = surcharge;
        self.recompute();
        Ok(())
    }

    /// Switches GST on or off.
    pub fn set_apply_taxes(&mut self, apply: bool) {
        self.inputs.apply_taxes = apply;
        self.recompute();
    }

    /// Sets the GST rate used while taxes are on.
    pub fn set_tax_rate(&mut self, rate: TaxRate) -> CoreResult<()> {
        validation::validate_tax_rate_bps(rate.bps())?;
        self.inputs.tax_rate = rate;
        self.recompute();
        Ok(())
    }

    /// Sets the amount collected up front.
    pub fn set_amount_paid(&mut self, amount: Money) -> CoreResult<()> {
        validation::validate_amount("amount paid", amount)?;
        self.inputs.amount_paid = amount;
        self.recompute();
        Ok(())
    }

    /// Sets the invoice comment.
    pub fn set_comment(&mut self, comment: Option<String>) -> CoreResult<()> {
        if let Some(text) = &comment {
            validation::validate_comment(text)?;
        }
        self.comment = comment;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> &PlanSelection {
        &self.selection
    }

    pub fn inputs(&self) -> &QuoteInputs {
        &self.inputs
    }

    /// The current derived quote. Always consistent with the inputs.
    pub fn quote(&self) -> &SaleQuote {
        &self.quote
    }

    fn recompute(&mut self) {
        self.quote = SaleQuote::derive(&self.selection, &self.inputs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DurationUnit, MembershipType};

    fn test_package(id: &str, rupees: i64) -> Package {
        Package {
            id: id.to_string(),
            name: format!("Package {}", id),
            membership_type: MembershipType::General,
            activity: "gym".to_string(),
            duration_value: 1,
            duration_type: DurationUnit::Months,
            base_rate: Money::from_rupees(rupees),
            rack_rate: Money::from_rupees(rupees),
            active: true,
        }
    }

    #[test]
    fn test_quote_tracks_every_mutation() {
        let mut session = SaleSession::new("member-1");
        assert_eq!(*session.quote(), SaleQuote::zero());

        session.toggle_package(&test_package("1", 9000)).unwrap();
        assert_eq!(session.quote().payable, Money::from_rupees(9000));

        session.set_discount(Money::from_rupees(3000)).unwrap();
        assert_eq!(session.quote().payable, Money::from_rupees(6000));

        session.set_apply_taxes(true);
        session.set_tax_rate(TaxRate::from_bps(1800)).unwrap();
        assert_eq!(session.quote().tax_amount, Money::from_rupees(1080));
        assert_eq!(session.quote().payable, Money::from_rupees(7080));

        session.set_amount_paid(Money::from_rupees(5000)).unwrap();
        assert_eq!(session.quote().remaining, Money::from_rupees(2080));

        // deselecting the only plan zeroes everything again
        session.toggle_package(&test_package("1", 9000)).unwrap();
        assert_eq!(*session.quote(), SaleQuote::zero());
    }

    #[test]
    fn test_negative_inputs_rejected_without_mutating() {
        let mut session = SaleSession::new("member-1");
        session.toggle_package(&test_package("1", 9000)).unwrap();

        assert!(session.set_discount(Money::from_rupees(-100)).is_err());
        assert!(session.set_amount_paid(Money::from_rupees(-1)).is_err());

        // quote untouched by the rejected mutations
        assert_eq!(session.quote().payable, Money::from_rupees(9000));
        assert_eq!(session.quote().remaining, Money::from_rupees(9000));
    }

    #[test]
    fn test_tax_rate_out_of_range_rejected() {
        let mut session = SaleSession::new("member-1");
        assert!(session.set_tax_rate(TaxRate::from_bps(10001)).is_err());
        assert!(session.set_tax_rate(TaxRate::from_bps(1800)).is_ok());
    }

    #[test]
    fn test_comment_length_capped() {
        let mut session = SaleSession::new("member-1");
        assert!(session.set_comment(Some("upgraded from Silver".into())).is_ok());
        assert!(session.set_comment(Some("x".repeat(600))).is_err());
    }
}
