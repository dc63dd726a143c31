//! # Submission Payloads
//!
//! Request bodies for the sale, renewal, and transfer endpoints, plus the
//! acknowledgement shape they return.
//!
//! Each payload mirrors the derived quote fields the screen displayed at
//! submit time - the backend records what the operator saw, it does not
//! re-derive. All money travels as integer paise.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use apexclub_core::error::{CoreError, CoreResult};
use apexclub_core::{Money, PaymentMethod, SaleQuote, SaleSession, SelectedPlan};

// =============================================================================
// Fresh Sale
// =============================================================================

/// Body of `POST /api/admin/members/sale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshSaleRequest {
    pub member_id: String,
    pub selected_plans: Vec<SelectedPlan>,
    /// Payable amount (subtotal + tax).
    pub total_amount: Money,
    pub sub_total: Money,
    pub tax_amount: Money,
    pub paid_amount: Money,
    pub discount: Money,
    pub payment_method: PaymentMethod,
    pub comment: Option<String>,
    /// Operator who closed the sale.
    pub closed_by: String,
}

impl FreshSaleRequest {
    /// Builds the payload from a validated session.
    ///
    /// Callers run `validation::validate_sale_submission` first; this is
    /// a straight projection of the session, not a second rule check.
    pub fn from_session(session: &SaleSession, closed_by: impl Into<String>) -> Self {
        let quote = session.quote();
        FreshSaleRequest {
            member_id: session.member_id.clone(),
            selected_plans: session.selection().plans().to_vec(),
            total_amount: quote.payable,
            sub_total: quote.subtotal,
            tax_amount: quote.tax_amount,
            paid_amount: session.inputs().amount_paid,
            discount: session.inputs().discount,
            payment_method: session.payment_method,
            comment: session.comment.clone(),
            closed_by: closed_by.into(),
        }
    }
}

// =============================================================================
// Renewal
// =============================================================================

/// Body of `POST /api/admin/members/renew`.
///
/// Same financial fields as a fresh sale, plus the renewed package and its
/// committed term.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewRequest {
    pub member_id: String,
    /// The primary renewed package.
    pub package_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub selected_plans: Vec<SelectedPlan>,
    pub total_amount: Money,
    pub sub_total: Money,
    pub tax_amount: Money,
    pub paid_amount: Money,
    pub discount: Money,
    pub payment_method: PaymentMethod,
    pub comment: Option<String>,
    pub closed_by: String,
}

impl RenewRequest {
    /// Builds the payload from a validated renewal session.
    ///
    /// The first selected plan names the renewed package and its term;
    /// `validation::validate_renewal_submission` has already guaranteed a
    /// selection with commitment dates, so the errors here are the same
    /// rules restated for callers that skipped validation.
    pub fn from_session(
        session: &SaleSession,
        closed_by: impl Into<String>,
    ) -> CoreResult<Self> {
        let plan = session
            .selection()
            .plans()
            .first()
            .ok_or(CoreError::NothingSelected)?;
        let start_date = plan.start_date.ok_or_else(|| CoreError::StartDateRequired {
            plan_name: plan.name.clone(),
        })?;
        let end_date = plan.duration.end_date(start_date);

        let quote = session.quote();
        Ok(RenewRequest {
            member_id: session.member_id.clone(),
            package_id: plan.package_id.clone(),
            start_date,
            end_date,
            selected_plans: session.selection().plans().to_vec(),
            total_amount: quote.payable,
            sub_total: quote.subtotal,
            tax_amount: quote.tax_amount,
            paid_amount: session.inputs().amount_paid,
            discount: session.inputs().discount,
            payment_method: session.payment_method,
            comment: session.comment.clone(),
            closed_by: closed_by.into(),
        })
    }
}

// =============================================================================
// Transfer
// =============================================================================

/// Body of `POST /api/admin/members/:id/transfer`.
///
/// Note the backend's field names here differ from the sale endpoints
/// (`paymentMode`, not `paymentMethod`) - kept as the wire demands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub transfer_to_member_id: String,
    pub transfer_charge: Money,
    pub sub_total: Money,
    pub tax_amount: Money,
    pub payment_mode: PaymentMethod,
    pub comment: Option<String>,
    pub closed_by: String,
}

impl TransferRequest {
    /// Builds the payload from a priced transfer charge.
    pub fn new(
        transfer_to_member_id: impl Into<String>,
        charge: Money,
        quote: &SaleQuote,
        payment_mode: PaymentMethod,
        comment: Option<String>,
        closed_by: impl Into<String>,
    ) -> Self {
        TransferRequest {
            transfer_to_member_id: transfer_to_member_id.into(),
            transfer_charge: charge,
            sub_total: quote.subtotal,
            tax_amount: quote.tax_amount,
            payment_mode,
            comment,
            closed_by: closed_by.into(),
        }
    }
}

// =============================================================================
// Acknowledgement
// =============================================================================

/// What the write endpoints answer on success.
///
/// Some deployments return a bare 200 with no body; everything here is
/// optional and defaults to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAck {
    pub message: Option<String>,
    pub invoice_number: Option<String>,
}

/// Error-body shape used by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMessage {
    pub message: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use apexclub_core::types::{DurationUnit, MembershipType, Package, TaxRate};

    fn package(id: &str, rupees: i64) -> Package {
        Package {
            id: id.to_string(),
            name: format!("Package {}", id),
            membership_type: MembershipType::General,
            activity: "gym".to_string(),
            duration_value: 3,
            duration_type: DurationUnit::Months,
            base_rate: Money::from_rupees(rupees),
            rack_rate: Money::from_rupees(rupees),
            active: true,
        }
    }

    fn priced_session() -> SaleSession {
        let mut session = SaleSession::new("member-1");
        session.toggle_package(&package("1", 5000)).unwrap();
        session.toggle_package(&package("2", 3000)).unwrap();
        session.set_surcharge(Money::from_rupees(500)).unwrap();
        session.set_apply_taxes(true);
        session.set_tax_rate(TaxRate::from_bps(1800)).unwrap();
        session.set_amount_paid(Money::from_rupees(4000)).unwrap();
        session
    }

    #[test]
    fn test_fresh_sale_mirrors_quote() {
        let session = priced_session();
        let request = FreshSaleRequest::from_session(&session, "admin");

        assert_eq!(request.sub_total, Money::from_rupees(8500));
        assert_eq!(request.tax_amount, Money::from_rupees(1530));
        assert_eq!(request.total_amount, Money::from_rupees(10030));
        assert_eq!(request.paid_amount, Money::from_rupees(4000));
        assert_eq!(request.selected_plans.len(), 2);
        assert_eq!(request.closed_by, "admin");
    }

    #[test]
    fn test_fresh_sale_wire_field_names() {
        let request = FreshSaleRequest::from_session(&priced_session(), "admin");
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("memberId").is_some());
        assert!(value.get("selectedPlans").is_some());
        assert!(value.get("totalAmount").is_some());
        assert!(value.get("subTotal").is_some());
        assert!(value.get("taxAmount").is_some());
        assert!(value.get("paidAmount").is_some());
        assert!(value.get("paymentMethod").is_some());
        assert!(value.get("closedBy").is_some());
        assert_eq!(value["paymentMethod"], "cash");
    }

    #[test]
    fn test_renew_requires_selection_and_date() {
        let session = SaleSession::new("member-1");
        assert!(matches!(
            RenewRequest::from_session(&session, "admin"),
            Err(CoreError::NothingSelected)
        ));

        let mut session = SaleSession::new("member-1");
        session.toggle_package(&package("1", 5000)).unwrap();
        assert!(matches!(
            RenewRequest::from_session(&session, "admin"),
            Err(CoreError::StartDateRequired { .. })
        ));
    }

    #[test]
    fn test_renew_derives_end_date() {
        let mut session = SaleSession::new("member-1");
        session.toggle_package(&package("1", 5000)).unwrap();
        session
            .set_start_date("1", NaiveDate::from_ymd_opt(2025, 1, 15))
            .unwrap();

        let request = RenewRequest::from_session(&session, "admin").unwrap();
        assert_eq!(request.package_id, "1");
        assert_eq!(
            request.end_date,
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
        );
    }

    #[test]
    fn test_transfer_uses_payment_mode_key() {
        let inputs = apexclub_core::QuoteInputs {
            apply_taxes: true,
            tax_rate: TaxRate::from_bps(1800),
            ..Default::default()
        };
        let quote = SaleQuote::from_amount(Money::from_rupees(500), &inputs);
        let request = TransferRequest::new(
            "member-2",
            Money::from_rupees(500),
            &quote,
            PaymentMethod::Upi,
            None,
            "admin",
        );

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("paymentMode").is_some());
        assert!(value.get("paymentMethod").is_none());
        assert_eq!(value["transferToMemberId"], "member-2");
        assert_eq!(value["taxAmount"], 9000); // ₹90 in paise
    }

    #[test]
    fn test_ack_tolerates_empty_body() {
        let ack: ApiAck = serde_json::from_str("{}").unwrap();
        assert!(ack.message.is_none());

        let ack: ApiAck =
            serde_json::from_str(r#"{"message":"Sale recorded","invoiceNumber":"INV-042"}"#)
                .unwrap();
        assert_eq!(ack.message.as_deref(), Some("Sale recorded"));
        assert_eq!(ack.invoice_number.as_deref(), Some("INV-042"));
    }
}
