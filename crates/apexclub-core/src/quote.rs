//! # Sale Quote Derivation
//!
//! The pricing math behind every sale screen: fresh sale, renewal, and
//! membership transfer all derive their figures here.
//!
//! ## Derivation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quote Derivation                                     │
//! │                                                                         │
//! │  Σ plan costs ──► + surcharge ──► − discount ──► clamp ≥ 0             │
//! │                                                      │                  │
//! │                                                  subtotal               │
//! │                                                      │                  │
//! │                          apply_taxes? ── yes ──► × tax rate             │
//! │                                │                     │                  │
//! │                                no                   tax ──► CGST/SGST   │
//! │                                │                     │                  │
//! │                                └──────► tax = 0 ─────┤                  │
//! │                                                      ▼                  │
//! │                               payable = subtotal + tax                  │
//! │                                                      │                  │
//! │                     remaining = max(0, payable − amount paid)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Derivation is a pure function of the selection and the inputs. It runs
//! synchronously on every input change, so displayed totals are never stale.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::selection::PlanSelection;
use crate::types::TaxRate;

// =============================================================================
// Quote Inputs
// =============================================================================

/// The mutable pricing inputs on a sale screen.
///
/// Everything the operator can type or tick that feeds the derivation,
/// separate from which plans are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteInputs {
    /// Flat discount applied before tax.
    pub discount: Money,

    /// Additive fee (admission/registration charge) applied before tax.
    pub surcharge: Money,

    /// Whether GST applies to this invoice.
    pub apply_taxes: bool,

    /// GST rate used when `apply_taxes` is set.
    pub tax_rate: TaxRate,

    /// Amount collected up front.
    pub amount_paid: Money,
}

// =============================================================================
// Sale Quote
// =============================================================================

/// The derived financial figures for a sale.
///
/// Every field is recomputed together; callers never patch one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SaleQuote {
    /// Sum of the frozen plan costs (or the flat base amount for a
    /// transfer charge).
    pub plans_total: Money,

    /// Plans total plus surcharge minus discount, clamped at zero.
    pub subtotal: Money,

    /// GST on the subtotal (zero when taxes are off).
    pub tax_amount: Money,

    /// Central GST half of `tax_amount`.
    pub cgst: Money,

    /// State GST half of `tax_amount` (carries the odd paisa).
    pub sgst: Money,

    /// Subtotal plus tax.
    pub payable: Money,

    /// Payable minus amount paid, clamped at zero.
    pub remaining: Money,
}

impl SaleQuote {
    /// The all-zero quote shown before anything is selected.
    pub const fn zero() -> Self {
        SaleQuote {
            plans_total: Money::zero(),
            subtotal: Money::zero(),
            tax_amount: Money::zero(),
            cgst: Money::zero(),
            sgst: Money::zero(),
            payable: Money::zero(),
            remaining: Money::zero(),
        }
    }

    /// Derives a quote from the current selection and inputs.
    ///
    /// ## Edge Cases
    /// - Empty selection ⇒ the whole quote is zero, regardless of the
    ///   other inputs. A discount with nothing to discount is noise.
    /// - `apply_taxes == false` ⇒ tax is forced to zero whatever the rate.
    /// - Amount paid above payable ⇒ remaining clamps to zero.
    pub fn derive(selection: &PlanSelection, inputs: &QuoteInputs) -> SaleQuote {
        if selection.is_empty() {
            return SaleQuote::zero();
        }
        SaleQuote::from_amount(selection.plans_total(), inputs)
    }

    /// Derives a quote from a flat base amount.
    ///
    /// The transfer screen prices a transfer charge rather than a set of
    /// plans; it shares the rest of the pipeline with the sale screens.
    pub fn from_amount(base: Money, inputs: &QuoteInputs) -> SaleQuote {
        let subtotal = (base + inputs.surcharge - inputs.discount).clamp_non_negative();

        let tax_amount = if inputs.apply_taxes {
            subtotal.calculate_tax(inputs.tax_rate)
        } else {
            Money::zero()
        };
        let (cgst, sgst) = tax_amount.split_gst();

        let payable = subtotal + tax_amount;
        let remaining = (payable - inputs.amount_paid).clamp_non_negative();

        SaleQuote {
            plans_total: base,
            subtotal,
            tax_amount,
            cgst,
            sgst,
            payable,
            remaining,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
