//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many billing screens:                                               │
//! │    ₹9000.00 × 18% GST = 1619.9999999999998  → Displayed as ₹1620.00    │
//! │    but SUBMITTED as 1619.9999999999998!                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    900000 paise × 1800 bps = 162000 paise, exactly                     │
//! │    The invoice, the payload, and the display all agree                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use apexclub_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_paise(900000); // ₹9000.00
//!
//! // Whole-rupee package rates are common reference data
//! let same = Money::from_rupees(9000);
//! assert_eq!(price, same);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(9000.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediates (discount exceeding total)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Package.base_rate ──► SelectedPlan.cost ──► SaleQuote.plans_total     │
/// │                                                                         │
/// │  SaleQuote.subtotal ──► GST Calculation ──► SaleQuote.payable          │
/// │                                  │                                      │
/// │                                  └──► CGST / SGST split                 │
/// │                                                                         │
/// │  EVERY monetary value in the console flows through this type           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use apexclub_core::money::Money;
    ///
    /// let price = Money::from_paise(900000); // Represents ₹9000.00
    /// assert_eq!(price.paise(), 900000);
    /// ```
    ///
    /// ## Why Paise?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// Quote math, payloads, and the API all use paise.
    /// Only the UI converts to rupees for display.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Package rates arrive from the backend as whole-rupee figures
    /// (₹9000, ₹5000), so this constructor shows up throughout the
    /// reference data and the tests.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise (smallest currency unit).
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps the value to zero or above.
    ///
    /// ## Example
    /// ```rust
    /// use apexclub_core::money::Money;
    ///
    /// // Discount larger than the plan total
    /// let subtotal = Money::from_rupees(6000) - Money::from_rupees(9000);
    /// assert_eq!(subtotal.clamp_non_negative(), Money::zero());
    /// ```
    #[inline]
    pub const fn clamp_non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Calculates tax for this amount at the given rate.
    ///
    /// ## Implementation
    /// We use integer math: `(amount * bps + 5000) / 10000`
    /// The +5000 provides half-up rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use apexclub_core::money::Money;
    /// use apexclub_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_rupees(8500);
    /// let rate = TaxRate::from_bps(1800); // 18% GST
    ///
    /// let tax = subtotal.calculate_tax(rate);
    /// assert_eq!(tax, Money::from_rupees(1530));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        // rate.bps() is basis points: 1800 = 18%
        let tax_paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paise(tax_paise as i64)
    }

    /// Splits a GST amount into its CGST and SGST halves.
    ///
    /// ## The CGST/SGST Split
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  Indian GST on an intra-state sale is collected in two halves:      │
    /// │                                                                     │
    /// │    18% GST  =  9% CGST (central)  +  9% SGST (state)                │
    /// │                                                                     │
    /// │  The invoice must show both lines, and they must sum back to the   │
    /// │  total tax EXACTLY. An odd paisa cannot vanish between the lines.  │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// CGST takes the floored half; SGST carries the odd paisa, so
    /// `cgst + sgst == self` always holds.
    pub const fn split_gst(&self) -> (Money, Money) {
        let cgst = Money(self.0 / 2);
        let sgst = Money(self.0 - cgst.0);
        (cgst, sgst)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for receipts and debugging. The SPA formats for locale itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for duration/quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over selected plan costs.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
