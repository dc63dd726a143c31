//! # Domain Types
//!
//! Core domain types used throughout the admin console.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Package      │   │    Trainer      │   │  Subscription   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  package_name   │       │
//! │  │  base_rate      │   │  phone          │   │  start/end date │       │
//! │  │  duration       │   └─────────────────┘   │  amount/balance │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │ MembershipType  │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  General        │   │  Cash           │       │
//! │  │  1800 = 18%     │   │  PersonalTr...  │   │  Card/Upi/Bank  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Packages are immutable reference data fetched from the backend; the
//! console never writes them back.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (standard GST slab for club memberships)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the CGST/SGST component rate as a percentage (for display
    /// only). Each GST half is conventionally half the applied rate.
    #[inline]
    pub fn half_percentage(&self) -> f64 {
        self.percentage() / 2.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Membership Type
// =============================================================================

/// Whether a package is a general membership or personal training.
///
/// Personal-training plans require a trainer to be assigned before the
/// sale can be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MembershipType {
    /// Regular gym-floor membership.
    #[serde(rename = "general")]
    General,
    /// Personal training package (dedicated trainer).
    #[serde(rename = "pt")]
    PersonalTraining,
}

impl MembershipType {
    /// Checks whether this plan type needs a trainer assigned.
    #[inline]
    pub const fn requires_trainer(&self) -> bool {
        matches!(self, MembershipType::PersonalTraining)
    }
}

// =============================================================================
// Plan Duration
// =============================================================================

/// Unit of a package duration, as the backend encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DurationUnit {
    Months,
    Days,
}

/// A package duration (e.g. 3 Months, 90 Days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlanDuration {
    pub value: u32,
    pub unit: DurationUnit,
}

impl PlanDuration {
    pub const fn new(value: u32, unit: DurationUnit) -> Self {
        PlanDuration { value, unit }
    }

    /// Computes the exclusive end date for a plan starting on `start`.
    ///
    /// Month arithmetic is calendar-aware: Jan 31 + 1 month lands on the
    /// last day of February. Overflow far past any real membership
    /// saturates instead of panicking.
    pub fn end_date(&self, start: NaiveDate) -> NaiveDate {
        let end = match self.unit {
            DurationUnit::Months => start.checked_add_months(Months::new(self.value)),
            DurationUnit::Days => start.checked_add_days(Days::new(self.value as u64)),
        };
        end.unwrap_or(NaiveDate::MAX)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the member settles the payable amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash at the front desk.
    Cash,
    /// Card payment on the club terminal.
    Card,
    /// UPI transfer.
    Upi,
    /// Direct bank transfer.
    BankTransfer,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Package
// =============================================================================

/// A purchasable membership offering, fetched from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Package {
    /// Unique identifier (UUID).
    pub id: String,

    /// Display name shown on the sale screens.
    pub name: String,

    /// General membership or personal training.
    #[serde(rename = "type")]
    pub membership_type: MembershipType,

    /// Activity the package covers (gym, swimming, crossfit, ...).
    pub activity: String,

    /// Duration value (interpreted with `duration_type`).
    pub duration_value: u32,

    /// Duration unit.
    pub duration_type: DurationUnit,

    /// Selling rate in paise. Copied onto a plan at selection time.
    pub base_rate: Money,

    /// List/rack rate in paise (pre-discount display price).
    pub rack_rate: Money,

    /// Whether the package is currently offered.
    pub active: bool,
}

impl Package {
    /// Returns the duration as a single value.
    #[inline]
    pub fn duration(&self) -> PlanDuration {
        PlanDuration::new(self.duration_value, self.duration_type)
    }
}

// =============================================================================
// Trainer
// =============================================================================

/// A trainer employee, assignable to personal-training plans.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Trainer {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
}

// =============================================================================
// Subscription
// =============================================================================

/// A member's instance of a purchased package.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Subscription {
    pub id: String,
    pub package_id: String,
    pub package_name: String,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    /// Invoiced amount.
    pub amount: Money,
    /// Outstanding balance on the invoice.
    pub balance: Money,
}

/// Derived lifecycle state of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Starts in the future.
    Upcoming,
    /// Covers today.
    Active,
    /// End date has passed.
    Expired,
}

impl Subscription {
    /// Derives the lifecycle status as of the given date.
    ///
    /// `end_date` is exclusive: a subscription ending today is expired.
    pub fn status_on(&self, date: NaiveDate) -> SubscriptionStatus {
        if date < self.start_date {
            SubscriptionStatus::Upcoming
        } else if date < self.end_date {
            SubscriptionStatus::Active
        } else {
            SubscriptionStatus::Expired
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert!((rate.percentage() - 18.0).abs() < 0.001);
        assert!((rate.half_percentage() - 9.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(18.0);
        assert_eq!(rate.bps(), 1800);
    }

    #[test]
    fn test_membership_type_serde_names() {
        assert_eq!(
            serde_json::to_string(&MembershipType::General).unwrap(),
            "\"general\""
        );
        assert_eq!(
            serde_json::to_string(&MembershipType::PersonalTraining).unwrap(),
            "\"pt\""
        );
    }

    #[test]
    fn test_requires_trainer() {
        assert!(!MembershipType::General.requires_trainer());
        assert!(MembershipType::PersonalTraining.requires_trainer());
    }

    #[test]
    fn test_duration_months() {
        let duration = PlanDuration::new(3, DurationUnit::Months);
        assert_eq!(duration.end_date(date(2025, 1, 15)), date(2025, 4, 15));
    }

    #[test]
    fn test_duration_months_clamps_to_month_end() {
        let duration = PlanDuration::new(1, DurationUnit::Months);
        assert_eq!(duration.end_date(date(2025, 1, 31)), date(2025, 2, 28));
        assert_eq!(duration.end_date(date(2024, 1, 31)), date(2024, 2, 29));
    }

    #[test]
    fn test_duration_days() {
        let duration = PlanDuration::new(90, DurationUnit::Days);
        assert_eq!(duration.end_date(date(2025, 1, 1)), date(2025, 4, 1));
    }

    #[test]
    fn test_subscription_status() {
        let sub = Subscription {
            id: "s1".to_string(),
            package_id: "p1".to_string(),
            package_name: "Gold".to_string(),
            start_date: date(2025, 2, 1),
            end_date: date(2025, 5, 1),
            amount: Money::from_rupees(9000),
            balance: Money::zero(),
        };

        assert_eq!(sub.status_on(date(2025, 1, 31)), SubscriptionStatus::Upcoming);
        assert_eq!(sub.status_on(date(2025, 2, 1)), SubscriptionStatus::Active);
        assert_eq!(sub.status_on(date(2025, 4, 30)), SubscriptionStatus::Active);
        // exclusive end date
        assert_eq!(sub.status_on(date(2025, 5, 1)), SubscriptionStatus::Expired);
    }

    #[test]
    fn test_package_round_trip_field_names() {
        let package = Package {
            id: "c0ffee00-0000-4000-8000-000000000001".to_string(),
            name: "Gold Annual".to_string(),
            membership_type: MembershipType::General,
            activity: "gym".to_string(),
            duration_value: 12,
            duration_type: DurationUnit::Months,
            base_rate: Money::from_rupees(9000),
            rack_rate: Money::from_rupees(12000),
            active: true,
        };

        let value = serde_json::to_value(&package).unwrap();
        assert_eq!(value["type"], "general");
        assert_eq!(value["durationValue"], 12);
        assert_eq!(value["durationType"], "Months");
        assert_eq!(value["baseRate"], 900000);
        assert!(value["active"].as_bool().unwrap());
    }
}
