//! # apexclub-core: Pure Business Logic for the Apex Club Console
//!
//! This crate is the **heart** of the admin console. It contains all sale
//! pricing and selection logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Apex Club Console Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Admin SPA (React)                            │   │
//! │  │    Packages ──► Plan Selection ──► Quote ──► Submit             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings (ts-rs)          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ apexclub-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ selection │  │   quote   │  │   │
//! │  │   │  Package  │  │   Money   │  │ PlanSel.  │  │ SaleQuote │  │   │
//! │  │   │  Trainer  │  │  GST calc │  │ toggle()  │  │ derive()  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                apexclub-client (REST client)                    │   │
//! │  │        bearer auth, payload building, error taxonomy            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Package, Trainer, Subscription, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`selection`] - Plan toggling and per-plan trainer/date state
//! - [`quote`] - Pure quote derivation (subtotal, GST split, remaining)
//! - [`session`] - The typed sale-form aggregate
//! - [`error`] - Domain error types
//! - [`validation`] - Field and submission validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derivation is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use apexclub_core::money::Money;
//! use apexclub_core::quote::{QuoteInputs, SaleQuote};
//! use apexclub_core::types::TaxRate;
//!
//! // Price a flat charge at the standard GST slab
//! let inputs = QuoteInputs {
//!     apply_taxes: true,
//!     tax_rate: TaxRate::from_bps(apexclub_core::STANDARD_GST_BPS),
//!     ..QuoteInputs::default()
//! };
//! let quote = SaleQuote::from_amount(Money::from_rupees(8500), &inputs);
//!
//! assert_eq!(quote.tax_amount, Money::from_rupees(1530));
//! assert_eq!(quote.cgst + quote.sgst, quote.tax_amount);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod quote;
pub mod selection;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use apexclub_core::Money` instead of
// `use apexclub_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use quote::{QuoteInputs, SaleQuote};
pub use selection::{PlanSelection, SelectedPlan};
pub use session::SaleSession;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Standard GST slab for club memberships, in basis points (18%).
///
/// ## Why a constant?
/// Every sale screen defaults its tax rate to this slab; the operator can
/// still override it per invoice. Slab changes land in exactly one place.
pub const STANDARD_GST_BPS: u32 = 1800;

/// Maximum plans allowed on a single sale
///
/// ## Business Reason
/// Prevents runaway invoices from a stuck key or a scripted client.
/// Real sales bundle two or three plans at most.
pub const MAX_SELECTED_PLANS: usize = 25;
