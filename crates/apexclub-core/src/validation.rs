//! # Validation Module
//!
//! Input and submission validation for the sale flows.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Field validators (this module)                                │
//! │  ├── Non-negative amounts, rate range, id format                        │
//! │  └── Run as inputs are set on the session                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Submission rules (this module)                                │
//! │  ├── At least one plan selected                                         │
//! │  ├── PT plans have a trainer                                            │
//! │  └── Renewals have a commitment date                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                       │
//! │  └── Authoritative checks; its message is surfaced verbatim             │
//! │                                                                         │
//! │  Everything in layers 1-2 blocks BEFORE any network call.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::session::SaleSession;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest invoice comment accepted.
pub const MAX_COMMENT_LEN: usize = 500;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a member/package/trainer identifier.
///
/// ## Rules
/// - Must not be empty
/// - Must be a valid UUID
///
/// ## Example
/// ```rust
/// use apexclub_core::validation::validate_id;
///
/// assert!(validate_id("memberId", "550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_id("memberId", "not-a-uuid").is_err());
/// ```
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

/// Validates a monetary input field.
///
/// ## Rules
/// - Must be zero or above; zero is fine (no discount, nothing paid yet)
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a charge that must actually charge something.
///
/// Transfer charges are entered directly rather than derived from plans,
/// so zero is a typo, not a choice.
pub fn validate_positive_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
/// - GST slabs in practice are 0-2800
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

/// Validates an invoice comment.
pub fn validate_comment(comment: &str) -> ValidationResult<()> {
    if comment.len() > MAX_COMMENT_LEN {
        return Err(ValidationError::TooLong {
            field: "comment".to_string(),
            max: MAX_COMMENT_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Submission Rules
// =============================================================================

/// Validates a session for fresh-sale submission.
///
/// ## Rules
/// - At least one plan selected
/// - Every personal-training plan has a trainer assigned
pub fn validate_sale_submission(session: &SaleSession) -> CoreResult<()> {
    if session.selection().is_empty() {
        return Err(CoreError::NothingSelected);
    }

    for plan in session.selection().plans() {
        if plan.membership_type.requires_trainer() && plan.trainer_id.is_none() {
            return Err(CoreError::TrainerRequired {
                plan_name: plan.name.clone(),
            });
        }
    }

    Ok(())
}

/// Validates a session for renewal submission.
///
/// Renewals need everything a fresh sale needs, plus a commitment date
/// on every plan (the renewed term has to start somewhere).
pub fn validate_renewal_submission(session: &SaleSession) -> CoreResult<()> {
    validate_sale_submission(session)?;

    for plan in session.selection().plans() {
        if plan.start_date.is_none() {
            return Err(CoreError::StartDateRequired {
                plan_name: plan.name.clone(),
            });
        }
    }

    Ok(())
}

/// Validates the inputs of a membership transfer.
pub fn validate_transfer(transfer_to_member_id: &str, charge: Money) -> CoreResult<()> {
    validate_id("transferToMemberId", transfer_to_member_id)?;
    validate_positive_amount("transfer charge", charge)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
