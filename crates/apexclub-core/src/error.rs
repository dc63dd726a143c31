//! # Error Types
//!
//! Domain-specific error types for apexclub-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  apexclub-core errors (this file)                                       │
//! │  ├── CoreError        - Sale/selection rule violations                  │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  apexclub-client errors (separate crate)                                │
//! │  └── ClientError      - Transport + backend API failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → (console) → operator message       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (plan name, package id)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Sale-flow rule violations.
///
/// These block a submission before any network call is made; the session
/// stays intact so the operator can correct and resubmit.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A submission was attempted with no plans selected.
    #[error("No plan selected")]
    NothingSelected,

    /// A personal-training plan has no trainer assigned.
    ///
    /// ## When This Occurs
    /// - PT package toggled on, trainer dropdown never touched
    /// - Trainer cleared by a deselect/reselect cycle
    #[error("Trainer must be assigned for {plan_name}")]
    TrainerRequired { plan_name: String },

    /// A plan needs a commitment/start date before submission.
    #[error("Start date is required for {plan_name}")]
    StartDateRequired { plan_name: String },

    /// A per-plan field update referenced a package that is not selected.
    #[error("Package not selected: {package_id}")]
    PlanNotSelected { package_id: String },

    /// An inactive package cannot be added to a sale.
    #[error("Package is not available for sale: {name}")]
    PackageInactive { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when operator input doesn't meet requirements.
/// Used for early validation before the sale rules run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or above.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., invalid UUID, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TrainerRequired {
            plan_name: "PT 12 Sessions".to_string(),
        };
        assert_eq!(err.to_string(), "Trainer must be assigned for PT 12 Sessions");

        let err = CoreError::NothingSelected;
        assert_eq!(err.to_string(), "No plan selected");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "memberId".to_string(),
        };
        assert_eq!(err.to_string(), "memberId is required");

        let err = ValidationError::MustBeNonNegative {
            field: "discount".to_string(),
        };
        assert_eq!(err.to_string(), "discount cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "memberId".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
