//! # Plan Selection
//!
//! State for the set of packages an operator has toggled on during a sale.
//!
//! ## Selection Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection State Operations                           │
//! │                                                                         │
//! │  Screen Action            Transition                State Change        │
//! │  ─────────────            ──────────                ────────────        │
//! │                                                                         │
//! │  Tick package  ──────────► toggle() ───────────────► plans.push(plan)  │
//! │                                                                         │
//! │  Tick again  ────────────► toggle() ───────────────► plans.remove(i)   │
//! │                                                                         │
//! │  Pick trainer  ──────────► assign_trainer() ───────► plan.trainer_id   │
//! │                                                                         │
//! │  Pick start date ────────► set_start_date() ───────► plan.start_date   │
//! │                                                                         │
//! │  Cancel sale  ───────────► clear() ────────────────► plans.clear()     │
//! │                                                                         │
//! │  NOTE: toggling is idempotent per package id - the second toggle       │
//! │        always restores the set to its prior contents.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{MembershipType, Package, PlanDuration};
use crate::MAX_SELECTED_PLANS;

/// A package the operator has toggled on for the current sale.
///
/// ## Design Notes
/// - `package_id`: Reference to the package (for the submission payload)
/// - The remaining fields are a frozen copy of the package at toggle time.
///   The quote keeps displaying consistent figures even if the package is
///   edited on the backend mid-sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SelectedPlan {
    /// Package ID (UUID)
    pub package_id: String,

    /// Package name at toggle time (frozen)
    pub name: String,

    /// General or personal training (frozen)
    pub membership_type: MembershipType,

    /// Plan duration (frozen)
    pub duration: PlanDuration,

    /// Cost in paise at toggle time (frozen)
    /// This is critical: we lock in the base rate when the plan is selected
    pub cost: Money,

    /// Assigned trainer, if any. Required for personal-training plans.
    pub trainer_id: Option<String>,

    /// Commitment/start date chosen for this plan.
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,
}

impl SelectedPlan {
    /// Creates a selected plan from a package.
    ///
    /// ## Cost Freezing
    /// The cost is captured at this moment. If the package rate changes
    /// on the backend, this plan retains the original cost.
    pub fn from_package(package: &Package) -> Self {
        SelectedPlan {
            package_id: package.id.clone(),
            name: package.name.clone(),
            membership_type: package.membership_type,
            duration: package.duration(),
            cost: package.base_rate,
            trainer_id: None,
            start_date: None,
        }
    }

    /// Derives the plan's exclusive end date, when a start date is set.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.start_date.map(|start| self.duration.end_date(start))
    }
}

/// The set of plans selected for the current sale.
///
/// ## Invariants
/// - Plans are unique by `package_id` (toggling flips membership)
/// - Trainer and start date live on the selected plan; deselecting a plan
///   drops them with it
/// - Maximum selected plans: `MAX_SELECTED_PLANS`
#[derive(Debug, Clone, Serialize, Deserialize, Default, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlanSelection {
    plans: Vec<SelectedPlan>,
}

impl PlanSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        PlanSelection { plans: Vec::new() }
    }

    /// Toggles a package in or out of the selection.
    ///
    /// ## Behavior
    /// - If the package is selected: removes it (with its trainer/date)
    /// - If not: adds a frozen snapshot of it
    ///
    /// ## Returns
    /// `true` if the package is selected after the call, `false` if it
    /// was just deselected.
    pub fn toggle(&mut self, package: &Package) -> CoreResult<bool> {
        if self.is_selected(&package.id) {
            self.plans.retain(|p| p.package_id != package.id);
            return Ok(false);
        }

        if !package.active {
            return Err(CoreError::PackageInactive {
                name: package.name.clone(),
            });
        }

        if self.plans.len() >= MAX_SELECTED_PLANS {
            return Err(ValidationError::OutOfRange {
                field: "selected plans".to_string(),
                min: 0,
                max: MAX_SELECTED_PLANS as i64,
            }
            .into());
        }

        self.plans.push(SelectedPlan::from_package(package));
        Ok(true)
    }

    /// Checks whether a package is currently selected.
    pub fn is_selected(&self, package_id: &str) -> bool {
        self.plans.iter().any(|p| p.package_id == package_id)
    }

    /// Assigns (or clears) the trainer on a selected plan.
    pub fn assign_trainer(
        &mut self,
        package_id: &str,
        trainer_id: Option<String>,
    ) -> CoreResult<()> {
        let plan = self.plan_mut(package_id)?;
        plan.trainer_id = trainer_id;
        Ok(())
    }

    /// Sets (or clears) the start date on a selected plan.
    pub fn set_start_date(
        &mut self,
        package_id: &str,
        start_date: Option<NaiveDate>,
    ) -> CoreResult<()> {
        let plan = self.plan_mut(package_id)?;
        plan.start_date = start_date;
        Ok(())
    }

    /// Clears the whole selection.
    pub fn clear(&mut self) {
        self.plans.clear();
    }

    /// Returns the selected plans in toggle order.
    pub fn plans(&self) -> &[SelectedPlan] {
        &self.plans
    }

    /// Returns the number of selected plans.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Checks if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Sums the frozen costs of all selected plans.
    pub fn plans_total(&self) -> Money {
        self.plans.iter().map(|p| p.cost).sum()
    }

    fn plan_mut(&mut self, package_id: &str) -> CoreResult<&mut SelectedPlan> {
        self.plans
            .iter_mut()
            .find(|p| p.package_id == package_id)
            .ok_or_else(|| CoreError::PlanNotSelected {
                package_id: package_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DurationUnit;

    fn test_package(id: &str, rupees: i64) -> Package {
        Package {
            id: id.to_string(),
            name: format!("Package {}", id),
            membership_type: MembershipType::General,
            activity: "gym".to_string(),
            duration_value: 3,
            duration_type: DurationUnit::Months,
            base_rate: Money::from_rupees(rupees),
            rack_rate: Money::from_rupees(rupees + 1000),
            active: true,
        }
    }

    fn pt_package(id: &str, rupees: i64) -> Package {
        Package {
            membership_type: MembershipType::PersonalTraining,
            ..test_package(id, rupees)
        }
    }

    #[test]
    fn test_toggle_selects() {
        let mut selection = PlanSelection::new();
        let package = test_package("1", 9000);

        assert!(selection.toggle(&package).unwrap());
        assert_eq!(selection.len(), 1);
        assert!(selection.is_selected("1"));
        assert_eq!(selection.plans_total(), Money::from_rupees(9000));
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = PlanSelection::new();
        let a = test_package("1", 5000);
        let b = test_package("2", 3000);

        selection.toggle(&a).unwrap();
        selection.toggle(&b).unwrap();

        // toggling b twice leaves exactly the original set
        assert!(!selection.toggle(&b).unwrap());
        selection.toggle(&b).unwrap();

        assert_eq!(selection.len(), 2);
        assert!(selection.is_selected("1"));
        assert!(selection.is_selected("2"));
    }

    #[test]
    fn test_cost_is_frozen_at_toggle_time() {
        let mut selection = PlanSelection::new();
        let mut package = test_package("1", 9000);

        selection.toggle(&package).unwrap();
        package.base_rate = Money::from_rupees(12000);

        assert_eq!(selection.plans_total(), Money::from_rupees(9000));
    }

    #[test]
    fn test_inactive_package_rejected() {
        let mut selection = PlanSelection::new();
        let mut package = test_package("1", 9000);
        package.active = false;

        let err = selection.toggle(&package).unwrap_err();
        assert!(matches!(err, CoreError::PackageInactive { .. }));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_deselect_drops_trainer_and_date() {
        let mut selection = PlanSelection::new();
        let package = pt_package("1", 15000);

        selection.toggle(&package).unwrap();
        selection
            .assign_trainer("1", Some("trainer-9".to_string()))
            .unwrap();
        selection
            .set_start_date("1", NaiveDate::from_ymd_opt(2025, 3, 1))
            .unwrap();

        // off and back on: fields start clean
        selection.toggle(&package).unwrap();
        selection.toggle(&package).unwrap();

        let plan = &selection.plans()[0];
        assert!(plan.trainer_id.is_none());
        assert!(plan.start_date.is_none());
    }

    #[test]
    fn test_field_updates_require_selection() {
        let mut selection = PlanSelection::new();

        let err = selection
            .assign_trainer("missing", Some("trainer-9".to_string()))
            .unwrap_err();
        assert!(matches!(err, CoreError::PlanNotSelected { .. }));

        let err = selection
            .set_start_date("missing", NaiveDate::from_ymd_opt(2025, 3, 1))
            .unwrap_err();
        assert!(matches!(err, CoreError::PlanNotSelected { .. }));
    }

    #[test]
    fn test_plan_end_date() {
        let mut selection = PlanSelection::new();
        let package = test_package("1", 9000); // 3 months

        selection.toggle(&package).unwrap();
        selection
            .set_start_date("1", NaiveDate::from_ymd_opt(2025, 1, 15))
            .unwrap();

        assert_eq!(
            selection.plans()[0].end_date(),
            NaiveDate::from_ymd_opt(2025, 4, 15)
        );
    }

    #[test]
    fn test_clear() {
        let mut selection = PlanSelection::new();
        selection.toggle(&test_package("1", 9000)).unwrap();
        selection.toggle(&test_package("2", 5000)).unwrap();

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.plans_total(), Money::zero());
    }
}
