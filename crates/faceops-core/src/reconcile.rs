//! Reconcile planning.
//!
//! Compares each profile's `active` flag with membership in the active-name
//! set and produces a per-profile action plan. Planning is pure; issuing the
//! PATCH calls is the caller's job, tallied through [`SyncStats`].

use crate::types::Profile;
use std::collections::HashSet;

/// What to do with one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    /// Profile should be active but is not.
    Activate,
    /// Profile is active but should not be.
    Deactivate,
    /// Profile is already in the desired state; no API call.
    Skip,
}

/// One planned step of a sync run.
#[derive(Debug, Clone)]
pub struct PlannedUpdate {
    pub profile: Profile,
    pub action: ReconcileAction,
}

/// Desired state for a profile: case-insensitive membership in the name set.
pub fn desired_active(name: &str, active_names: &HashSet<String>) -> bool {
    active_names.contains(&name.to_lowercase())
}

/// Compute the desired-state diff for every profile.
///
/// Plan order follows the input order, which is whatever order the server
/// returned the profiles in. It is not stable across runs.
pub fn plan(profiles: &[Profile], active_names: &HashSet<String>) -> Vec<PlannedUpdate> {
    profiles
        .iter()
        .map(|profile| {
            let desired = desired_active(&profile.name, active_names);
            let action = match (profile.active, desired) {
                (false, true) => ReconcileAction::Activate,
                (true, false) => ReconcileAction::Deactivate,
                _ => ReconcileAction::Skip,
            };
            PlannedUpdate {
                profile: profile.clone(),
                action,
            }
        })
        .collect()
}

/// Locate a profile by case-insensitive exact name match.
pub fn find_by_name<'a>(profiles: &'a [Profile], name: &str) -> Option<&'a Profile> {
    let wanted = name.to_lowercase();
    profiles.iter().find(|p| p.name.to_lowercase() == wanted)
}

/// Tally of a sync run. A single failed update never aborts the batch; it
/// lands in `errors` and processing continues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub activated: u32,
    pub deactivated: u32,
    pub skipped: u32,
    pub errors: u32,
}

impl SyncStats {
    /// Record the outcome of one planned step.
    pub fn record(&mut self, action: ReconcileAction, success: bool) {
        match (action, success) {
            (ReconcileAction::Skip, _) => self.skipped += 1,
            (ReconcileAction::Activate, true) => self.activated += 1,
            (ReconcileAction::Deactivate, true) => self.deactivated += 1,
            (_, false) => self.errors += 1,
        }
    }

    /// Total number of profiles processed.
    pub fn total(&self) -> u32 {
        self.activated + self.deactivated + self.skipped + self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, active: bool) -> Profile {
        Profile {
            id: format!("id-{name}"),
            name: name.to_string(),
            active,
        }
    }

    fn names(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plan_activates_and_deactivates() {
        let profiles = vec![profile("Alice", false), profile("Bob", true)];
        let steps = plan(&profiles, &names(&["alice"]));
        assert_eq!(steps[0].action, ReconcileAction::Activate);
        assert_eq!(steps[1].action, ReconcileAction::Deactivate);
    }

    #[test]
    fn test_plan_skips_profiles_already_correct() {
        let profiles = vec![profile("Alice", true), profile("Bob", false)];
        let steps = plan(&profiles, &names(&["alice"]));
        assert!(steps.iter().all(|s| s.action == ReconcileAction::Skip));
    }

    #[test]
    fn test_plan_is_idempotent_after_apply() {
        let mut profiles = vec![
            profile("Alice", false),
            profile("Bob", true),
            profile("Carol", true),
        ];
        let active = names(&["alice", "carol"]);

        for step in plan(&profiles, &active) {
            let desired = desired_active(&step.profile.name, &active);
            for p in profiles.iter_mut().filter(|p| p.id == step.profile.id) {
                p.active = desired;
            }
        }

        let second = plan(&profiles, &active);
        assert!(second.iter().all(|s| s.action == ReconcileAction::Skip));
    }

    #[test]
    fn test_plan_preserves_input_order() {
        let profiles = vec![profile("Zoe", false), profile("Amy", false)];
        let steps = plan(&profiles, &names(&[]));
        assert_eq!(steps[0].profile.name, "Zoe");
        assert_eq!(steps[1].profile.name, "Amy");
    }

    #[test]
    fn test_desired_active_is_case_insensitive() {
        let active = names(&["alice"]);
        assert!(desired_active("ALICE", &active));
        assert!(desired_active("Alice", &active));
        assert!(!desired_active("Bob", &active));
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let profiles = vec![profile("Alice", true), profile("Bob", false)];
        assert_eq!(find_by_name(&profiles, "ALICE").map(|p| p.id.as_str()), Some("id-Alice"));
        assert!(find_by_name(&profiles, "Carol").is_none());
    }

    #[test]
    fn test_stats_record_and_total() {
        let mut stats = SyncStats::default();
        stats.record(ReconcileAction::Activate, true);
        stats.record(ReconcileAction::Deactivate, true);
        stats.record(ReconcileAction::Skip, true);
        stats.record(ReconcileAction::Activate, false);
        assert_eq!(stats.activated, 1);
        assert_eq!(stats.deactivated, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.total(), 4);
    }
}
