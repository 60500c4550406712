//! Boundary between the goal form and the tracker.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::currency::{parse_amount, LocaleConfig};
use crate::ledger::{Goal, GoalTracker, IconTag};

/// Form-shaped goal input. `target` arrives as raw text; the accumulated
/// amount always starts at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDraft {
    pub name: String,
    pub icon: IconTag,
    pub target: String,
}

/// Provides validated operations over the goal tracker.
pub struct GoalService;

impl GoalService {
    /// Parses and validates a draft, then appends it to the tracker.
    pub fn add(
        tracker: &mut GoalTracker,
        draft: GoalDraft,
        locale: &LocaleConfig,
    ) -> ServiceResult<Goal> {
        let target = parse_amount(&draft.target, locale)?;
        tracker.add(draft.name, draft.icon, target)
    }

    /// Replaces the accumulated amount of the goal identified by `id`,
    /// parsing `amount` with the locale first.
    pub fn update_current(
        tracker: &mut GoalTracker,
        id: Uuid,
        amount: &str,
        locale: &LocaleConfig,
    ) -> ServiceResult<()> {
        let new_current = parse_amount(amount, locale)?;
        tracker.update_current(id, new_current)
    }

    /// Removes the goal identified by `id`; idempotent.
    pub fn remove(tracker: &mut GoalTracker, id: Uuid) {
        tracker.remove(id);
    }

    /// Returns a snapshot of the tracker in insertion order.
    pub fn list(tracker: &GoalTracker) -> Vec<&Goal> {
        tracker.iter().collect()
    }
}
