use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::icon::IconTag;
use crate::errors::ValidationError;

/// A savings goal: a target amount tracked against an accumulated amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub icon: IconTag,
    pub current: Decimal,
    pub target: Decimal,
}

impl Goal {
    /// Progress towards the target as a percentage, clamped to 100.
    ///
    /// `target` is guaranteed positive by the creation invariant, so this
    /// never divides by zero.
    pub fn progress(&self) -> Decimal {
        (self.current / self.target * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
    }
}

/// Insertion-ordered list of savings goals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalTracker {
    #[serde(default)]
    goals: Vec<Goal>,
}

impl GoalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a goal with `current` starting at zero and returns it.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        icon: IconTag,
        target: Decimal,
    ) -> Result<Goal, ValidationError> {
        if target <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveTarget);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        let goal = Goal {
            id: Uuid::new_v4(),
            name,
            icon,
            current: Decimal::ZERO,
            target,
        };
        self.goals.push(goal.clone());
        tracing::debug!(id = %goal.id, "goal added");
        Ok(goal)
    }

    /// Replaces the accumulated amount of the goal with `id`.
    ///
    /// Unlike removal, updating names a record the caller expects to exist,
    /// so an unknown id is an error rather than a no-op. `current` may exceed
    /// `target`; progress still clamps at 100.
    pub fn update_current(&mut self, id: Uuid, new_current: Decimal) -> Result<(), ValidationError> {
        if new_current < Decimal::ZERO {
            return Err(ValidationError::NegativeCurrent);
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(ValidationError::UnknownGoal(id))?;
        goal.current = new_current;
        Ok(())
    }

    /// Removes the goal with `id` if present; removing an unknown id is a
    /// no-op.
    pub fn remove(&mut self, id: Uuid) {
        self.goals.retain(|goal| goal.id != id);
    }

    pub fn get(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}
