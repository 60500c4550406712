use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::icon::IconTag;
use crate::errors::ValidationError;

/// A recurring monthly obligation tracked by due day and amount.
///
/// `due_day` is range-checked but not calendar-aware: 31 is accepted for
/// every month. Scheduling and notifications are outside the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedExpense {
    pub id: Uuid,
    pub name: String,
    pub icon: IconTag,
    pub due_day: u8,
    pub amount: Decimal,
}

/// Insertion-ordered list of fixed expenses with an on-demand monthly total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixedExpenseRegistry {
    #[serde(default)]
    expenses: Vec<FixedExpense>,
}

impl FixedExpenseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fixed expense and returns the created record.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        icon: IconTag,
        due_day: u8,
        amount: Decimal,
    ) -> Result<FixedExpense, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        if !(1..=31).contains(&due_day) {
            return Err(ValidationError::DueDayOutOfRange(due_day));
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        let expense = FixedExpense {
            id: Uuid::new_v4(),
            name,
            icon,
            due_day,
            amount,
        };
        self.expenses.push(expense.clone());
        tracing::debug!(id = %expense.id, due_day = expense.due_day, "fixed expense added");
        Ok(expense)
    }

    /// Removes the expense with `id` if present; removing an unknown id is a
    /// no-op.
    pub fn remove(&mut self, id: Uuid) {
        self.expenses.retain(|expense| expense.id != id);
    }

    pub fn get(&self, id: Uuid) -> Option<&FixedExpense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FixedExpense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum over all current records, recomputed on every call so the total
    /// can never drift from the underlying set.
    pub fn monthly_total(&self) -> Decimal {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn due_day_bounds_are_inclusive() {
        let mut registry = FixedExpenseRegistry::new();
        registry
            .add("Rent", IconTag::default(), 1, dec!(2000))
            .unwrap();
        registry
            .add("Insurance", IconTag::default(), 31, dec!(120))
            .unwrap();
        for bad in [0, 32, 99] {
            let err = registry
                .add("Broken", IconTag::default(), bad, dec!(10))
                .unwrap_err();
            assert_eq!(err, ValidationError::DueDayOutOfRange(bad));
        }
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn icon_tag_passes_through_unchanged() {
        let mut registry = FixedExpenseRegistry::new();
        let icon = IconTag::new("wifi", "#F3E5F5");
        let created = registry.add("Internet", icon.clone(), 10, dec!(150)).unwrap();
        assert_eq!(created.icon, icon);
        assert_eq!(registry.get(created.id).unwrap().icon, icon);
    }
}
