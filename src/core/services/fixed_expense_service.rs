//! Boundary between the fixed-expense form and the registry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::currency::{parse_amount, LocaleConfig};
use crate::errors::ValidationError;
use crate::ledger::{FixedExpense, FixedExpenseRegistry, IconTag};

/// Form-shaped fixed-expense input. `amount` and `due_day` arrive as raw
/// text; both are parsed here before the registry is touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedExpenseDraft {
    pub name: String,
    pub icon: IconTag,
    pub due_day: String,
    pub amount: String,
}

/// Provides validated operations over the fixed-expense registry.
pub struct FixedExpenseService;

impl FixedExpenseService {
    /// Parses and validates a draft, then appends it to the registry.
    pub fn add(
        registry: &mut FixedExpenseRegistry,
        draft: FixedExpenseDraft,
        locale: &LocaleConfig,
    ) -> ServiceResult<FixedExpense> {
        let amount = parse_amount(&draft.amount, locale)?;
        let due_day = draft
            .due_day
            .trim()
            .parse::<u8>()
            .map_err(|_| ValidationError::UnparseableDueDay(draft.due_day.clone()))?;
        registry.add(draft.name, draft.icon, due_day, amount)
    }

    /// Removes the expense identified by `id`; idempotent. User confirmation
    /// is a presentation concern; removal here is unconditional.
    pub fn remove(registry: &mut FixedExpenseRegistry, id: Uuid) {
        registry.remove(id);
    }

    /// Returns a snapshot of the registry in insertion order.
    pub fn list(registry: &FixedExpenseRegistry) -> Vec<&FixedExpense> {
        registry.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(name: &str, due_day: &str, amount: &str) -> FixedExpenseDraft {
        FixedExpenseDraft {
            name: name.into(),
            icon: IconTag::new("home", "#E3F2FD"),
            due_day: due_day.into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn draft_fields_are_parsed() {
        let mut registry = FixedExpenseRegistry::new();
        let locale = LocaleConfig::default();
        let expense =
            FixedExpenseService::add(&mut registry, draft("Aluguel", "5", "2.000,00"), &locale)
                .unwrap();
        assert_eq!(expense.due_day, 5);
        assert_eq!(expense.amount, dec!(2000.00));
    }

    #[test]
    fn unparseable_due_day_inserts_nothing() {
        let mut registry = FixedExpenseRegistry::new();
        let locale = LocaleConfig::default();
        let err = FixedExpenseService::add(&mut registry, draft("Internet", "dez", "150,00"), &locale)
            .unwrap_err();
        assert_eq!(err, ValidationError::UnparseableDueDay("dez".into()));
        assert!(registry.is_empty());
    }
}
