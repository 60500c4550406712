//! Derived read views for summary screens.
//!
//! Every figure here is recomputed from the owning collection on each call.
//! A manually-authored headline balance shown by the presentation layer is
//! deliberately not unified with these: the core exposes the derived
//! computations distinctly and the consuming layer decides what to display.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::ledger::{FixedExpenseRegistry, GoalTracker, TransactionKind, TransactionLedger};

/// Home-screen totals, each derived fresh from its collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OverviewSummary {
    pub balance: Decimal,
    pub income_total: Decimal,
    pub expense_total: Decimal,
    pub fixed_monthly_total: Decimal,
}

/// Per-goal progress row for the goals screen.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GoalProgress {
    pub id: Uuid,
    pub name: String,
    pub current: Decimal,
    pub target: Decimal,
    pub progress: Decimal,
}

pub struct SummaryService;

impl SummaryService {
    pub fn overview(
        ledger: &TransactionLedger,
        fixed: &FixedExpenseRegistry,
    ) -> OverviewSummary {
        OverviewSummary {
            balance: ledger.balance(),
            income_total: ledger.total_by_kind(TransactionKind::Income),
            expense_total: ledger.total_by_kind(TransactionKind::Expense),
            fixed_monthly_total: fixed.monthly_total(),
        }
    }

    pub fn goal_progress(tracker: &GoalTracker) -> Vec<GoalProgress> {
        tracker
            .iter()
            .map(|goal| GoalProgress {
                id: goal.id,
                name: goal.name.clone(),
                current: goal.current,
                target: goal.target,
                progress: goal.progress(),
            })
            .collect()
    }
}
