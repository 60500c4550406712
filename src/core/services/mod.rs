pub mod fixed_expense_service;
pub mod goal_service;
pub mod summary_service;
pub mod transaction_service;

pub use fixed_expense_service::{FixedExpenseDraft, FixedExpenseService};
pub use goal_service::{GoalDraft, GoalService};
pub use summary_service::{GoalProgress, OverviewSummary, SummaryService};
pub use transaction_service::{TransactionDraft, TransactionService};

use crate::errors::ValidationError;

pub type ServiceResult<T> = Result<T, ValidationError>;
