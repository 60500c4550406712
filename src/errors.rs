use thiserror::Error;
use uuid::Uuid;

/// Error type covering every invariant checked at a mutation boundary.
///
/// Validation happens only when a record is created or updated; a rejected
/// operation never leaves a partial record behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("due day {0} is outside 1..=31")]
    DueDayOutOfRange(u8),
    #[error("`{0}` is not a day of the month")]
    UnparseableDueDay(String),
    #[error("goal target must be greater than zero")]
    NonPositiveTarget,
    #[error("goal current amount must not be negative")]
    NegativeCurrent,
    #[error("`{0}` is not a valid amount")]
    UnparseableAmount(String),
    #[error("no goal with id {0}")]
    UnknownGoal(Uuid),
}
