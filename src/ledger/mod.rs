//! Record collections and their derived aggregate queries.
//!
//! Each collection exclusively owns its records; presentation reads snapshots
//! and derived values and writes through the validated operations. Aggregates
//! are always recomputed from the full collection, never cached.

pub mod fixed_expense;
pub mod goal;
pub mod icon;
pub mod transaction;

pub use fixed_expense::{FixedExpense, FixedExpenseRegistry};
pub use goal::{Goal, GoalTracker};
pub use icon::IconTag;
pub use transaction::{Transaction, TransactionKind, TransactionLedger};
