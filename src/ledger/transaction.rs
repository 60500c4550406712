use std::collections::VecDeque;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Direction of a ledger entry. Sign lives here, never in the amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single income or expense event.
///
/// Records are immutable once created; the only lifecycle transition is
/// removal by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub occurred_at: NaiveDateTime,
}

impl Transaction {
    /// Signed contribution of this record to the running balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Append-only list of income/expense events, most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionLedger {
    #[serde(default)]
    transactions: VecDeque<Transaction>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new transaction at the head of the ledger and returns it.
    ///
    /// Rejects a non-positive amount and a blank category; a rejected call
    /// leaves the ledger untouched.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        category: impl Into<String>,
        description: Option<String>,
        occurred_at: NaiveDateTime,
    ) -> Result<Transaction, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ValidationError::EmptyField("category"));
        }
        let transaction = Transaction {
            id: Uuid::new_v4(),
            kind,
            amount,
            category,
            description,
            occurred_at,
        };
        self.transactions.push_front(transaction.clone());
        tracing::debug!(id = %transaction.id, kind = ?transaction.kind, "transaction recorded");
        Ok(transaction)
    }

    /// Removes the transaction with `id` if present. Removing an unknown id
    /// is a no-op: the caller may hold a stale id from an already-applied
    /// removal, and the two cases are indistinguishable.
    pub fn remove(&mut self, id: Uuid) {
        self.transactions.retain(|txn| txn.id != id);
    }

    pub fn get(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Iterates over all records, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Total-to-date balance: income minus expense over every surviving
    /// record. Recomputed from the full sequence on each call.
    pub fn balance(&self) -> Decimal {
        self.transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    /// Sum of amounts for one kind over every surviving record.
    pub fn total_by_kind(&self, kind: TransactionKind) -> Decimal {
        self.total_by_kind_in(kind, |_| true)
    }

    /// Sum of amounts for one kind, restricted to records whose timestamp
    /// satisfies `period`. The predicate is caller-supplied; the ledger has
    /// no notion of a current period.
    pub fn total_by_kind_in<P>(&self, kind: TransactionKind, period: P) -> Decimal
    where
        P: Fn(NaiveDateTime) -> bool,
    {
        self.transactions
            .iter()
            .filter(|txn| txn.kind == kind && period(txn.occurred_at))
            .map(|txn| txn.amount)
            .sum()
    }
}
