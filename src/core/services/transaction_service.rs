//! Boundary between the transaction form and the ledger.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::currency::{parse_amount, LocaleConfig};
use crate::ledger::{Transaction, TransactionKind, TransactionLedger};

/// Form-shaped transaction input. `amount` arrives as the raw text the user
/// typed and is parsed with the locale before any record is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub occurred_at: NaiveDateTime,
}

/// Provides validated operations over the transaction ledger.
pub struct TransactionService;

impl TransactionService {
    /// Parses and validates a draft, then records it at the head of the
    /// ledger. Rejection is atomic: a failed call inserts nothing.
    pub fn add(
        ledger: &mut TransactionLedger,
        draft: TransactionDraft,
        locale: &LocaleConfig,
    ) -> ServiceResult<Transaction> {
        let amount = parse_amount(&draft.amount, locale)?;
        ledger.add(
            draft.kind,
            amount,
            draft.category,
            draft.description,
            draft.occurred_at,
        )
    }

    /// Removes the transaction identified by `id`; idempotent.
    pub fn remove(ledger: &mut TransactionLedger, id: Uuid) {
        ledger.remove(id);
    }

    /// Returns a snapshot of the ledger's records, most recent first.
    pub fn list(ledger: &TransactionLedger) -> Vec<&Transaction> {
        ledger.iter().collect()
    }
}
