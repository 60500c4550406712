#![doc(test(attr(deny(warnings))))]

//! Finance Core provides the in-memory ledger, fixed-expense, and savings-goal
//! primitives behind a personal finance tracker UI.
//!
//! State is session-local: collections live for the process lifetime and all
//! derived values (balance, totals, goal progress) are recomputed on demand.

pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
