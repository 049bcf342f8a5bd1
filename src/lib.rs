#![doc(test(attr(deny(warnings))))]

//! Miao Ledger is a personal expense tracker with multiple ledgers, monthly
//! summaries and a category ranking, driven from a terminal shell.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Miao Ledger tracing initialized.");
    });
}
