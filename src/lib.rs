#![doc(test(attr(deny(warnings))))]

//! PF Ledger computes a month-by-month provident-fund statement for one
//! financial year: lowest-balance interest bases, per-month interest under a
//! selectable rounding policy, and a non-compounding balance roll-forward,
//! plus table and printable-statement rendering.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod input;
pub mod ledger;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("PF Ledger tracing initialized.");
    });
}
