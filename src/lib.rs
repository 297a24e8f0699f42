#![doc(test(attr(deny(warnings))))]

//! Dashboard Core turns a raw transaction ledger into the derived series a small
//! business finance dashboard renders: monthly revenue/expense/profit buckets,
//! ranked expense categories, period-over-period deltas and formatted amounts.
//!
//! Every aggregation is a pure function of its inputs. Loading rows is delegated
//! to a caller-supplied [`LedgerSource`](crate::core::source::LedgerSource).

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use errors::{EngineError, EngineResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dashboard Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
