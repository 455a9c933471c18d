#![doc(test(attr(deny(warnings))))]

//! EVPLAN prices events from a city, venue, catering choice and service list,
//! and wraps the budget engine with reports, saved preferences and a CLI.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("EVPLAN tracing initialized.");
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
