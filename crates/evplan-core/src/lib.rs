//! evplan-core
//!
//! Budget engine and planning services for EVPLAN.
//! Depends on evplan-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod engine;
pub mod error;
pub mod expense_service;
pub mod metrics;
pub mod pricing;
pub mod scenario_service;
pub mod storage;
pub mod sync;
pub mod templates;
pub mod validation;

pub use engine::*;
pub use error::CoreError;
pub use expense_service::*;
pub use metrics::*;
pub use pricing::*;
pub use scenario_service::*;
pub use sync::*;
pub use templates::*;
pub use validation::*;
