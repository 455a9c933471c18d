//! evplan-domain
//!
//! Pure domain models for event budgeting (parameters, breakdowns, forms, scenarios).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod breakdown;
pub mod expense;
pub mod forms;
pub mod params;
pub mod preferences;
pub mod scenario;

pub use breakdown::*;
pub use expense::*;
pub use forms::*;
pub use params::*;
pub use preferences::*;
pub use scenario::*;
