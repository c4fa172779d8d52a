//! Domain models with validation at construction
//!
//! Query and path input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod calendar;
pub mod date_key;
pub mod validation;

pub use calendar::{Category, DateDetail, DaySummary, Record, Stats};
pub use date_key::{DateKey, YearMonth};
pub use validation::ValidationError;
