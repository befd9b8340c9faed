pub mod config;
pub mod error;
pub mod telemetry;
pub mod valuation;

pub use valuation::{evaluate, JobInput, JobScore, ValuationEngine, ValuationError, ValueTier};
