pub mod alloy;
pub mod balances;
pub mod comparison;
pub mod config;
pub mod dashboard;
pub mod disk_storage;
pub mod error;
pub mod format;
pub mod log;
pub mod metrics;
pub mod scheduler;
pub mod tokens;

pub use error::{Result, UtilsError as Error};
