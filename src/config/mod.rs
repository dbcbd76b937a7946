//! Configuration loading and management for the Hours and Overtime Engine.
//!
//! Configuration is one small JSON file with two values: the daily quota in
//! decimal hours and the overtime multiplier. It is loaded at startup
//! (defaults substituted and re-persisted if the file is missing or
//! corrupt) and mutated only through an explicit validate-then-save update.
//!
//! # Example
//!
//! ```no_run
//! use timeclock_engine::config::ConfigStore;
//!
//! let store = ConfigStore::new("config.json");
//! let config = store.load_or_default();
//! println!("daily quota: {} h", config.daily_quota_hours);
//! ```

mod store;
mod types;

pub use store::ConfigStore;
pub use types::{DEFAULT_DAILY_QUOTA_HOURS, DEFAULT_OVERTIME_MULTIPLIER, EngineConfig};
