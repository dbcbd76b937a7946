//! Configuration types for the Hours and Overtime Engine.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::format_hhmm;

/// Default daily quota: 8.8 decimal hours, i.e. 8h48m.
pub const DEFAULT_DAILY_QUOTA_HOURS: Decimal = Decimal::from_parts(88, 0, 0, false, 1);

/// Default overtime multiplier: 1.5 (a 50% premium).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Process-wide calculation configuration.
///
/// Passed into every evaluation call as an immutable snapshot; mutation
/// happens only through [`ConfigStore::update`](super::ConfigStore::update),
/// which validates both fields atomically before persisting. A missing field
/// in the persisted file falls back to its default, so older configuration
/// files keep loading after new fields are added.
///
/// # Example
///
/// ```
/// use timeclock_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.quota_seconds(), 31_680); // 8.8 h
/// assert_eq!(config.quota_display(), "08:48");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Expected daily worked duration, in decimal hours. Must be in (0, 24].
    #[serde(default = "default_daily_quota_hours")]
    pub daily_quota_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime. Must be > 0.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

fn default_daily_quota_hours() -> Decimal {
    DEFAULT_DAILY_QUOTA_HOURS
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig {
            daily_quota_hours: DEFAULT_DAILY_QUOTA_HOURS,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl EngineConfig {
    /// Validates both fields, reporting the first violation.
    pub fn validate(&self) -> EngineResult<()> {
        if self.daily_quota_hours <= Decimal::ZERO || self.daily_quota_hours > Decimal::from(24) {
            return Err(EngineError::InvalidConfig {
                field: "daily_quota_hours".to_string(),
                message: "must be greater than 0 and at most 24".to_string(),
            });
        }
        if self.overtime_multiplier <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "overtime_multiplier".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// The daily quota in whole seconds, truncated.
    pub fn quota_seconds(&self) -> i64 {
        (self.daily_quota_hours * Decimal::from(3600))
            .trunc()
            .to_i64()
            .unwrap_or(0)
    }

    /// The daily quota in whole minutes, truncated.
    pub fn quota_minutes(&self) -> i64 {
        (self.daily_quota_hours * Decimal::from(60))
            .trunc()
            .to_i64()
            .unwrap_or(0)
    }

    /// The daily quota rendered as `HH:MM`, for the per-record
    /// quota-reference column.
    pub fn quota_display(&self) -> String {
        format_hhmm(self.quota_minutes())
    }
}
