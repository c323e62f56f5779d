//! Engine configuration.

use crate::error::{Error, Result};
use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use std::time::Duration;

/// Setup-time configuration for resolution and reporting.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use warranty_kit::config::WarrantyConfig;
///
/// let config = WarrantyConfig::default()
///     .with_lookup_timeout(Duration::from_secs(2))
///     .with_utc_offset_hours(-5)
///     .expect("valid offset");
/// assert_eq!(config.lookup_timeout, Some(Duration::from_secs(2)));
/// ```
#[derive(Clone, Debug)]
pub struct WarrantyConfig {
    /// Upper bound for one inventory lookup. `None` waits indefinitely.
    ///
    /// A lookup that runs out of time is handled like any other lookup
    /// failure: resolution moves on to the unit's copy.
    pub lookup_timeout: Option<Duration>,

    /// Business timezone used to turn the wall clock into an as-of date.
    ///
    /// Only [`WarrantyConfig::today`] reads it. Every engine function takes
    /// its as-of date as a parameter.
    pub utc_offset: FixedOffset,
}

impl Default for WarrantyConfig {
    fn default() -> Self {
        WarrantyConfig {
            lookup_timeout: None,
            utc_offset: Utc.fix(),
        }
    }
}

impl WarrantyConfig {
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    /// Set the business timezone as whole hours east of UTC.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` for offsets outside ±23 hours.
    pub fn with_utc_offset_hours(mut self, hours: i32) -> Result<Self> {
        self.utc_offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| Error::ConfigError(format!("UTC offset out of range: {}h", hours)))?;
        Ok(self)
    }

    /// Current calendar date in the business timezone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.utc_offset).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WarrantyConfig::default();
        assert_eq!(config.lookup_timeout, None);
        assert_eq!(config.utc_offset.local_minus_utc(), 0);
    }

    #[test]
    fn test_utc_offset_builder() {
        let config = WarrantyConfig::default()
            .with_utc_offset_hours(-5)
            .expect("valid offset");
        assert_eq!(config.utc_offset.local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_utc_offset_out_of_range() {
        let err = WarrantyConfig::default().with_utc_offset_hours(24).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_today_is_within_a_day_of_utc() {
        let config = WarrantyConfig::default().with_utc_offset_hours(-10).unwrap();
        let utc_today = Utc::now().date_naive();
        let delta = (utc_today - config.today()).num_days();
        assert!((0..=1).contains(&delta));
    }
}
