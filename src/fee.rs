//! Parking fee computation.
//!
//! Fees are charged per *started* hour: the elapsed time is rounded up to
//! the next whole hour, multiplied by the hourly rate, and surcharged when
//! the car entered on a weekend.  The weekday of the **entry** timestamp
//! decides the surcharge, even if the car leaves on a different day.
//!
//! Inputs are not validated.  An exit before the entry yields whatever the
//! arithmetic produces (zero or a negative amount); supplying a past entry
//! time is the caller's job.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Weekday};

use crate::config::GarageConfig;

/// Wall-clock instant used throughout the controller.
pub type Timestamp = NaiveDateTime;

const SECS_PER_HOUR: i64 = 3600;

/// A monetary amount owed for one stay.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FeeQuote(f64);

impl FeeQuote {
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl From<FeeQuote> for f64 {
    fn from(q: FeeQuote) -> Self {
        q.0
    }
}

/// Tariff: hourly rate plus weekend multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    hourly_rate: f64,
    weekend_multiplier: f64,
}

impl FeeSchedule {
    pub const fn new(hourly_rate: f64, weekend_multiplier: f64) -> Self {
        Self {
            hourly_rate,
            weekend_multiplier,
        }
    }

    pub fn from_config(config: &GarageConfig) -> Self {
        Self::new(config.hourly_rate, config.weekend_multiplier)
    }

    /// Number of started hours between `entry` and `exit`.
    pub fn billable_hours(entry: Timestamp, exit: Timestamp) -> f64 {
        let elapsed = exit - entry;
        // Ceiling over whole seconds plus the sub-second remainder, down to
        // the nanosecond.  `num_seconds` truncates toward zero, so the
        // remainder carries the sign of `elapsed`.
        let secs = elapsed.num_seconds();
        let frac = elapsed - TimeDelta::seconds(secs);
        let partial = secs.rem_euclid(SECS_PER_HOUR) != 0 || frac > TimeDelta::zero();
        (secs.div_euclid(SECS_PER_HOUR) + i64::from(partial)) as f64
    }

    pub fn is_weekend(ts: Timestamp) -> bool {
        matches!(ts.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Price a stay from `entry` to `exit`.
    pub fn quote(&self, entry: Timestamp, exit: Timestamp) -> FeeQuote {
        let mut fee = Self::billable_hours(entry, exit) * self.hourly_rate;
        if Self::is_weekend(entry) {
            fee *= self.weekend_multiplier;
        }
        FeeQuote(fee)
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::from_config(&GarageConfig::default())
    }
}
