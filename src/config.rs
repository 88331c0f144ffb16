//! System configuration parameters
//!
//! All tunable parameters for the ParkGate controller.
//! Defaults match the deployed garage; a JSON document may override any
//! subset of them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GarageConfig {
    // --- Fees ---
    /// Price per started hour, in currency units
    pub hourly_rate: f64,
    /// Multiplier applied when the car entered on a Saturday or Sunday
    pub weekend_multiplier: f64,

    // --- Gate servo ---
    /// Servo PWM duty (%) for the raised (open) gate
    pub door_open_duty_percent: f32,
    /// Servo PWM duty (%) for the lowered (closed) gate
    pub door_closed_duty_percent: f32,
    /// Time the servo needs to complete a swing (milliseconds)
    pub servo_settle_ms: u32,

    // --- Timing ---
    /// How often the main loop re-evaluates the full indicator (milliseconds)
    pub light_poll_interval_ms: u32,
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            // Fees
            hourly_rate: 2.5,
            weekend_multiplier: 1.25,

            // Gate servo
            door_open_duty_percent: 12.0,  // ~180°
            door_closed_duty_percent: 2.0, // ~0°
            servo_settle_ms: 1000,

            // Timing
            light_poll_interval_ms: 1000, // 1 Hz
        }
    }
}

impl GarageConfig {
    /// Parse a JSON document and validate the result.
    ///
    /// Fields missing from the document keep their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the controller misbehave.
    /// Invalid ranges are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if !self.hourly_rate.is_finite() || self.hourly_rate < 0.0 {
            return Err(Error::Config("hourly_rate must be a non-negative number"));
        }
        if !self.weekend_multiplier.is_finite() || self.weekend_multiplier < 1.0 {
            return Err(Error::Config("weekend_multiplier must be >= 1.0"));
        }
        for duty in [self.door_open_duty_percent, self.door_closed_duty_percent] {
            if !(0.0..=100.0).contains(&duty) {
                return Err(Error::Config("door duty must be within 0-100%"));
            }
        }
        if self.door_open_duty_percent == self.door_closed_duty_percent {
            return Err(Error::Config("open and closed door duty must differ"));
        }
        if self.light_poll_interval_ms == 0 {
            return Err(Error::Config("light_poll_interval_ms must be > 0"));
        }
        Ok(())
    }
}
