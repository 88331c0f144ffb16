//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements          | Connects to                  |
//! |------------|---------------------|------------------------------|
//! | `hardware` | SensorArray         | IR sensor GPIO inputs        |
//! |            | ActuatorInterface   | Servo PWM, indicator GPIO    |
//! | `time`     | ClockSource         | DS3231 RTC / system clock    |
//!
//! The [`MotionDelay`](crate::app::ports::MotionDelay) strategies live
//! with the drivers in [`crate::drivers::motion`].

pub mod hardware;
pub mod time;
