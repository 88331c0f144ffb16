//! Unified error types for the ParkGate firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! caller-facing error handling uniform.  All variants are `Copy` so they
//! can be returned from the controller without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The pin number is not wired to one of the occupancy sensors
    /// (e.g. the indicator LED pin was passed by mistake).
    InvalidSensor(u8),
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSensor(pin) => write!(f, "pin {pin} is not an occupancy sensor"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
