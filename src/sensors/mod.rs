//! Occupancy sensor identities.
//!
//! The garage has exactly three bays, each watched by one infrared sensor
//! wired to a fixed pin (see [`crate::pins`]).  Raw pin numbers coming
//! from callers are validated here; everything past this point works with
//! the typed [`SensorId`].

use core::fmt;

use crate::error::Error;
use crate::pins;

/// Number of parking bays (and sensors).
pub const GARAGE_CAPACITY: u8 = 3;

/// One of the three sensor positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorId {
    Bay1,
    Bay2,
    Bay3,
}

impl SensorId {
    /// All sensors, in the fixed read order.
    pub const ALL: [SensorId; GARAGE_CAPACITY as usize] = [Self::Bay1, Self::Bay2, Self::Bay3];

    /// 1-based bay position.
    pub const fn position(self) -> u8 {
        match self {
            Self::Bay1 => 1,
            Self::Bay2 => 2,
            Self::Bay3 => 3,
        }
    }

    /// Board pin the sensor is wired to.
    pub const fn pin(self) -> u8 {
        match self {
            Self::Bay1 => pins::INFRARED_PIN1,
            Self::Bay2 => pins::INFRARED_PIN2,
            Self::Bay3 => pins::INFRARED_PIN3,
        }
    }

    /// Index into a `[_; GARAGE_CAPACITY]` reading array.
    pub const fn index(self) -> usize {
        self.position() as usize - 1
    }
}

impl TryFrom<u8> for SensorId {
    type Error = Error;

    /// Map a board pin number to its sensor.
    fn try_from(pin: u8) -> Result<Self, Error> {
        match pin {
            pins::INFRARED_PIN1 => Ok(Self::Bay1),
            pins::INFRARED_PIN2 => Ok(Self::Bay2),
            pins::INFRARED_PIN3 => Ok(Self::Bay3),
            other => Err(Error::InvalidSensor(other)),
        }
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bay {} (pin {})", self.position(), self.pin())
    }
}
