//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ GarageController (domain)
//! ```
//!
//! Driven adapters (clock, sensors, actuators, motion delay) implement these
//! traits.  The [`GarageController`](super::service::GarageController)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! Every port is also implemented for `&mut T`, so a caller can lend a
//! collaborator to the controller and keep ownership of it.

use crate::fee::Timestamp;
use crate::sensors::{GARAGE_CAPACITY, SensorId};

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: RTC → domain)
// ───────────────────────────────────────────────────────────────

/// Wall-clock source used as the exit time of a fee calculation.
pub trait ClockSource {
    /// Current local time.  Must not fail: an adapter whose device is
    /// unreachable decides on its own fallback.
    fn now(&mut self) -> Timestamp;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: live occupancy of each bay.
pub trait SensorArray {
    /// Live reading of one sensor; `true` = bay occupied.
    fn read(&mut self, sensor: SensorId) -> bool;

    /// Read every sensor in the fixed order of [`SensorId::ALL`].
    ///
    /// The default performs independent reads, so a car moving between two
    /// of them can be seen twice or not at all.  Adapters that can latch
    /// all inputs at once should override this.
    fn read_all(&mut self) -> [bool; GARAGE_CAPACITY as usize] {
        SensorId::ALL.map(|id| self.read(id))
    }
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorInterface {
    /// Drive the gate servo at the given PWM duty (0–100 %).
    /// `0.0` is the neutral "no drive" signal.
    fn set_position(&mut self, duty_percent: f32);

    /// Switch the full-garage indicator.
    fn set_light(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Motion delay (strategy injected at construction)
// ───────────────────────────────────────────────────────────────

/// Hold between commanding the servo and releasing it.
///
/// Hardware builds block long enough for the gate to finish its swing;
/// simulation and tests use a no-op.
pub trait MotionDelay {
    fn wait(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Borrowed collaborators
// ───────────────────────────────────────────────────────────────

impl<T: ClockSource + ?Sized> ClockSource for &mut T {
    fn now(&mut self) -> Timestamp {
        (**self).now()
    }
}

impl<T: SensorArray + ?Sized> SensorArray for &mut T {
    fn read(&mut self, sensor: SensorId) -> bool {
        (**self).read(sensor)
    }

    fn read_all(&mut self) -> [bool; GARAGE_CAPACITY as usize] {
        (**self).read_all()
    }
}

impl<T: ActuatorInterface + ?Sized> ActuatorInterface for &mut T {
    fn set_position(&mut self, duty_percent: f32) {
        (**self).set_position(duty_percent);
    }

    fn set_light(&mut self, on: bool) {
        (**self).set_light(on);
    }
}

impl<T: MotionDelay + ?Sized> MotionDelay for &mut T {
    fn wait(&mut self) {
        (**self).wait();
    }
}
