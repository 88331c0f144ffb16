//! Application service: the hexagonal core.
//!
//! [`GarageController`] owns the door and indicator state and decides
//! every actuator command.  All I/O flows through the port traits it is
//! constructed with, making the entire controller testable with mock
//! adapters.
//!
//! ```text
//!  ClockSource ──▶ ┌──────────────────────────┐
//!  SensorArray ──▶ │     GarageController     │ ──▶ ActuatorInterface
//!  MotionDelay ◀── │  occupancy · fees · gate │
//!                  └──────────────────────────┘
//! ```
//!
//! The controller is request-driven: it never polls on its own.  The
//! caller decides when to check occupancy, price a stay, or move the gate.

use log::{debug, info};

use crate::config::GarageConfig;
use crate::error::Result;
use crate::fee::{FeeQuote, FeeSchedule, Timestamp};
use crate::sensors::{GARAGE_CAPACITY, SensorId};

use super::ports::{ActuatorInterface, ClockSource, MotionDelay, SensorArray};
use super::state::{DoorState, LightState};

/// Servo duty that removes drive from the actuator.
pub const NEUTRAL_DUTY: f32 = 0.0;

// ───────────────────────────────────────────────────────────────
// GarageController
// ───────────────────────────────────────────────────────────────

/// The garage controller orchestrates all domain logic.
pub struct GarageController<C, S, A, D> {
    clock: C,
    sensors: S,
    actuator: A,
    delay: D,
    fees: FeeSchedule,
    open_duty: f32,
    closed_duty: f32,
    door: DoorState,
    light: LightState,
}

impl<C, S, A, D> GarageController<C, S, A, D>
where
    C: ClockSource,
    S: SensorArray,
    A: ActuatorInterface,
    D: MotionDelay,
{
    /// Construct the controller and move the gate to its closed reference
    /// position.
    ///
    /// `config` is expected to be validated already.
    pub fn new(clock: C, sensors: S, actuator: A, delay: D, config: &GarageConfig) -> Self {
        let mut garage = Self {
            clock,
            sensors,
            actuator,
            delay,
            fees: FeeSchedule::from_config(config),
            open_duty: config.door_open_duty_percent,
            closed_duty: config.door_closed_duty_percent,
            door: DoorState::Closed,
            light: LightState::Off,
        };
        garage.change_actuator_position(garage.closed_duty);
        info!(
            "GarageController ready: door={:?} light={:?} rate={}/h",
            garage.door, garage.light, config.hourly_rate
        );
        garage
    }

    // ── Occupancy ─────────────────────────────────────────────

    /// Live reading of the sensor wired to `pin`.
    ///
    /// Fails with [`Error::InvalidSensor`](crate::error::Error::InvalidSensor)
    /// when `pin` is not one of the three sensor pins.
    pub fn check_occupancy(&mut self, pin: u8) -> Result<bool> {
        let sensor = SensorId::try_from(pin)?;
        Ok(self.read_sensor(sensor))
    }

    pub fn read_sensor(&mut self, sensor: SensorId) -> bool {
        self.sensors.read(sensor)
    }

    /// Number of occupied bays, `0..=GARAGE_CAPACITY`.
    pub fn count_occupied_spots(&mut self) -> u8 {
        let readings = self.sensors.read_all();
        readings.iter().filter(|&&occupied| occupied).count() as u8
    }

    pub fn available_spots(&mut self) -> u8 {
        GARAGE_CAPACITY - self.count_occupied_spots()
    }

    pub fn is_full(&mut self) -> bool {
        self.count_occupied_spots() == GARAGE_CAPACITY
    }

    // ── Fees ──────────────────────────────────────────────────

    /// Price a stay that started at `entry` and ends now.
    pub fn calculate_parking_fee(&mut self, entry: Timestamp) -> FeeQuote {
        let exit = self.clock.now();
        let quote = self.fees.quote(entry, exit);
        debug!("fee: entry={} exit={} -> {:.3}", entry, exit, quote.amount());
        quote
    }

    // ── Gate ──────────────────────────────────────────────────

    pub fn open_door(&mut self) {
        self.change_actuator_position(self.open_duty);
        self.set_door(DoorState::Open);
    }

    pub fn close_door(&mut self) {
        self.change_actuator_position(self.closed_duty);
        self.set_door(DoorState::Closed);
    }

    /// Command the servo, hold while it swings, then release it.
    pub fn change_actuator_position(&mut self, duty_percent: f32) {
        self.actuator.set_position(duty_percent);
        self.delay.wait();
        self.actuator.set_position(NEUTRAL_DUTY);
    }

    fn set_door(&mut self, next: DoorState) {
        if self.door == next {
            debug!("door: re-issued {:?}", next);
        } else {
            info!("door: {:?} -> {:?}", self.door, next);
        }
        self.door = next;
    }

    // ── Indicator ─────────────────────────────────────────────

    pub fn turn_on_light(&mut self) {
        self.switch_light(true);
    }

    pub fn turn_off_light(&mut self) {
        self.switch_light(false);
    }

    /// Light on iff every bay is occupied.
    pub fn update_light_policy(&mut self) {
        let full = self.count_occupied_spots() == GARAGE_CAPACITY;
        if full {
            self.turn_on_light();
        } else {
            self.turn_off_light();
        }
    }

    fn switch_light(&mut self, on: bool) {
        self.actuator.set_light(on);
        let next = LightState::from(on);
        if self.light != next {
            info!("light: {:?} -> {:?}", self.light, next);
        }
        self.light = next;
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn door_state(&self) -> DoorState {
        self.door
    }

    pub fn light_state(&self) -> LightState {
        self.light
    }

    pub fn fee_schedule(&self) -> FeeSchedule {
        self.fees
    }
}
