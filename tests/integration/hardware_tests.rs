//! Hardware adapters driven by the controller through fake
//! `embedded-hal` pins.  Collaborators are lent to the controller by
//! `&mut` so the test can inspect them afterwards.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{self, ErrorKind, InputPin, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};
use parkgate::GarageController;
use parkgate::adapters::hardware::{BaySensors, GateActuator};
use parkgate::app::state::LightState;
use parkgate::config::GarageConfig;
use parkgate::drivers::motion::NoDelay;
use parkgate::pins;

use super::mock_hw::{MockClock, at};

// ── Fake pins ─────────────────────────────────────────────────

#[derive(Clone)]
struct Input {
    level: Rc<Cell<Option<bool>>>, // None = bus error
}

impl Input {
    fn new(level: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(Some(level))),
        }
    }
}

impl digital::ErrorType for Input {
    type Error = ErrorKind;
}

impl InputPin for Input {
    fn is_high(&mut self) -> Result<bool, ErrorKind> {
        self.level.get().ok_or(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, ErrorKind> {
        self.is_high().map(|h| !h)
    }
}

#[derive(Default)]
struct Output {
    high: bool,
}

impl digital::ErrorType for Output {
    type Error = core::convert::Infallible;
}

impl OutputPin for Output {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

#[derive(Default)]
struct Pwm {
    history: Vec<u16>,
}

impl pwm::ErrorType for Pwm {
    type Error = core::convert::Infallible;
}

impl SetDutyCycle for Pwm {
    fn max_duty_cycle(&self) -> u16 {
        10_000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.history.push(duty);
        Ok(())
    }
}

fn clock() -> MockClock {
    MockClock(Rc::new(Cell::new(at(2025, 11, 20, 12, 0))))
}

// ── Tests ─────────────────────────────────────────────────────

#[test]
fn full_garage_lights_indicator_pin() {
    let (b1, b2, b3) = (Input::new(true), Input::new(true), Input::new(true));
    let mut sensors = BaySensors::new(b1.clone(), b2.clone(), b3.clone());
    let mut gate = GateActuator::new(Pwm::default(), Output::default());

    {
        let mut garage = GarageController::new(
            clock(),
            &mut sensors,
            &mut gate,
            NoDelay,
            &GarageConfig::default(),
        );
        garage.update_light_policy();
        assert_eq!(garage.light_state(), LightState::On);
    }
    assert!(gate.light().is_on());

    b2.level.set(Some(false));
    {
        let mut garage = GarageController::new(
            clock(),
            &mut sensors,
            &mut gate,
            NoDelay,
            &GarageConfig::default(),
        );
        garage.update_light_policy();
        assert_eq!(garage.light_state(), LightState::Off);
    }
    assert!(!gate.light().is_on());
}

#[test]
fn servo_receives_scaled_duty_then_release() {
    let mut gate = GateActuator::new(Pwm::default(), Output::default());
    let mut sensors = BaySensors::new(Input::new(false), Input::new(false), Input::new(false));
    {
        let mut garage = GarageController::new(
            clock(),
            &mut sensors,
            &mut gate,
            NoDelay,
            &GarageConfig::default(),
        );
        garage.open_door();
    }
    assert!(!gate.servo().is_driving());

    let (pwm, led) = gate.into_parts();
    // closed reference (2 %), neutral, open (12 %), neutral
    assert_eq!(pwm.history, [200, 0, 1200, 0]);
    assert!(!led.high);
}

#[test]
fn sensor_read_error_counts_as_free_bay() {
    let broken = Input::new(true);
    broken.level.set(None);
    let mut sensors = BaySensors::new(Input::new(true), broken, Input::new(true));
    let mut gate = GateActuator::new(Pwm::default(), Output::default());
    let mut garage = GarageController::new(
        clock(),
        &mut sensors,
        &mut gate,
        NoDelay,
        &GarageConfig::default(),
    );
    assert_eq!(garage.count_occupied_spots(), 2);
    assert_eq!(garage.check_occupancy(pins::INFRARED_PIN2), Ok(false));
    garage.update_light_policy();
    assert_eq!(garage.light_state(), LightState::Off);
}
