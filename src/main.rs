//! ParkGate Firmware: Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  BaySensors     GateActuator       RtcClock   HalDelay   │
//! │  (SensorArray)  (ActuatorInterface)(Clock)    (Motion)   │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────         │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │       GarageController (pure logic)            │      │
//! │  │  occupancy · fees · gate · full indicator      │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::PinDriver;
use esp_idf_svc::hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_svc::hal::ledc::{LedcDriver, LedcTimerDriver, config::TimerConfig};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;
use log::{info, warn};

use parkgate::GarageController;
use parkgate::adapters::hardware::{BaySensors, GateActuator};
use parkgate::adapters::time::RtcClock;
use parkgate::app::ports::ClockSource;
use parkgate::config::GarageConfig;
use parkgate::drivers::ds3231::Ds3231;
use parkgate::drivers::motion::HalDelay;
use parkgate::pins;

// The peripheral fields taken in `main` are named by GPIO number; keep them
// in step with the board pin table.
const _: () = {
    assert!(pins::INFRARED_PIN1 == 11);
    assert!(pins::INFRARED_PIN2 == 12);
    assert!(pins::INFRARED_PIN3 == 13);
    assert!(pins::SERVO_PIN == 16);
    assert!(pins::LED_PIN == 18);
    assert!(pins::I2C_SDA_GPIO == 8);
    assert!(pins::I2C_SCL_GPIO == 9);
};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ParkGate v{}", env!("CARGO_PKG_VERSION"));

    let config = GarageConfig::default();
    config.validate()?;

    // ── 2. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let pins_hw = peripherals.pins;

    let bay1 = PinDriver::input(pins_hw.gpio11)?;
    let bay2 = PinDriver::input(pins_hw.gpio12)?;
    let bay3 = PinDriver::input(pins_hw.gpio13)?;

    let servo_timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::default().frequency(pins::SERVO_PWM_FREQ_HZ.Hz().into()),
    )?;
    let servo = LedcDriver::new(peripherals.ledc.channel0, &servo_timer, pins_hw.gpio16)?;
    let led = PinDriver::output(pins_hw.gpio18)?;

    let i2c = I2cDriver::new(
        peripherals.i2c0,
        pins_hw.gpio8,
        pins_hw.gpio9,
        &I2cConfig::new().baudrate(pins::I2C_BAUD_HZ.Hz().into()),
    )?;
    let mut clock = RtcClock::new(Ds3231::new(i2c));
    let boot = clock.now();
    if clock.is_synced() {
        info!("RTC time: {}", boot);
    } else {
        warn!("RTC not usable at boot; fees are invalid until it answers");
    }

    // ── 3. Controller ─────────────────────────────────────────
    let sensors = BaySensors::new(bay1, bay2, bay3);
    let gate = GateActuator::new(servo, led);
    let delay = HalDelay::new(FreeRtos, config.servo_settle_ms);
    let mut garage = GarageController::new(clock, sensors, gate, delay, &config);

    // ── 4. Indicator loop ─────────────────────────────────────
    loop {
        garage.update_light_policy();
        FreeRtos::delay_ms(config.light_poll_interval_ms);
    }
}
