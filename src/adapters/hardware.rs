//! Hardware adapters: bridge real peripherals to domain port traits.
//!
//! [`BaySensors`] owns the three occupancy inputs and implements
//! [`SensorArray`]; [`GateActuator`] owns the gate servo and the indicator
//! LED and implements [`ActuatorInterface`].  The ports are
//! fire-and-forget, so peripheral errors end here: they are logged, and a
//! failed sensor read counts as "bay free".

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::{ActuatorInterface, SensorArray};
use crate::drivers::indicator::IndicatorLight;
use crate::drivers::servo::ServoDriver;
use crate::sensors::SensorId;

// ── Occupancy inputs ──────────────────────────────────────────

/// IR break-beam inputs, active HIGH = bay occupied.
pub struct BaySensors<I1, I2, I3> {
    bay1: I1,
    bay2: I2,
    bay3: I3,
}

impl<I1: InputPin, I2: InputPin, I3: InputPin> BaySensors<I1, I2, I3> {
    pub fn new(bay1: I1, bay2: I2, bay3: I3) -> Self {
        Self { bay1, bay2, bay3 }
    }
}

fn occupied<P: InputPin>(pin: &mut P, sensor: SensorId) -> bool {
    match pin.is_high() {
        Ok(level) => level,
        Err(e) => {
            warn!("sensor {} read failed: {:?}", sensor, e);
            false
        }
    }
}

impl<I1: InputPin, I2: InputPin, I3: InputPin> SensorArray for BaySensors<I1, I2, I3> {
    fn read(&mut self, sensor: SensorId) -> bool {
        match sensor {
            SensorId::Bay1 => occupied(&mut self.bay1, sensor),
            SensorId::Bay2 => occupied(&mut self.bay2, sensor),
            SensorId::Bay3 => occupied(&mut self.bay3, sensor),
        }
    }
}

// ── Gate servo + indicator ────────────────────────────────────

pub struct GateActuator<PWM, LED> {
    servo: ServoDriver<PWM>,
    light: IndicatorLight<LED>,
}

impl<PWM: SetDutyCycle, LED: OutputPin> GateActuator<PWM, LED> {
    pub fn new(servo: PWM, light: LED) -> Self {
        Self {
            servo: ServoDriver::new(servo),
            light: IndicatorLight::new(light),
        }
    }

    pub fn servo(&self) -> &ServoDriver<PWM> {
        &self.servo
    }

    pub fn light(&self) -> &IndicatorLight<LED> {
        &self.light
    }

    pub fn into_parts(self) -> (PWM, LED) {
        (self.servo.into_inner(), self.light.into_inner())
    }
}

impl<PWM: SetDutyCycle, LED: OutputPin> ActuatorInterface for GateActuator<PWM, LED> {
    fn set_position(&mut self, duty_percent: f32) {
        let result = if duty_percent <= 0.0 {
            self.servo.release()
        } else {
            self.servo.set_percent(duty_percent)
        };
        if let Err(e) = result {
            warn!("servo duty {}% failed: {:?}", duty_percent, e);
        }
    }

    fn set_light(&mut self, on: bool) {
        if let Err(e) = self.light.set(on) {
            warn!("indicator set({}) failed: {:?}", on, e);
        }
    }
}
