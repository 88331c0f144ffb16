//! Gate servo driver.
//!
//! A hobby servo on a 50 Hz PWM channel: the pulse width (expressed as a
//! duty percentage of the 20 ms frame) selects the horn angle.  2 % is
//! roughly 0°, 12 % roughly 180°, and 0 % removes drive entirely.
//!
//! Generic over any `embedded_hal::pwm::SetDutyCycle` channel, so the same
//! driver runs on an ESP-IDF LEDC channel or a host fake.

use embedded_hal::pwm::SetDutyCycle;

pub struct ServoDriver<P> {
    pwm: P,
    duty_percent: f32,
}

impl<P: SetDutyCycle> ServoDriver<P> {
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            duty_percent: 0.0,
        }
    }

    /// Set the PWM duty as a percentage (clamped to 0–100).
    pub fn set_percent(&mut self, percent: f32) -> Result<(), P::Error> {
        let percent = percent.clamp(0.0, 100.0);
        let raw = Self::to_raw(percent, self.pwm.max_duty_cycle());
        self.pwm.set_duty_cycle(raw)?;
        self.duty_percent = percent;
        Ok(())
    }

    /// Remove drive (0 % duty).
    pub fn release(&mut self) -> Result<(), P::Error> {
        self.pwm.set_duty_cycle_fully_off()?;
        self.duty_percent = 0.0;
        Ok(())
    }

    fn to_raw(percent: f32, max_duty: u16) -> u16 {
        (f32::from(max_duty) * percent / 100.0).round() as u16
    }

    /// Last successfully applied duty (%).
    pub fn duty_percent(&self) -> f32 {
        self.duty_percent
    }

    pub fn is_driving(&self) -> bool {
        self.duty_percent > 0.0
    }

    pub fn into_inner(self) -> P {
        self.pwm
    }
}
