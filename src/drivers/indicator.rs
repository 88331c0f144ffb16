//! Full-garage indicator LED (single digital output, active HIGH).

use embedded_hal::digital::OutputPin;

pub struct IndicatorLight<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> IndicatorLight<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}
