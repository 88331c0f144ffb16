//! [`MotionDelay`] strategies for the gate servo.
//!
//! On hardware the controller must wait for the horn to finish its swing
//! before releasing the servo; in simulation and tests there is nothing to
//! wait for.

use embedded_hal::delay::DelayNs;

use crate::app::ports::MotionDelay;

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl MotionDelay for NoDelay {
    fn wait(&mut self) {}
}

/// Blocks for a fixed settle time on any `embedded-hal` delay provider.
pub struct HalDelay<D> {
    delay: D,
    settle_ms: u32,
}

impl<D: DelayNs> HalDelay<D> {
    pub fn new(delay: D, settle_ms: u32) -> Self {
        Self { delay, settle_ms }
    }

    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }
}

impl<D: DelayNs> MotionDelay for HalDelay<D> {
    fn wait(&mut self) {
        self.delay.delay_ms(self.settle_ms);
    }
}
