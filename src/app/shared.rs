//! Thread-safe handle around a [`GarageController`].
//!
//! The controller itself is single-threaded.  When more than one task
//! drives it (e.g. the indicator poller and an entry-gate handler), wrap it
//! in a [`SharedGarage`]: every call holds the lock for the whole
//! operation, so the three sensor reads of an occupancy count and every
//! door/light mutation are serialised.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::fee::{FeeQuote, Timestamp};

use super::ports::{ActuatorInterface, ClockSource, MotionDelay, SensorArray};
use super::service::GarageController;
use super::state::{DoorState, LightState};

/// Cloneable, lock-protected controller handle.
pub struct SharedGarage<C, S, A, D> {
    inner: Arc<Mutex<GarageController<C, S, A, D>>>,
}

impl<C, S, A, D> Clone for SharedGarage<C, S, A, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, S, A, D> SharedGarage<C, S, A, D>
where
    C: ClockSource,
    S: SensorArray,
    A: ActuatorInterface,
    D: MotionDelay,
{
    pub fn new(garage: GarageController<C, S, A, D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(garage)),
        }
    }

    // Door and light state are plain enums, always consistent between
    // statements, so a panic in another holder leaves nothing to repair.
    fn lock(&self) -> MutexGuard<'_, GarageController<C, S, A, D>> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Run several operations under one lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut GarageController<C, S, A, D>) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn check_occupancy(&self, pin: u8) -> Result<bool> {
        self.lock().check_occupancy(pin)
    }

    pub fn count_occupied_spots(&self) -> u8 {
        self.lock().count_occupied_spots()
    }

    pub fn calculate_parking_fee(&self, entry: Timestamp) -> FeeQuote {
        self.lock().calculate_parking_fee(entry)
    }

    pub fn open_door(&self) {
        self.lock().open_door();
    }

    pub fn close_door(&self) {
        self.lock().close_door();
    }

    pub fn turn_on_light(&self) {
        self.lock().turn_on_light();
    }

    pub fn turn_off_light(&self) {
        self.lock().turn_off_light();
    }

    pub fn update_light_policy(&self) {
        self.lock().update_light_policy();
    }

    pub fn door_state(&self) -> DoorState {
        self.lock().door_state()
    }

    pub fn light_state(&self) -> LightState {
        self.lock().light_state()
    }
}
