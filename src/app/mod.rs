//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules of the garage: occupancy
//! aggregation, the gate state machine and the full-indicator policy.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod ports;
pub mod service;
pub mod shared;
pub mod state;
