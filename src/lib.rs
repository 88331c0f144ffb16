//! ParkGate firmware library.
//!
//! Exposes the garage controller core, its port traits and the
//! `embedded-hal` drivers/adapters for integration testing.  Nothing here
//! depends on ESP-IDF; the board wiring lives in the `parkgate` binary
//! behind the `espidf` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fee;
pub mod pins;
pub mod sensors;

pub use app::service::GarageController;
pub use error::{Error, Result};
