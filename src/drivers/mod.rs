//! Peripheral drivers, generic over `embedded-hal` 1.0 traits.

pub mod ds3231;
pub mod indicator;
pub mod motion;
pub mod servo;
