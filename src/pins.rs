//! GPIO / peripheral pin assignments for the ParkGate controller board.
//!
//! Single source of truth: every driver and the sensor id mapping
//! reference this module rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Occupancy sensors (IR break-beam, active HIGH = bay occupied)
// ---------------------------------------------------------------------------

/// Bay 1 infrared sensor.
pub const INFRARED_PIN1: u8 = 11;
/// Bay 2 infrared sensor.
pub const INFRARED_PIN2: u8 = 12;
/// Bay 3 infrared sensor.
pub const INFRARED_PIN3: u8 = 13;

// ---------------------------------------------------------------------------
// Gate servo
// ---------------------------------------------------------------------------

/// LEDC PWM output driving the gate servo.
pub const SERVO_PIN: u8 = 16;
/// Standard hobby-servo frame rate (20 ms period).
pub const SERVO_PWM_FREQ_HZ: u32 = 50;

// ---------------------------------------------------------------------------
// Full-garage indicator
// ---------------------------------------------------------------------------

/// Digital output: red "garage full" LED (active HIGH).
pub const LED_PIN: u8 = 18;

// ---------------------------------------------------------------------------
// I²C bus (DS3231 real-time clock)
// ---------------------------------------------------------------------------

/// RTC data line.
pub const I2C_SDA_GPIO: u8 = 8;
/// RTC clock line.
pub const I2C_SCL_GPIO: u8 = 9;
/// I²C bus clock for the RTC.
pub const I2C_BAUD_HZ: u32 = 100_000;
