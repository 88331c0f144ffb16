//! Clock adapters.
//!
//! - [`RtcClock`]: the battery-backed DS3231 on the I²C bus; this is the
//!   time source the deployed garage prices stays with.
//! - [`SystemClock`]: the local wall clock of the host (or of ESP-IDF once
//!   SNTP has synced), for simulation and bench setups without an RTC.

use chrono::{Local, NaiveDateTime};
use embedded_hal::i2c::I2c;
use log::warn;

use crate::app::ports::ClockSource;
use crate::drivers::ds3231::Ds3231;
use crate::fee::Timestamp;

/// [`ClockSource`] backed by a DS3231.
///
/// A failed read never reaches the controller: the last good timestamp is
/// returned instead (the Unix epoch if the RTC has never answered), and
/// the failure is logged.
pub struct RtcClock<I> {
    rtc: Ds3231<I>,
    last_good: Option<NaiveDateTime>,
}

impl<I: I2c> RtcClock<I> {
    pub fn new(rtc: Ds3231<I>) -> Self {
        Self {
            rtc,
            last_good: None,
        }
    }

    /// `false` until the RTC has answered at least once.  While unsynced,
    /// `now` reports the epoch and every fee priced from it is invalid.
    pub fn is_synced(&self) -> bool {
        self.last_good.is_some()
    }
}

impl<I: I2c> ClockSource for RtcClock<I> {
    fn now(&mut self) -> Timestamp {
        match self.rtc.datetime() {
            Ok(ts) => {
                self.last_good = Some(ts);
                ts
            }
            Err(e) => match self.last_good {
                Some(last) => {
                    warn!("RTC read failed ({}), using last good time {}", e, last);
                    last
                }
                None => {
                    let epoch = NaiveDateTime::default();
                    warn!(
                        "RTC read failed ({}) and never synced, using {}; fees are invalid until the RTC recovers",
                        e, epoch
                    );
                    epoch
                }
            },
        }
    }
}

/// [`ClockSource`] backed by the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&mut self) -> Timestamp {
        Local::now().naive_local()
    }
}
