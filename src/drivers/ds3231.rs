//! DS3231 real-time clock (I²C, address 0x68).
//!
//! Timekeeping registers `0x00..=0x06` hold seconds, minutes, hours,
//! day-of-week, date, month/century and year, all BCD.  The hours
//! register may be in 12 h mode (bit 6 set, bit 5 = PM).  The century bit
//! (month bit 7) marks the rollover from 2099; years are read as
//! `2000 + yy (+100)`.
//!
//! Reads and writes are burst transfers of all seven registers so the
//! fields are mutually consistent.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use embedded_hal::i2c::I2c;

pub const DS3231_ADDR: u8 = 0x68;

const REG_SECONDS: u8 = 0x00;
const TIME_REGS: usize = 7;

const HOUR_12H_MODE: u8 = 0b0100_0000;
const HOUR_PM: u8 = 0b0010_0000;
const MONTH_CENTURY: u8 = 0b1000_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ds3231Error<E> {
    /// I²C transfer failed.
    Bus(E),
    /// Registers hold a date/time that does not exist (e.g. after a
    /// battery-less power loss, or month 13).
    InvalidTime,
}

impl<E: core::fmt::Debug> core::fmt::Display for Ds3231Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "DS3231 bus error: {e:?}"),
            Self::InvalidTime => write!(f, "DS3231 holds an invalid date/time"),
        }
    }
}

pub struct Ds3231<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Ds3231<I> {
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, DS3231_ADDR)
    }

    pub fn with_address(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Read the current date and time.
    pub fn datetime(&mut self) -> Result<NaiveDateTime, Ds3231Error<I::Error>> {
        let mut regs = [0u8; TIME_REGS];
        self.i2c
            .write_read(self.address, &[REG_SECONDS], &mut regs)
            .map_err(Ds3231Error::Bus)?;
        decode(&regs).ok_or(Ds3231Error::InvalidTime)
    }

    /// Set the clock.  Years outside 2000–2199 cannot be represented.
    pub fn set_datetime(&mut self, ts: NaiveDateTime) -> Result<(), Ds3231Error<I::Error>> {
        let regs = encode(ts).ok_or(Ds3231Error::InvalidTime)?;
        let mut frame = [0u8; TIME_REGS + 1];
        frame[0] = REG_SECONDS;
        frame[1..].copy_from_slice(&regs);
        self.i2c
            .write(self.address, &frame)
            .map_err(Ds3231Error::Bus)
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

fn bcd_to_bin(v: u8) -> u8 {
    (v >> 4) * 10 + (v & 0x0F)
}

fn bin_to_bcd(v: u8) -> u8 {
    ((v / 10) << 4) | (v % 10)
}

fn decode_hour(reg: u8) -> u8 {
    if reg & HOUR_12H_MODE == 0 {
        return bcd_to_bin(reg & 0x3F);
    }
    let h12 = bcd_to_bin(reg & 0x1F) % 12;
    if reg & HOUR_PM != 0 { h12 + 12 } else { h12 }
}

fn decode(regs: &[u8; TIME_REGS]) -> Option<NaiveDateTime> {
    let sec = bcd_to_bin(regs[0] & 0x7F);
    let min = bcd_to_bin(regs[1] & 0x7F);
    let hour = decode_hour(regs[2]);
    // regs[3] is the free-running day-of-week counter; the weekday is
    // derived from the date instead.
    let day = bcd_to_bin(regs[4] & 0x3F);
    let month = bcd_to_bin(regs[5] & 0x1F);
    let century = if regs[5] & MONTH_CENTURY != 0 { 100 } else { 0 };
    let year = 2000 + century + i32::from(bcd_to_bin(regs[6]));

    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))?.and_hms_opt(
        u32::from(hour),
        u32::from(min),
        u32::from(sec),
    )
}

fn encode(ts: NaiveDateTime) -> Option<[u8; TIME_REGS]> {
    let offset = ts.year() - 2000;
    if !(0..200).contains(&offset) {
        return None;
    }
    let century = if offset >= 100 { MONTH_CENTURY } else { 0 };
    Some([
        bin_to_bcd(ts.second() as u8),
        bin_to_bcd(ts.minute() as u8),
        bin_to_bcd(ts.hour() as u8), // always written in 24 h mode
        ts.weekday().number_from_monday() as u8,
        bin_to_bcd(ts.day() as u8),
        bin_to_bcd(ts.month() as u8) | century,
        bin_to_bcd((offset % 100) as u8),
    ])
}
