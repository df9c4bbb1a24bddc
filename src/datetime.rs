//! `DateTime` model, register block codec and epoch arithmetic for the DS3231 RTC.
//!
//! The DS3231 stores date and time in 7 consecutive BCD registers:
//! Seconds, Minutes, Hours, Day, Date, Month, Year. This module converts
//! between that block and the validated [`DateTime`] value, and between
//! [`DateTime`] and seconds since the Unix epoch.
//!
//! # Validation
//!
//! A [`DateTime`] handed out by this crate is either fully valid or the
//! canonical [`DateTime::INVALID`] value. Decoding a register block that holds
//! any out-of-range field fails as a whole with
//! [`DS3231DateTimeError::InvalidDateTime`].
//!
//! # Day of week
//!
//! Days are numbered 1 (Monday) to 7 (Sunday).

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::codec::{bcd_to_decimal, decimal_to_bcd, is_bcd};
use crate::registers::{Date, Day, Hours, Minutes, Month, Seconds, Year};

/// Seconds between 1970-01-01T00:00:00Z and 2000-01-01T00:00:00Z.
pub const SECONDS_FROM_1970_TO_2000: u32 = 946_684_800;

/// Epoch of 2100-01-01T00:00:00Z, the first instant the device cannot hold.
const SECONDS_FROM_1970_TO_2100: u32 = 4_102_444_800;

const SECONDS_PER_DAY: u32 = 86_400;

const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year test for years counted from 2000; exact for 2000-2099.
const fn is_leap_year(years_since_2000: u32) -> bool {
    years_since_2000 & 0b11 == 0
}

/// Names of the months, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Names of the days of the week, Monday (day 1) first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Errors that can occur during DS3231 date/time conversion or validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DS3231DateTimeError {
    /// The provided or decoded date/time is out of range or not valid BCD
    InvalidDateTime,
    /// The year is outside 2000-2099
    YearOutOfRange,
    /// The epoch value is outside 2000-01-01 .. 2099-12-31T23:59:59
    EpochOutOfRange,
}

/// Calendar date and time as held by the DS3231, always in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// Seconds (0-59)
    pub second: u8,
    /// Minutes (0-59)
    pub minute: u8,
    /// Hours (0-23)
    pub hour: u8,
    /// Day of week (1-7, 1 = Monday)
    pub day_of_week: u8,
    /// Day of month (1-31)
    pub day_of_month: u8,
    /// Month (1-12)
    pub month: u8,
    /// Year (2000-2099)
    pub year: u16,
}

impl DateTime {
    /// The canonical invalid value, every field zeroed.
    pub const INVALID: DateTime = DateTime {
        second: 0,
        minute: 0,
        hour: 0,
        day_of_week: 0,
        day_of_month: 0,
        month: 0,
        year: 0,
    };

    /// Creates a validated `DateTime`.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231DateTimeError::YearOutOfRange`] for years outside
    /// 2000-2099 and [`DS3231DateTimeError::InvalidDateTime`] for any other
    /// field out of range.
    pub fn new(
        year: u16,
        month: u8,
        day_of_month: u8,
        day_of_week: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DS3231DateTimeError> {
        let dt = DateTime {
            second,
            minute,
            hour,
            day_of_week,
            day_of_month,
            month,
            year,
        };
        dt.validate()?;
        Ok(dt)
    }

    /// Checks every field against its legal range.
    ///
    /// # Errors
    ///
    /// See [`DateTime::new`].
    pub fn validate(&self) -> Result<(), DS3231DateTimeError> {
        if !(2000..=2099).contains(&self.year) {
            return Err(DS3231DateTimeError::YearOutOfRange);
        }
        if self.second > 59
            || self.minute > 59
            || self.hour > 23
            || !(1..=7).contains(&self.day_of_week)
            || !(1..=31).contains(&self.day_of_month)
            || !(1..=12).contains(&self.month)
        {
            return Err(DS3231DateTimeError::InvalidDateTime);
        }
        Ok(())
    }

    /// Returns `true` when every field is within range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Seconds since 1970-01-01T00:00:00Z.
    ///
    /// Only meaningful for a valid `DateTime`: the year range 2000-2099 is
    /// where every fourth year is a leap year. Out-of-range fields never
    /// panic; a result past the end of `u32` saturates to `u32::MAX`.
    #[must_use]
    pub fn to_epoch(&self) -> u32 {
        let year = u32::from(self.year.saturating_sub(2000));
        // One leap day for every started four-year block since 2000
        let mut days = 365 * u64::from(year) + u64::from(year.div_ceil(4));
        for month_length in DAYS_PER_MONTH
            .iter()
            .take(usize::from(self.month.saturating_sub(1)))
        {
            days += u64::from(*month_length);
        }
        if self.month > 2 && is_leap_year(year) {
            days += 1;
        }
        days += u64::from(self.day_of_month.saturating_sub(1));

        let epoch = u64::from(SECONDS_FROM_1970_TO_2000)
            + ((days * 24 + u64::from(self.hour)) * 60 + u64::from(self.minute)) * 60
            + u64::from(self.second);
        u32::try_from(epoch).unwrap_or(u32::MAX)
    }

    /// Converts seconds since the Unix epoch into a `DateTime`.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231DateTimeError::EpochOutOfRange`] when the instant is
    /// not within 2000-01-01T00:00:00 .. 2099-12-31T23:59:59.
    pub fn from_epoch(epoch: u32) -> Result<Self, DS3231DateTimeError> {
        if !(SECONDS_FROM_1970_TO_2000..SECONDS_FROM_1970_TO_2100).contains(&epoch) {
            return Err(DS3231DateTimeError::EpochOutOfRange);
        }
        let since_2000 = epoch - SECONDS_FROM_1970_TO_2000;
        let total_days = since_2000 / SECONDS_PER_DAY;
        let seconds_of_day = since_2000 % SECONDS_PER_DAY;

        let mut days = total_days;
        let mut year = 0u32;
        loop {
            let year_length = if is_leap_year(year) { 366 } else { 365 };
            if days < year_length {
                break;
            }
            days -= year_length;
            year += 1;
        }

        let mut month = 1u8;
        for (index, month_length) in DAYS_PER_MONTH.iter().enumerate() {
            let mut length = u32::from(*month_length);
            if index == 1 && is_leap_year(year) {
                length += 1;
            }
            if days < length {
                break;
            }
            days -= length;
            month += 1;
        }

        // 2000-01-01 was a Saturday (6)
        let day_of_week = (total_days + 5) % 7 + 1;

        let narrow = |v: u32| u8::try_from(v).map_err(|_| DS3231DateTimeError::EpochOutOfRange);
        Ok(DateTime {
            second: narrow(seconds_of_day % 60)?,
            minute: narrow(seconds_of_day / 60 % 60)?,
            hour: narrow(seconds_of_day / 3600)?,
            day_of_week: narrow(day_of_week)?,
            day_of_month: narrow(days + 1)?,
            month,
            year: 2000 + u16::try_from(year).map_err(|_| DS3231DateTimeError::EpochOutOfRange)?,
        })
    }

    /// Name of the day of week, or `None` if out of range.
    #[must_use]
    pub fn day_name(&self) -> Option<&'static str> {
        let index = self.day_of_week.checked_sub(1)?;
        DAY_NAMES.get(usize::from(index)).copied()
    }

    /// Name of the month, or `None` if out of range.
    #[must_use]
    pub fn month_name(&self) -> Option<&'static str> {
        let index = self.month.checked_sub(1)?;
        MONTH_NAMES.get(usize::from(index)).copied()
    }
}

impl TryFrom<&NaiveDateTime> for DateTime {
    type Error = DS3231DateTimeError;

    fn try_from(datetime: &NaiveDateTime) -> Result<Self, Self::Error> {
        let year = u16::try_from(datetime.year())
            .map_err(|_| DS3231DateTimeError::YearOutOfRange)?;
        let narrow = |v: u32| u8::try_from(v).map_err(|_| DS3231DateTimeError::InvalidDateTime);
        DateTime::new(
            year,
            narrow(datetime.month())?,
            narrow(datetime.day())?,
            narrow(datetime.weekday().number_from_monday())?,
            narrow(datetime.hour())?,
            narrow(datetime.minute())?,
            narrow(datetime.second())?,
        )
    }
}

impl TryFrom<DateTime> for NaiveDateTime {
    type Error = DS3231DateTimeError;

    fn try_from(datetime: DateTime) -> Result<Self, Self::Error> {
        datetime.validate()?;
        NaiveDate::from_ymd_opt(
            i32::from(datetime.year),
            u32::from(datetime.month),
            u32::from(datetime.day_of_month),
        )
        .and_then(|d| {
            d.and_hms_opt(
                u32::from(datetime.hour),
                u32::from(datetime.minute),
                u32::from(datetime.second),
            )
        })
        .ok_or(DS3231DateTimeError::InvalidDateTime)
    }
}

/// Hour, minute and second as read by the time-only register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    /// Hours (0-23)
    pub hour: u8,
    /// Minutes (0-59)
    pub minute: u8,
    /// Seconds (0-59)
    pub second: u8,
}

/// Decodes a BCD register value, rejecting non decimal nibbles.
fn decode_bcd(bcd: u8) -> Result<u8, DS3231DateTimeError> {
    if is_bcd(bcd) {
        Ok(bcd_to_decimal(bcd))
    } else {
        Err(DS3231DateTimeError::InvalidDateTime)
    }
}

/// Register level representation of the DS3231 date and time block.
///
/// This struct models the 7 date/time registers of the DS3231, using
/// strongly-typed bitfield wrappers for each field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct DS3231DateTime {
    seconds: Seconds,
    minutes: Minutes,
    hours: Hours,
    day: Day,
    date: Date,
    month: Month,
    year: Year,
}

impl DS3231DateTime {
    /// Encodes a validated `DateTime` into register values.
    ///
    /// The bitfield setters mask every field to its register width, which
    /// also clears the 12-hour flag and the century bit.
    pub(crate) fn from_datetime(datetime: &DateTime) -> Result<Self, DS3231DateTimeError> {
        datetime.validate()?;

        let mut seconds = Seconds::default();
        seconds.set_bcd(decimal_to_bcd(datetime.second));
        let mut minutes = Minutes::default();
        minutes.set_bcd(decimal_to_bcd(datetime.minute));
        let mut hours = Hours::default();
        hours.set_bcd(decimal_to_bcd(datetime.hour));
        let mut day = Day::default();
        day.set_day(decimal_to_bcd(datetime.day_of_week));
        let mut date = Date::default();
        date.set_bcd(decimal_to_bcd(datetime.day_of_month));
        let mut month = Month::default();
        month.set_bcd(decimal_to_bcd(datetime.month));
        let mut year = Year::default();
        let year_offset = u8::try_from(datetime.year - 2000)
            .map_err(|_| DS3231DateTimeError::YearOutOfRange)?;
        year.set_bcd(decimal_to_bcd(year_offset));

        let raw = DS3231DateTime {
            seconds,
            minutes,
            hours,
            day,
            date,
            month,
            year,
        };
        debug!("raw={:?}", <[u8; 7]>::from(&raw));
        Ok(raw)
    }

    /// Decodes and validates the register values.
    ///
    /// Any invalid field fails the whole block, as does an hours register in
    /// 12-hour mode.
    pub(crate) fn into_datetime(self) -> Result<DateTime, DS3231DateTimeError> {
        if self.hours.twelve_hour_mode() {
            warn!("hours register is in 12-hour mode");
            return Err(DS3231DateTimeError::InvalidDateTime);
        }
        let datetime = DateTime {
            second: decode_bcd(self.seconds.bcd())?,
            minute: decode_bcd(self.minutes.bcd())?,
            hour: decode_bcd(self.hours.bcd())?,
            day_of_week: self.day.day(),
            day_of_month: decode_bcd(self.date.bcd())?,
            month: decode_bcd(self.month.bcd())?,
            year: 2000 + u16::from(decode_bcd(self.year.bcd())?),
        };
        datetime
            .validate()
            .map_err(|_| DS3231DateTimeError::InvalidDateTime)?;
        Ok(datetime)
    }

    /// Decodes the time-only registers (seconds, minutes, hours).
    pub(crate) fn decode_time(data: [u8; 3]) -> Result<Time, DS3231DateTimeError> {
        let hours = Hours(data[2]);
        if hours.twelve_hour_mode() {
            warn!("hours register is in 12-hour mode");
            return Err(DS3231DateTimeError::InvalidDateTime);
        }
        let time = Time {
            second: decode_bcd(Seconds(data[0]).bcd())?,
            minute: decode_bcd(Minutes(data[1]).bcd())?,
            hour: decode_bcd(hours.bcd())?,
        };
        if time.second > 59 || time.minute > 59 || time.hour > 23 {
            return Err(DS3231DateTimeError::InvalidDateTime);
        }
        Ok(time)
    }
}

impl From<[u8; 7]> for DS3231DateTime {
    fn from(data: [u8; 7]) -> Self {
        DS3231DateTime {
            seconds: Seconds(data[0]),
            minutes: Minutes(data[1]),
            hours: Hours(data[2]),
            day: Day(data[3]),
            date: Date(data[4]),
            month: Month(data[5]),
            year: Year(data[6]),
        }
    }
}

impl From<&DS3231DateTime> for [u8; 7] {
    fn from(dt: &DS3231DateTime) -> [u8; 7] {
        [
            dt.seconds.0,
            dt.minutes.0,
            dt.hours.0,
            dt.day.0,
            dt.date.0,
            dt.month.0,
            dt.year.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;

    fn dt(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> DateTime {
        let weekday = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .unwrap()
            .weekday()
            .number_from_monday();
        DateTime::new(year, month, day, weekday as u8, hour, minute, second).unwrap()
    }

    #[test]
    fn test_encode_register_block() {
        // Thursday 2024-03-14 15:30:00
        let raw = DS3231DateTime::from_datetime(&dt(2024, 3, 14, 15, 30, 0)).unwrap();
        let arr: [u8; 7] = (&raw).into();
        assert_eq!(arr, [0x00, 0x30, 0x15, 0x04, 0x14, 0x03, 0x24]);
    }

    #[test]
    fn test_decode_register_block() {
        let raw = DS3231DateTime::from([0x59, 0x59, 0x23, 0x04, 0x31, 0x12, 0x99]);
        let decoded = raw.into_datetime().unwrap();
        assert_eq!(decoded, dt(2099, 12, 31, 23, 59, 59));
    }

    #[test]
    fn test_decode_ignores_unused_and_century_bits() {
        let raw = DS3231DateTime::from([0x80, 0x80, 0x00, 0x06, 0x01, 0x81, 0x00]);
        assert_eq!(raw.into_datetime().unwrap(), dt(2000, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_register_block_round_trip() {
        let samples = [
            dt(2000, 1, 1, 0, 0, 0),
            dt(2024, 2, 29, 12, 0, 0),
            dt(2023, 2, 28, 23, 59, 59),
            dt(2051, 7, 4, 9, 8, 7),
            dt(2099, 12, 31, 23, 59, 59),
        ];
        for sample in samples {
            let raw = DS3231DateTime::from_datetime(&sample).unwrap();
            let arr: [u8; 7] = (&raw).into();
            assert_eq!(DS3231DateTime::from(arr).into_datetime().unwrap(), sample);
        }
    }

    #[test]
    fn test_decode_out_of_range_minute_fails_whole_block() {
        // minute = 75
        let raw = DS3231DateTime::from([0x00, 0x75, 0x10, 0x01, 0x01, 0x01, 0x24]);
        assert_eq!(
            raw.into_datetime(),
            Err(DS3231DateTimeError::InvalidDateTime)
        );
    }

    #[test]
    fn test_decode_rejects_invalid_fields() {
        let cases: [[u8; 7]; 7] = [
            [0x6A, 0x00, 0x00, 0x01, 0x01, 0x01, 0x00], // seconds not BCD
            [0x00, 0x00, 0x24, 0x01, 0x01, 0x01, 0x00], // hour 24
            [0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00], // weekday 0
            [0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00], // date 0
            [0x00, 0x00, 0x00, 0x01, 0x32, 0x01, 0x00], // date 32
            [0x00, 0x00, 0x00, 0x01, 0x01, 0x13, 0x00], // month 13
            [0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0xA0], // year not BCD
        ];
        for case in cases {
            assert!(DS3231DateTime::from(case).into_datetime().is_err(), "{case:02x?}");
        }
    }

    #[test]
    fn test_decode_rejects_twelve_hour_mode() {
        // 1 PM in 12-hour mode would otherwise read as hour 21
        let raw = DS3231DateTime::from([0x00, 0x00, 0x61, 0x01, 0x01, 0x01, 0x24]);
        assert_eq!(
            raw.into_datetime(),
            Err(DS3231DateTimeError::InvalidDateTime)
        );
        assert_eq!(
            DS3231DateTime::decode_time([0x00, 0x00, 0x61]),
            Err(DS3231DateTimeError::InvalidDateTime)
        );
    }

    #[test]
    fn test_to_epoch_out_of_range_year_saturates() {
        let mut late = dt(2099, 12, 31, 23, 59, 59);
        late.year = 2200;
        assert_eq!(late.to_epoch(), u32::MAX);
        late.year = u16::MAX;
        late.hour = u8::MAX;
        assert_eq!(late.to_epoch(), u32::MAX);
    }

    #[test]
    fn test_encode_rejects_invalid_datetime() {
        assert_eq!(
            DS3231DateTime::from_datetime(&DateTime::INVALID),
            Err(DS3231DateTimeError::YearOutOfRange)
        );
        let mut bad = dt(2024, 1, 1, 0, 0, 0);
        bad.minute = 60;
        assert_eq!(
            DS3231DateTime::from_datetime(&bad),
            Err(DS3231DateTimeError::InvalidDateTime)
        );
    }

    #[test]
    fn test_new_validates_ranges() {
        assert!(DateTime::new(2024, 1, 1, 1, 0, 0, 0).is_ok());
        assert_eq!(
            DateTime::new(1999, 12, 31, 5, 23, 59, 59),
            Err(DS3231DateTimeError::YearOutOfRange)
        );
        assert_eq!(
            DateTime::new(2100, 1, 1, 5, 0, 0, 0),
            Err(DS3231DateTimeError::YearOutOfRange)
        );
        assert_eq!(
            DateTime::new(2024, 1, 1, 8, 0, 0, 0),
            Err(DS3231DateTimeError::InvalidDateTime)
        );
        assert!(!DateTime::INVALID.is_valid());
    }

    #[test]
    fn test_decode_time() {
        assert_eq!(
            DS3231DateTime::decode_time([0x45, 0x30, 0x15]),
            Ok(Time {
                hour: 15,
                minute: 30,
                second: 45
            })
        );
        assert!(DS3231DateTime::decode_time([0x00, 0x60, 0x00]).is_err());
        assert!(DS3231DateTime::decode_time([0x00, 0x00, 0x24]).is_err());
    }

    #[test]
    fn test_epoch_of_2000() {
        assert_eq!(dt(2000, 1, 1, 0, 0, 0).to_epoch(), 946_684_800);
    }

    #[test]
    fn test_epoch_matches_chrono() {
        let samples = [
            dt(2000, 2, 29, 1, 2, 3),
            dt(2000, 3, 1, 0, 0, 0),
            dt(2001, 1, 1, 0, 0, 0),
            dt(2024, 2, 29, 12, 0, 0),
            dt(2024, 12, 31, 23, 59, 59),
            dt(2038, 1, 19, 3, 14, 8),
            dt(2099, 12, 31, 23, 59, 59),
        ];
        for sample in samples {
            let naive = NaiveDateTime::try_from(sample).unwrap();
            assert_eq!(i64::from(sample.to_epoch()), naive.and_utc().timestamp());
        }
    }

    #[test]
    fn test_leap_day_epoch_round_trip() {
        let leap_day = dt(2024, 2, 29, 12, 0, 0);
        let epoch = leap_day.to_epoch();
        assert_eq!(epoch, 1_709_208_000);
        assert_eq!(DateTime::from_epoch(epoch).unwrap(), leap_day);
    }

    #[test]
    fn test_from_epoch_boundaries() {
        assert_eq!(
            DateTime::from_epoch(946_684_800).unwrap(),
            dt(2000, 1, 1, 0, 0, 0)
        );
        assert_eq!(
            DateTime::from_epoch(4_102_444_799).unwrap(),
            dt(2099, 12, 31, 23, 59, 59)
        );
        assert_eq!(
            DateTime::from_epoch(946_684_799),
            Err(DS3231DateTimeError::EpochOutOfRange)
        );
        assert_eq!(
            DateTime::from_epoch(4_102_444_800),
            Err(DS3231DateTimeError::EpochOutOfRange)
        );
    }

    #[test]
    fn test_epoch_round_trip_across_month_and_year_edges() {
        // Walk a day at a time across 2023-2025, plus one second either side of midnight
        let start = dt(2023, 1, 1, 0, 0, 0).to_epoch();
        let mut previous = None;
        for day in 0..(3 * 366) {
            for offset in [0, SECONDS_PER_DAY - 1] {
                let epoch = start + day * SECONDS_PER_DAY + offset;
                let decoded = DateTime::from_epoch(epoch).unwrap();
                assert!(decoded.is_valid());
                assert_eq!(decoded.to_epoch(), epoch);
                if let Some(prev) = previous {
                    assert!(epoch > prev);
                }
                previous = Some(epoch);
            }
        }
    }

    #[test]
    fn test_to_epoch_is_monotonic() {
        let ordered = [
            dt(2000, 1, 1, 0, 0, 0),
            dt(2000, 1, 1, 0, 0, 1),
            dt(2000, 1, 1, 0, 1, 0),
            dt(2000, 1, 1, 1, 0, 0),
            dt(2000, 1, 2, 0, 0, 0),
            dt(2000, 2, 28, 23, 59, 59),
            dt(2000, 2, 29, 0, 0, 0),
            dt(2000, 3, 1, 0, 0, 0),
            dt(2000, 12, 31, 23, 59, 59),
            dt(2001, 1, 1, 0, 0, 0),
            dt(2099, 12, 31, 23, 59, 59),
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0].to_epoch() < pair[1].to_epoch(), "{:?}", pair);
        }
    }

    #[test]
    fn test_from_epoch_day_of_week() {
        // 2000-01-01 Saturday, 2024-03-10 Sunday, 2024-03-11 Monday
        assert_eq!(DateTime::from_epoch(946_684_800).unwrap().day_of_week, 6);
        let sunday = dt(2024, 3, 10, 0, 0, 0);
        assert_eq!(sunday.day_of_week, 7);
        assert_eq!(DateTime::from_epoch(sunday.to_epoch()).unwrap().day_of_week, 7);
        let monday = dt(2024, 3, 11, 0, 0, 0);
        assert_eq!(DateTime::from_epoch(monday.to_epoch()).unwrap().day_of_week, 1);
    }

    #[test]
    fn test_chrono_conversions() {
        let naive = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(10, 25, 45)
            .unwrap();
        let converted = DateTime::try_from(&naive).unwrap();
        assert_eq!(converted, dt(2024, 6, 15, 10, 25, 45));
        assert_eq!(converted.day_of_week, 6);
        assert_eq!(NaiveDateTime::try_from(converted).unwrap(), naive);

        let too_early = NaiveDate::from_ymd_opt(1999, 12, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            DateTime::try_from(&too_early),
            Err(DS3231DateTimeError::YearOutOfRange)
        );

        // In range per field but not a calendar date
        let mut feb_31 = dt(2024, 2, 1, 0, 0, 0);
        feb_31.day_of_month = 31;
        assert_eq!(
            NaiveDateTime::try_from(feb_31),
            Err(DS3231DateTimeError::InvalidDateTime)
        );
    }

    #[test]
    fn test_names() {
        let sample = dt(2024, 3, 14, 15, 30, 0);
        assert_eq!(sample.day_name(), Some("Thursday"));
        assert_eq!(sample.month_name(), Some("March"));
        assert_eq!(DateTime::INVALID.day_name(), None);
        assert_eq!(DateTime::INVALID.month_name(), None);
    }

    #[test]
    fn test_error_debug_formatting() {
        let debug_str = alloc::format!("{:?}", DS3231DateTimeError::EpochOutOfRange);
        assert!(debug_str.contains("EpochOutOfRange"));
    }
}
