//! Alarm configuration utilities for the DS3231 RTC.
//!
//! The DS3231 has two alarm channels. Each channel compares a subset of its
//! registers against the running clock; every register carries a mask bit in
//! bit 7 that excludes it from the comparison, and the day/date register
//! carries the DY/DT bit selecting day-of-week or day-of-month matching.
//!
//! A match mode is expressed as a 5 bit pattern: bits 0..3 are the mask bits
//! of the seconds, minutes, hours and day/date registers, bit 4 is DY/DT.
//!
//! ## Alarm 1 modes
//! - `EverySecond` - Triggers every second
//! - `MatchSeconds` - Triggers when seconds match
//! - `MatchMinutes` - Triggers when minutes:seconds match
//! - `MatchHours` - Triggers when hours:minutes:seconds match (daily)
//! - `MatchDate` - Triggers at a time on a date of the month
//! - `MatchDay` - Triggers at a time on a day of the week
//!
//! ## Alarm 2 modes
//! Alarm 2 has no seconds register and fires at 00 seconds of the matching
//! minute: `EveryMinute`, `MatchMinutes`, `MatchHours`, `MatchDate`, `MatchDay`.

use crate::codec::{bcd_to_decimal, decimal_to_bcd, is_bcd};
use crate::registers::{AlarmDayDate, AlarmHours, AlarmMinutes, AlarmSeconds, DayDateSelect};

const MASK_SECONDS: u8 = 0x01;
const MASK_MINUTES: u8 = 0x02;
const MASK_HOURS: u8 = 0x04;
const MASK_DAY_DATE: u8 = 0x08;
const SELECT_DAY: u8 = 0x10;

/// Error type for alarm configuration operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmError {
    /// Invalid time component value
    InvalidTime(&'static str),
    /// Invalid day of week (must be 1-7)
    InvalidDayOfWeek,
    /// Invalid date of month (must be 1-31)
    InvalidDateOfMonth,
    /// The mask bits read from the device do not form a supported mode
    InvalidMask(u8),
    /// A register read from the device holds a value that is not valid BCD
    /// or is in 12-hour format
    InvalidRegister,
}

/// Selects one of the two alarm channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmId {
    /// Alarm 1, registers 0x07-0x0A
    Alarm1,
    /// Alarm 2, registers 0x0B-0x0D
    Alarm2,
}

/// Match modes of Alarm 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alarm1Mode {
    /// Alarm once per second
    EverySecond,
    /// Alarm when seconds match
    MatchSeconds,
    /// Alarm when minutes and seconds match
    MatchMinutes,
    /// Alarm when hours, minutes and seconds match
    MatchHours,
    /// Alarm when date, hours, minutes and seconds match
    MatchDate,
    /// Alarm when day of week, hours, minutes and seconds match
    MatchDay,
}

impl Alarm1Mode {
    /// Mask and DY/DT bit pattern of the mode.
    #[must_use]
    pub const fn mask_bits(self) -> u8 {
        match self {
            Alarm1Mode::EverySecond => 0x0F,
            Alarm1Mode::MatchSeconds => 0x0E,
            Alarm1Mode::MatchMinutes => 0x0C,
            Alarm1Mode::MatchHours => 0x08,
            Alarm1Mode::MatchDate => 0x00,
            Alarm1Mode::MatchDay => 0x10,
        }
    }

    /// Mode for a bit pattern, `None` if the pattern is not a supported mode.
    #[must_use]
    pub const fn from_mask_bits(bits: u8) -> Option<Self> {
        match bits {
            0x0F => Some(Alarm1Mode::EverySecond),
            0x0E => Some(Alarm1Mode::MatchSeconds),
            0x0C => Some(Alarm1Mode::MatchMinutes),
            0x08 => Some(Alarm1Mode::MatchHours),
            0x00 => Some(Alarm1Mode::MatchDate),
            0x10 => Some(Alarm1Mode::MatchDay),
            _ => None,
        }
    }
}

/// Match modes of Alarm 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alarm2Mode {
    /// Alarm once per minute (00 seconds of every minute)
    EveryMinute,
    /// Alarm when minutes match
    MatchMinutes,
    /// Alarm when hours and minutes match
    MatchHours,
    /// Alarm when date, hours and minutes match
    MatchDate,
    /// Alarm when day of week, hours and minutes match
    MatchDay,
}

impl Alarm2Mode {
    /// Mask and DY/DT bit pattern of the mode. Bit 0 is unused by Alarm 2.
    #[must_use]
    pub const fn mask_bits(self) -> u8 {
        match self {
            Alarm2Mode::EveryMinute => 0x0E,
            Alarm2Mode::MatchMinutes => 0x0C,
            Alarm2Mode::MatchHours => 0x08,
            Alarm2Mode::MatchDate => 0x00,
            Alarm2Mode::MatchDay => 0x10,
        }
    }

    /// Mode for a bit pattern, `None` if the pattern is not a supported mode.
    #[must_use]
    pub const fn from_mask_bits(bits: u8) -> Option<Self> {
        match bits {
            0x0E => Some(Alarm2Mode::EveryMinute),
            0x0C => Some(Alarm2Mode::MatchMinutes),
            0x08 => Some(Alarm2Mode::MatchHours),
            0x00 => Some(Alarm2Mode::MatchDate),
            0x10 => Some(Alarm2Mode::MatchDay),
            _ => None,
        }
    }
}

/// Alarm 1 configuration: a match mode plus the values to match.
///
/// Fields not compared by the mode are still written to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm1Config {
    /// Match mode
    pub mode: Alarm1Mode,
    /// Day of week (1-7) for `MatchDay`, date of month (1-31) for `MatchDate`
    pub day_date: u8,
    /// Hours (0-23)
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
}

/// Alarm 2 configuration: a match mode plus the values to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm2Config {
    /// Match mode
    pub mode: Alarm2Mode,
    /// Day of week (1-7) for `MatchDay`, date of month (1-31) for `MatchDate`
    pub day_date: u8,
    /// Hours (0-23)
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
}

fn validate_time(hours: u8, minutes: u8, seconds: u8) -> Result<(), AlarmError> {
    if seconds > 59 {
        return Err(AlarmError::InvalidTime("seconds must be 0-59"));
    }
    if minutes > 59 {
        return Err(AlarmError::InvalidTime("minutes must be 0-59"));
    }
    if hours > 23 {
        return Err(AlarmError::InvalidTime("hours must be 0-23"));
    }
    Ok(())
}

fn validate_day_date(mask_bits: u8, day_date: u8) -> Result<(), AlarmError> {
    if mask_bits & MASK_DAY_DATE != 0 {
        // Not compared, only needs to fit the register
        return if day_date > 31 {
            Err(AlarmError::InvalidDateOfMonth)
        } else {
            Ok(())
        };
    }
    if mask_bits & SELECT_DAY != 0 {
        if !(1..=7).contains(&day_date) {
            return Err(AlarmError::InvalidDayOfWeek);
        }
    } else if !(1..=31).contains(&day_date) {
        return Err(AlarmError::InvalidDateOfMonth);
    }
    Ok(())
}

impl Alarm1Config {
    /// Validates the alarm configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a time component is out of range, or if the
    /// day/date does not fit the mode (1-7 for `MatchDay`, 1-31 for
    /// `MatchDate`).
    pub fn validate(&self) -> Result<(), AlarmError> {
        validate_time(self.hours, self.minutes, self.seconds)?;
        validate_day_date(self.mode.mask_bits(), self.day_date)
    }
}

impl Alarm2Config {
    /// Validates the alarm configuration.
    ///
    /// # Errors
    ///
    /// See [`Alarm1Config::validate`].
    pub fn validate(&self) -> Result<(), AlarmError> {
        validate_time(self.hours, self.minutes, 0)?;
        validate_day_date(self.mode.mask_bits(), self.day_date)
    }
}

fn encode_minutes(minutes: u8, mask_bits: u8) -> AlarmMinutes {
    let mut reg = AlarmMinutes::default();
    reg.set_bcd(decimal_to_bcd(minutes));
    reg.set_alarm_mask2(mask_bits & MASK_MINUTES != 0);
    reg
}

fn encode_hours(hours: u8, mask_bits: u8) -> AlarmHours {
    let mut reg = AlarmHours::default();
    reg.set_bcd(decimal_to_bcd(hours));
    reg.set_alarm_mask3(mask_bits & MASK_HOURS != 0);
    reg
}

fn encode_day_date(day_date: u8, mask_bits: u8) -> AlarmDayDate {
    let mut reg = AlarmDayDate::default();
    reg.set_bcd(decimal_to_bcd(day_date));
    reg.set_alarm_mask4(mask_bits & MASK_DAY_DATE != 0);
    reg.set_day_date_select(if mask_bits & SELECT_DAY != 0 {
        DayDateSelect::Day
    } else {
        DayDateSelect::Date
    });
    reg
}

fn decode_bcd(bcd: u8) -> Result<u8, AlarmError> {
    if is_bcd(bcd) {
        Ok(bcd_to_decimal(bcd))
    } else {
        Err(AlarmError::InvalidRegister)
    }
}

/// Collects the mask bits of the shared minutes/hours/day-date registers.
///
/// DY/DT is only meaningful while the day/date register takes part in the
/// comparison, so it is dropped when A?M4 is set.
fn shared_mask_bits(minutes: AlarmMinutes, hours: AlarmHours, day_date: AlarmDayDate) -> u8 {
    let mut bits = 0;
    if minutes.alarm_mask2() {
        bits |= MASK_MINUTES;
    }
    if hours.alarm_mask3() {
        bits |= MASK_HOURS;
    }
    if day_date.alarm_mask4() {
        bits |= MASK_DAY_DATE;
    } else if day_date.day_date_select() == DayDateSelect::Day {
        bits |= SELECT_DAY;
    }
    bits
}

/// Register level representation of the Alarm 1 block (0x07-0x0A).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DS3231Alarm1 {
    seconds: AlarmSeconds,
    minutes: AlarmMinutes,
    hours: AlarmHours,
    day_date: AlarmDayDate,
}

impl DS3231Alarm1 {
    /// Encodes a configuration into register values.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &Alarm1Config) -> Result<Self, AlarmError> {
        config.validate()?;
        let bits = config.mode.mask_bits();

        let mut seconds = AlarmSeconds::default();
        seconds.set_bcd(decimal_to_bcd(config.seconds));
        seconds.set_alarm_mask1(bits & MASK_SECONDS != 0);

        Ok(DS3231Alarm1 {
            seconds,
            minutes: encode_minutes(config.minutes, bits),
            hours: encode_hours(config.hours, bits),
            day_date: encode_day_date(config.day_date, bits),
        })
    }

    /// Decodes the register values back into a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AlarmError::InvalidMask`] for an unsupported mask
    /// combination and [`AlarmError::InvalidRegister`] for undecodable fields.
    pub fn to_config(&self) -> Result<Alarm1Config, AlarmError> {
        let mut bits = shared_mask_bits(self.minutes, self.hours, self.day_date);
        if self.seconds.alarm_mask1() {
            bits |= MASK_SECONDS;
        }
        let mode = Alarm1Mode::from_mask_bits(bits).ok_or(AlarmError::InvalidMask(bits))?;
        if self.hours.twelve_hour_mode() {
            return Err(AlarmError::InvalidRegister);
        }
        let config = Alarm1Config {
            mode,
            day_date: decode_bcd(self.day_date.bcd())?,
            hours: decode_bcd(self.hours.bcd())?,
            minutes: decode_bcd(self.minutes.bcd())?,
            seconds: decode_bcd(self.seconds.bcd())?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Alarm seconds register
    #[must_use]
    pub fn seconds(&self) -> AlarmSeconds {
        self.seconds
    }

    /// Alarm minutes register
    #[must_use]
    pub fn minutes(&self) -> AlarmMinutes {
        self.minutes
    }

    /// Alarm hours register
    #[must_use]
    pub fn hours(&self) -> AlarmHours {
        self.hours
    }

    /// Alarm day/date register
    #[must_use]
    pub fn day_date(&self) -> AlarmDayDate {
        self.day_date
    }
}

impl From<[u8; 4]> for DS3231Alarm1 {
    fn from(data: [u8; 4]) -> Self {
        DS3231Alarm1 {
            seconds: AlarmSeconds(data[0]),
            minutes: AlarmMinutes(data[1]),
            hours: AlarmHours(data[2]),
            day_date: AlarmDayDate(data[3]),
        }
    }
}

impl From<&DS3231Alarm1> for [u8; 4] {
    fn from(alarm: &DS3231Alarm1) -> [u8; 4] {
        [
            alarm.seconds.0,
            alarm.minutes.0,
            alarm.hours.0,
            alarm.day_date.0,
        ]
    }
}

/// Register level representation of the Alarm 2 block (0x0B-0x0D).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DS3231Alarm2 {
    minutes: AlarmMinutes,
    hours: AlarmHours,
    day_date: AlarmDayDate,
}

impl DS3231Alarm2 {
    /// Encodes a configuration into register values.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &Alarm2Config) -> Result<Self, AlarmError> {
        config.validate()?;
        let bits = config.mode.mask_bits();
        Ok(DS3231Alarm2 {
            minutes: encode_minutes(config.minutes, bits),
            hours: encode_hours(config.hours, bits),
            day_date: encode_day_date(config.day_date, bits),
        })
    }

    /// Decodes the register values back into a configuration.
    ///
    /// # Errors
    ///
    /// See [`DS3231Alarm1::to_config`].
    pub fn to_config(&self) -> Result<Alarm2Config, AlarmError> {
        let bits = shared_mask_bits(self.minutes, self.hours, self.day_date);
        let mode = Alarm2Mode::from_mask_bits(bits).ok_or(AlarmError::InvalidMask(bits))?;
        if self.hours.twelve_hour_mode() {
            return Err(AlarmError::InvalidRegister);
        }
        let config = Alarm2Config {
            mode,
            day_date: decode_bcd(self.day_date.bcd())?,
            hours: decode_bcd(self.hours.bcd())?,
            minutes: decode_bcd(self.minutes.bcd())?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Alarm minutes register
    #[must_use]
    pub fn minutes(&self) -> AlarmMinutes {
        self.minutes
    }

    /// Alarm hours register
    #[must_use]
    pub fn hours(&self) -> AlarmHours {
        self.hours
    }

    /// Alarm day/date register
    #[must_use]
    pub fn day_date(&self) -> AlarmDayDate {
        self.day_date
    }
}

impl From<[u8; 3]> for DS3231Alarm2 {
    fn from(data: [u8; 3]) -> Self {
        DS3231Alarm2 {
            minutes: AlarmMinutes(data[0]),
            hours: AlarmHours(data[1]),
            day_date: AlarmDayDate(data[2]),
        }
    }
}

impl From<&DS3231Alarm2> for [u8; 3] {
    fn from(alarm: &DS3231Alarm2) -> [u8; 3] {
        [alarm.minutes.0, alarm.hours.0, alarm.day_date.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alarm1(mode: Alarm1Mode, day_date: u8, hours: u8, minutes: u8, seconds: u8) -> Alarm1Config {
        Alarm1Config {
            mode,
            day_date,
            hours,
            minutes,
            seconds,
        }
    }

    fn alarm2(mode: Alarm2Mode, day_date: u8, hours: u8, minutes: u8) -> Alarm2Config {
        Alarm2Config {
            mode,
            day_date,
            hours,
            minutes,
        }
    }

    fn encode1(config: &Alarm1Config) -> [u8; 4] {
        (&DS3231Alarm1::from_config(config).unwrap()).into()
    }

    fn encode2(config: &Alarm2Config) -> [u8; 3] {
        (&DS3231Alarm2::from_config(config).unwrap()).into()
    }

    #[test]
    fn test_alarm1_match_seconds_encoding() {
        let config = alarm1(Alarm1Mode::MatchSeconds, 0, 0, 0, 30);
        assert_eq!(encode1(&config), [0x30, 0x80, 0x80, 0x80]);
    }

    #[test]
    fn test_alarm1_every_second_encoding() {
        let config = alarm1(Alarm1Mode::EverySecond, 0, 0, 0, 0);
        assert_eq!(encode1(&config), [0x80, 0x80, 0x80, 0x80]);
    }

    #[test]
    fn test_alarm1_match_hours_encoding() {
        let config = alarm1(Alarm1Mode::MatchHours, 0, 23, 59, 58);
        assert_eq!(encode1(&config), [0x58, 0x59, 0x23, 0x80]);
    }

    #[test]
    fn test_alarm1_match_date_and_day_encoding() {
        let date = alarm1(Alarm1Mode::MatchDate, 31, 12, 0, 0);
        assert_eq!(encode1(&date), [0x00, 0x00, 0x12, 0x31]);

        // DY/DT in bit 6
        let day = alarm1(Alarm1Mode::MatchDay, 3, 7, 15, 0);
        assert_eq!(encode1(&day), [0x00, 0x15, 0x07, 0x43]);
    }

    #[test]
    fn test_alarm2_encoding() {
        assert_eq!(
            encode2(&alarm2(Alarm2Mode::EveryMinute, 0, 0, 0)),
            [0x80, 0x80, 0x80]
        );
        assert_eq!(
            encode2(&alarm2(Alarm2Mode::MatchMinutes, 0, 0, 45)),
            [0x45, 0x80, 0x80]
        );
        assert_eq!(
            encode2(&alarm2(Alarm2Mode::MatchHours, 0, 6, 30)),
            [0x30, 0x06, 0x80]
        );
        assert_eq!(
            encode2(&alarm2(Alarm2Mode::MatchDate, 15, 6, 30)),
            [0x30, 0x06, 0x15]
        );
        assert_eq!(
            encode2(&alarm2(Alarm2Mode::MatchDay, 7, 6, 30)),
            [0x30, 0x06, 0x47]
        );
    }

    #[test]
    fn test_mask_bits_round_trip() {
        for mode in [
            Alarm1Mode::EverySecond,
            Alarm1Mode::MatchSeconds,
            Alarm1Mode::MatchMinutes,
            Alarm1Mode::MatchHours,
            Alarm1Mode::MatchDate,
            Alarm1Mode::MatchDay,
        ] {
            assert_eq!(Alarm1Mode::from_mask_bits(mode.mask_bits()), Some(mode));
        }
        for mode in [
            Alarm2Mode::EveryMinute,
            Alarm2Mode::MatchMinutes,
            Alarm2Mode::MatchHours,
            Alarm2Mode::MatchDate,
            Alarm2Mode::MatchDay,
        ] {
            assert_eq!(Alarm2Mode::from_mask_bits(mode.mask_bits()), Some(mode));
        }
        assert_eq!(Alarm1Mode::from_mask_bits(0x0A), None);
        assert_eq!(Alarm2Mode::from_mask_bits(0x0F), None);
    }

    #[test]
    fn test_alarm1_decode() {
        let alarm = DS3231Alarm1::from([0x00, 0x15, 0x07, 0x43]);
        assert_eq!(
            alarm.to_config(),
            Ok(alarm1(Alarm1Mode::MatchDay, 3, 7, 15, 0))
        );
        assert!(!alarm.day_date().alarm_mask4());
        assert_eq!(alarm.day_date().day_date_select(), DayDateSelect::Day);
    }

    #[test]
    fn test_decode_ignores_day_date_select_when_masked() {
        // A1M4 set with DY/DT set still decodes as MatchHours
        let alarm = DS3231Alarm1::from([0x10, 0x20, 0x08, 0xC1]);
        assert_eq!(
            alarm.to_config(),
            Ok(alarm1(Alarm1Mode::MatchHours, 1, 8, 20, 10))
        );
        let alarm = DS3231Alarm2::from([0x80, 0x80, 0xC0]);
        assert_eq!(
            alarm.to_config(),
            Ok(alarm2(Alarm2Mode::EveryMinute, 0, 0, 0))
        );
    }

    #[test]
    fn test_decode_rejects_unsupported_masks() {
        // A1M1 set but A1M2 clear
        let alarm = DS3231Alarm1::from([0x80, 0x00, 0x80, 0x80]);
        assert_eq!(alarm.to_config(), Err(AlarmError::InvalidMask(0x0D)));

        // A2M2 set but A2M3 clear
        let alarm = DS3231Alarm2::from([0x80, 0x00, 0x01]);
        assert_eq!(alarm.to_config(), Err(AlarmError::InvalidMask(0x02)));
    }

    #[test]
    fn test_decode_rejects_bad_registers() {
        let not_bcd = DS3231Alarm1::from([0x3A, 0x80, 0x80, 0x80]);
        assert_eq!(not_bcd.to_config(), Err(AlarmError::InvalidRegister));

        let twelve_hour = DS3231Alarm2::from([0x00, 0x52, 0x80]);
        assert_eq!(twelve_hour.to_config(), Err(AlarmError::InvalidRegister));

        let weekday_eight = DS3231Alarm2::from([0x00, 0x00, 0x48]);
        assert_eq!(weekday_eight.to_config(), Err(AlarmError::InvalidDayOfWeek));
    }

    #[test]
    fn test_round_trip_through_registers() {
        let configs = [
            alarm1(Alarm1Mode::EverySecond, 0, 0, 0, 0),
            alarm1(Alarm1Mode::MatchMinutes, 0, 0, 59, 59),
            alarm1(Alarm1Mode::MatchDate, 29, 23, 1, 2),
            alarm1(Alarm1Mode::MatchDay, 1, 0, 0, 0),
        ];
        for config in configs {
            let raw = encode1(&config);
            assert_eq!(DS3231Alarm1::from(raw).to_config(), Ok(config));
        }
        let config = alarm2(Alarm2Mode::MatchDay, 5, 18, 45);
        assert_eq!(DS3231Alarm2::from(encode2(&config)).to_config(), Ok(config));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            alarm1(Alarm1Mode::MatchSeconds, 0, 0, 0, 60).validate(),
            Err(AlarmError::InvalidTime("seconds must be 0-59"))
        );
        assert_eq!(
            alarm1(Alarm1Mode::MatchHours, 0, 24, 0, 0).validate(),
            Err(AlarmError::InvalidTime("hours must be 0-23"))
        );
        assert_eq!(
            alarm2(Alarm2Mode::MatchMinutes, 0, 0, 60).validate(),
            Err(AlarmError::InvalidTime("minutes must be 0-59"))
        );
        assert_eq!(
            alarm1(Alarm1Mode::MatchDay, 0, 0, 0, 0).validate(),
            Err(AlarmError::InvalidDayOfWeek)
        );
        assert_eq!(
            alarm1(Alarm1Mode::MatchDay, 8, 0, 0, 0).validate(),
            Err(AlarmError::InvalidDayOfWeek)
        );
        assert_eq!(
            alarm2(Alarm2Mode::MatchDate, 0, 0, 0).validate(),
            Err(AlarmError::InvalidDateOfMonth)
        );
        assert_eq!(
            alarm2(Alarm2Mode::MatchDate, 32, 0, 0).validate(),
            Err(AlarmError::InvalidDateOfMonth)
        );
        // Day/date is not compared in these modes, zero is fine
        assert_eq!(
            alarm1(Alarm1Mode::MatchHours, 0, 0, 0, 0).validate(),
            Ok(())
        );
        assert_eq!(alarm2(Alarm2Mode::EveryMinute, 0, 0, 0).validate(), Ok(()));
        let day_nine = alarm2(Alarm2Mode::MatchDay, 9, 0, 0);
        assert!(DS3231Alarm2::from_config(&day_nine).is_err());
    }
}
