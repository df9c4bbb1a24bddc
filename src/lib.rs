//! A platform-agnostic `no_std` driver for the DS3231 real-time clock.
//!
//! The driver talks to the device over any [`embedded_hal::i2c::I2c`] bus at
//! the fixed address `0x68` and covers:
//!
//! - reading and writing the date/time block, with full validation of the data
//!   read back
//! - conversion to and from seconds since the Unix epoch
//! - both alarm channels and their interrupt/flag handling
//! - oscillator, square wave, 32 kHz output and temperature conversion control
//! - the die temperature and the aging offset
//! - a dump of all registers for debugging
//!
//! The clock is always used in 24-hour mode and holds UTC.
//!
//! # Features
//!
//! - `log`: debug logging through the `log` crate
//! - `defmt`: debug logging and `defmt::Format` implementations
//! - `temperature_f32`: [`TemperatureReading::as_f32`]
//!
//! # Example
//!
//! ```rust,ignore
//! use ds3231_rtc::{DateTime, DS3231};
//!
//! let mut rtc = DS3231::new(i2c);
//! if rtc.is_oscillator_stopped()? {
//!     rtc.set_datetime(&DateTime::new(2024, 3, 14, 4, 15, 30, 0)?)?;
//! }
//! let now = rtc.datetime()?;
//! let epoch = now.to_epoch();
//! ```
#![no_std]

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        macro_rules! debug {
            ($($arg:tt)*) => { defmt::debug!($($arg)*) };
        }
        macro_rules! warn {
            ($($arg:tt)*) => { defmt::warn!($($arg)*) };
        }
    } else if #[cfg(feature = "log")] {
        macro_rules! debug {
            ($($arg:tt)*) => { log::debug!($($arg)*) };
        }
        macro_rules! warn {
            ($($arg:tt)*) => { log::warn!($($arg)*) };
        }
    } else {
        macro_rules! debug {
            ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }};
        }
        macro_rules! warn {
            ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }};
        }
    }
}

pub mod alarm;
pub mod codec;
pub mod datetime;
pub mod diagnostics;
pub mod registers;
pub mod temperature;

use embedded_hal::i2c::I2c;
use paste::paste;

pub use alarm::{
    Alarm1Config, Alarm1Mode, Alarm2Config, Alarm2Mode, AlarmError, AlarmId, DS3231Alarm1,
    DS3231Alarm2,
};
pub use datetime::{DS3231DateTimeError, DateTime, Time};
pub use diagnostics::RegisterDump;
pub use registers::{
    AgingOffset, AlarmDayDate, AlarmHours, AlarmMinutes, AlarmSeconds, Control, Date, Day,
    DayDateSelect, Hours, InterruptControl, Minutes, Month, Oscillator, RegAddr, Seconds,
    SquareWaveFrequency, Status, Temperature, TemperatureFraction, Year, NUM_REGISTERS,
};
pub use temperature::TemperatureReading;

use datetime::DS3231DateTime;

/// Fixed 7-bit I2C address of the DS3231.
pub const DEVICE_ADDRESS: u8 = 0x68;

/// Device configuration applied by [`DS3231::configure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Square wave output frequency
    pub square_wave_frequency: SquareWaveFrequency,
    /// INT/SQW pin function
    pub interrupt_control: InterruptControl,
    /// Keep the square wave running on battery power
    pub battery_backed_square_wave: bool,
    /// Oscillator enable when running on battery power
    pub oscillator_enable: Oscillator,
    /// Enable the 32kHz output pin
    pub enable_32khz_output: bool,
}

impl Default for Config {
    /// The power-on state of the device.
    fn default() -> Self {
        Config {
            square_wave_frequency: SquareWaveFrequency::Hz8192,
            interrupt_control: InterruptControl::Interrupt,
            battery_backed_square_wave: false,
            oscillator_enable: Oscillator::Enabled,
            enable_32khz_output: true,
        }
    }
}

/// Error type for DS3231 operations.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DS3231Error<I2CE> {
    /// I2C bus error
    I2c(I2CE),
    /// The date/time was written but enabling the oscillator failed
    OscillatorEnable(I2CE),
    /// The date/time was written but clearing the oscillator stop flag failed
    ClearOscillatorStopFlag(I2CE),
    /// Invalid date/time, either supplied or read from the device
    DateTime(DS3231DateTimeError),
    /// Invalid alarm configuration, either supplied or read from the device
    Alarm(AlarmError),
}

impl<I2CE> From<I2CE> for DS3231Error<I2CE> {
    fn from(e: I2CE) -> Self {
        DS3231Error::I2c(e)
    }
}

/// Builds the bus frame for a register write: start address then payload.
///
/// The payload must not run past the last register (0x12).
fn write_frame(reg: RegAddr, data: &[u8]) -> ([u8; NUM_REGISTERS + 1], usize) {
    debug_assert!(
        reg as usize + data.len() <= NUM_REGISTERS,
        "register write past end of map"
    );
    let mut frame = [0u8; NUM_REGISTERS + 1];
    let len = data.len().min(NUM_REGISTERS - reg as usize);
    frame[0] = reg as u8;
    frame[1..=len].copy_from_slice(&data[..len]);
    (frame, len + 1)
}

/// DS3231 Real-Time Clock driver.
pub struct DS3231<I2C: I2c> {
    i2c: I2C,
}

impl<I2C: I2c> DS3231<I2C> {
    /// Creates a new driver instance owning the bus.
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consumes the driver and returns the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Reads consecutive registers starting at `reg` in one transaction.
    fn read_registers(&mut self, reg: RegAddr, data: &mut [u8]) -> Result<(), I2C::Error> {
        self.i2c.write_read(DEVICE_ADDRESS, &[reg as u8], data)
    }

    /// Writes consecutive registers starting at `reg` in one transaction.
    fn write_registers(&mut self, reg: RegAddr, data: &[u8]) -> Result<(), I2C::Error> {
        let (frame, len) = write_frame(reg, data);
        self.i2c.write(DEVICE_ADDRESS, &frame[..len])
    }

    fn update_control(&mut self, f: impl FnOnce(&mut Control)) -> Result<(), I2C::Error> {
        let mut data = [0];
        self.read_registers(RegAddr::Control, &mut data)?;
        let mut control = Control(data[0]);
        f(&mut control);
        debug!("DS3231: writing control: {:?}", control);
        self.write_registers(RegAddr::Control, &[control.into()])
    }

    fn update_status(&mut self, f: impl FnOnce(&mut Status)) -> Result<(), I2C::Error> {
        let mut data = [0];
        self.read_registers(RegAddr::ControlStatus, &mut data)?;
        let mut status = Status(data[0]);
        f(&mut status);
        debug!("DS3231: writing status: {:?}", status);
        self.write_registers(RegAddr::ControlStatus, &[status.into()])
    }

    /// Applies the configuration to the control and status registers.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn configure(&mut self, config: &Config) -> Result<(), DS3231Error<I2C::Error>> {
        debug!("DS3231: configure {:?}", config);
        self.update_control(|control| {
            control.set_oscillator_enable(config.oscillator_enable);
            control.set_battery_backed_square_wave(config.battery_backed_square_wave);
            control.set_square_wave_frequency(config.square_wave_frequency);
            control.set_interrupt_control(config.interrupt_control);
        })?;
        self.update_status(|status| status.set_enable_32khz_output(config.enable_32khz_output))?;
        Ok(())
    }

    /// Checks that a DS3231 answers and its always-zero status bits read as zero.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` if the device does not respond.
    pub fn is_present(&mut self) -> Result<bool, DS3231Error<I2C::Error>> {
        let status = self.status()?;
        Ok(status.reserved() == 0)
    }

    /// Gets the current date and time from the device.
    ///
    /// The 7 date/time registers are read in one transaction. If any field is
    /// out of range the whole read fails with
    /// [`DS3231DateTimeError::InvalidDateTime`].
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure or `DS3231Error::DateTime`
    /// for invalid register contents.
    pub fn datetime(&mut self) -> Result<DateTime, DS3231Error<I2C::Error>> {
        let mut data = [0; 7];
        self.read_registers(RegAddr::Seconds, &mut data)?;
        DS3231DateTime::from(data).into_datetime().map_err(|e| {
            warn!("DS3231: invalid date/time registers: {:?}", data);
            DS3231Error::DateTime(e)
        })
    }

    /// Sets the date and time.
    ///
    /// The 7 date/time registers are written in one transaction, then the
    /// oscillator is enabled and the oscillator stop flag cleared.
    ///
    /// # Errors
    /// - `DS3231Error::DateTime` if `datetime` is invalid; nothing is written
    /// - `DS3231Error::I2c` if the date/time write fails
    /// - `DS3231Error::OscillatorEnable` or `DS3231Error::ClearOscillatorStopFlag`
    ///   if a follow-up step fails after the date/time was written
    pub fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), DS3231Error<I2C::Error>> {
        let raw = DS3231DateTime::from_datetime(datetime).map_err(DS3231Error::DateTime)?;
        let data: [u8; 7] = (&raw).into();
        self.write_registers(RegAddr::Seconds, &data)?;
        self.update_control(|control| control.set_oscillator_enable(Oscillator::Enabled))
            .map_err(DS3231Error::OscillatorEnable)?;
        self.update_status(|status| status.set_oscillator_stop_flag(false))
            .map_err(DS3231Error::ClearOscillatorStopFlag)?;
        Ok(())
    }

    /// Reads hours, minutes and seconds in one transaction.
    ///
    /// # Errors
    /// See [`DS3231::datetime`].
    pub fn time(&mut self) -> Result<Time, DS3231Error<I2C::Error>> {
        let mut data = [0; 3];
        self.read_registers(RegAddr::Seconds, &mut data)?;
        DS3231DateTime::decode_time(data).map_err(DS3231Error::DateTime)
    }

    /// Sets hours, minutes and seconds, keeping the date.
    ///
    /// The full date/time record is read, updated and written back so the
    /// block is always written as a whole.
    ///
    /// # Errors
    /// See [`DS3231::datetime`] and [`DS3231::set_datetime`].
    pub fn set_time(&mut self, time: &Time) -> Result<(), DS3231Error<I2C::Error>> {
        let mut datetime = self.datetime()?;
        datetime.hour = time.hour;
        datetime.minute = time.minute;
        datetime.second = time.second;
        self.set_datetime(&datetime)
    }

    /// Current time as seconds since the Unix epoch.
    ///
    /// # Errors
    /// See [`DS3231::datetime`].
    pub fn epoch(&mut self) -> Result<u32, DS3231Error<I2C::Error>> {
        Ok(self.datetime()?.to_epoch())
    }

    /// Sets the clock from seconds since the Unix epoch.
    ///
    /// # Errors
    /// Returns `DS3231Error::DateTime` with
    /// [`DS3231DateTimeError::EpochOutOfRange`] outside 2000-2099, otherwise see
    /// [`DS3231::set_datetime`].
    pub fn set_epoch(&mut self, epoch: u32) -> Result<(), DS3231Error<I2C::Error>> {
        let datetime = DateTime::from_epoch(epoch).map_err(DS3231Error::DateTime)?;
        self.set_datetime(&datetime)
    }

    /// Enables or disables the oscillator when running on battery (EOSC).
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn oscillator_enable(&mut self, enable: bool) -> Result<(), DS3231Error<I2C::Error>> {
        let oscillator = if enable {
            Oscillator::Enabled
        } else {
            Oscillator::Disabled
        };
        self.update_control(|control| control.set_oscillator_enable(oscillator))?;
        Ok(())
    }

    /// Returns `true` if the oscillator stop flag (OSF) is set, meaning the
    /// time may be invalid.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn is_oscillator_stopped(&mut self) -> Result<bool, DS3231Error<I2C::Error>> {
        Ok(self.status()?.oscillator_stop_flag())
    }

    /// Clears the oscillator stop flag (OSF).
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn clear_oscillator_stop_flag(&mut self) -> Result<(), DS3231Error<I2C::Error>> {
        self.update_status(|status| status.set_oscillator_stop_flag(false))?;
        Ok(())
    }

    /// Returns `true` when the oscillator is enabled and has not stopped.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn is_running(&mut self) -> Result<bool, DS3231Error<I2C::Error>> {
        let control = self.control()?;
        let status = self.status()?;
        Ok(control.oscillator_enable() == Oscillator::Enabled && !status.oscillator_stop_flag())
    }

    /// Writes the Alarm 1 registers in one transaction and clears the Alarm 1 flag.
    ///
    /// # Errors
    /// Returns `DS3231Error::Alarm` for an invalid configuration (nothing is
    /// written) or `DS3231Error::I2c` on bus failure.
    pub fn set_alarm1(&mut self, config: &Alarm1Config) -> Result<(), DS3231Error<I2C::Error>> {
        let alarm = DS3231Alarm1::from_config(config).map_err(DS3231Error::Alarm)?;
        let data: [u8; 4] = (&alarm).into();
        debug!("DS3231: alarm 1 registers: {:?}", data);
        self.write_registers(RegAddr::Alarm1Seconds, &data)?;
        self.clear_alarm_flag(AlarmId::Alarm1)
    }

    /// Reads back the Alarm 1 configuration.
    ///
    /// # Errors
    /// Returns `DS3231Error::Alarm` if the registers do not hold a supported
    /// configuration, or `DS3231Error::I2c` on bus failure.
    pub fn alarm1(&mut self) -> Result<Alarm1Config, DS3231Error<I2C::Error>> {
        let mut data = [0; 4];
        self.read_registers(RegAddr::Alarm1Seconds, &mut data)?;
        DS3231Alarm1::from(data)
            .to_config()
            .map_err(DS3231Error::Alarm)
    }

    /// Writes the Alarm 2 registers in one transaction and clears the Alarm 2 flag.
    ///
    /// # Errors
    /// See [`DS3231::set_alarm1`].
    pub fn set_alarm2(&mut self, config: &Alarm2Config) -> Result<(), DS3231Error<I2C::Error>> {
        let alarm = DS3231Alarm2::from_config(config).map_err(DS3231Error::Alarm)?;
        let data: [u8; 3] = (&alarm).into();
        debug!("DS3231: alarm 2 registers: {:?}", data);
        self.write_registers(RegAddr::Alarm2Minutes, &data)?;
        self.clear_alarm_flag(AlarmId::Alarm2)
    }

    /// Reads back the Alarm 2 configuration.
    ///
    /// # Errors
    /// See [`DS3231::alarm1`].
    pub fn alarm2(&mut self) -> Result<Alarm2Config, DS3231Error<I2C::Error>> {
        let mut data = [0; 3];
        self.read_registers(RegAddr::Alarm2Minutes, &mut data)?;
        DS3231Alarm2::from(data)
            .to_config()
            .map_err(DS3231Error::Alarm)
    }

    /// Enables or disables the interrupt output of an alarm.
    ///
    /// The alarm flag is cleared first, then the INT/SQW pin is switched to
    /// interrupt mode (which stops the square wave) and the alarm's interrupt
    /// enable bit is set or cleared.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn set_alarm_interrupt(
        &mut self,
        id: AlarmId,
        enable: bool,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        self.clear_alarm_flag(id)?;
        self.update_control(|control| {
            control.set_interrupt_control(InterruptControl::Interrupt);
            match id {
                AlarmId::Alarm1 => control.set_alarm1_interrupt_enable(enable),
                AlarmId::Alarm2 => control.set_alarm2_interrupt_enable(enable),
            }
        })?;
        Ok(())
    }

    /// Returns `true` if the alarm has triggered.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn alarm_flag(&mut self, id: AlarmId) -> Result<bool, DS3231Error<I2C::Error>> {
        let status = self.status()?;
        Ok(match id {
            AlarmId::Alarm1 => status.alarm1_flag(),
            AlarmId::Alarm2 => status.alarm2_flag(),
        })
    }

    /// Clears the triggered flag of an alarm.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn clear_alarm_flag(&mut self, id: AlarmId) -> Result<(), DS3231Error<I2C::Error>> {
        self.update_status(|status| match id {
            AlarmId::Alarm1 => status.set_alarm1_flag(false),
            AlarmId::Alarm2 => status.set_alarm2_flag(false),
        })?;
        Ok(())
    }

    /// Outputs a square wave on the INT/SQW pin, disabling alarm interrupts on it.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn enable_square_wave(
        &mut self,
        frequency: SquareWaveFrequency,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        self.update_control(|control| {
            control.set_interrupt_control(InterruptControl::SquareWave);
            control.set_square_wave_frequency(frequency);
        })?;
        Ok(())
    }

    /// Stops the square wave by switching the INT/SQW pin to interrupt mode.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn disable_square_wave(&mut self) -> Result<(), DS3231Error<I2C::Error>> {
        self.update_control(|control| control.set_interrupt_control(InterruptControl::Interrupt))?;
        Ok(())
    }

    /// Keeps the square wave running on battery power (BBSQW).
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn set_battery_backed_square_wave(
        &mut self,
        enable: bool,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        self.update_control(|control| control.set_battery_backed_square_wave(enable))?;
        Ok(())
    }

    /// Enables or disables the 32kHz output pin (EN32kHz).
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn enable_32khz_output(&mut self, enable: bool) -> Result<(), DS3231Error<I2C::Error>> {
        self.update_status(|status| status.set_enable_32khz_output(enable))?;
        Ok(())
    }

    /// Starts a temperature conversion (CONV).
    ///
    /// Returns `Ok(false)` without writing anything if a conversion is already
    /// in progress (BSY set).
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn start_temperature_conversion(&mut self) -> Result<bool, DS3231Error<I2C::Error>> {
        if self.status()?.busy() {
            warn!("DS3231: temperature conversion busy");
            return Ok(false);
        }
        self.update_control(|control| control.set_convert_temperature(true))?;
        Ok(true)
    }

    /// Reads the die temperature from both temperature registers in one
    /// transaction.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn temperature(&mut self) -> Result<TemperatureReading, DS3231Error<I2C::Error>> {
        let mut data = [0; 2];
        self.read_registers(RegAddr::MSBTemp, &mut data)?;
        Ok(TemperatureReading::from(data))
    }

    /// Reads the signed aging offset.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn aging_offset(&mut self) -> Result<i8, DS3231Error<I2C::Error>> {
        Ok(self.aging_offset_register()?.offset())
    }

    /// Writes the signed aging offset and starts a temperature conversion so
    /// that it takes effect.
    ///
    /// Returns whether the conversion was started, see
    /// [`DS3231::start_temperature_conversion`].
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn set_aging_offset(&mut self, offset: i8) -> Result<bool, DS3231Error<I2C::Error>> {
        self.set_aging_offset_register(AgingOffset::from_offset(offset))?;
        self.start_temperature_conversion()
    }

    /// Reads all registers in one transaction.
    ///
    /// # Errors
    /// Returns `DS3231Error::I2c` on bus failure.
    pub fn dump_registers(&mut self) -> Result<RegisterDump, DS3231Error<I2C::Error>> {
        let mut data = [0; NUM_REGISTERS];
        self.read_registers(RegAddr::Seconds, &mut data)?;
        Ok(RegisterDump(data))
    }
}

// Raw single register access
macro_rules! impl_register_access {
    ($(($name:ident, $regaddr:expr, $typ:ty)),+) => {
        impl<I2C: I2c> DS3231<I2C> {
            $(
                paste! {
                    #[doc = concat!("Gets the value of the ", stringify!($name), " register.")]
                    #[doc = "\n\n# Errors"]
                    #[doc = "Returns `DS3231Error::I2c` on bus failure."]
                    pub fn $name(&mut self) -> Result<$typ, DS3231Error<I2C::Error>> {
                        let mut data = [0];
                        self.read_registers($regaddr, &mut data)?;
                        Ok(<$typ>::from(data[0]))
                    }

                    #[doc = concat!("Sets the value of the ", stringify!($name), " register.")]
                    #[doc = "\n\n# Errors"]
                    #[doc = "Returns `DS3231Error::I2c` on bus failure."]
                    pub fn [<set_ $name>](&mut self, value: $typ) -> Result<(), DS3231Error<I2C::Error>> {
                        self.write_registers($regaddr, &[value.into()])?;
                        Ok(())
                    }
                }
            )+
        }
    }
}

impl_register_access!(
    (control, RegAddr::Control, Control),
    (status, RegAddr::ControlStatus, Status),
    (aging_offset_register, RegAddr::AgingOffset, AgingOffset)
);
