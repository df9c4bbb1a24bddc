//! Temperature reading decoded from the MSB/LSB temperature registers.

use crate::registers::{Temperature, TemperatureFraction};

/// Die temperature in degrees Celsius with quarter degree resolution.
///
/// The value is `degrees` plus `fraction` hundredths, where the fraction is
/// always added in the positive direction, matching the register layout:
/// an MSB of `0xE7` (-25) with LSB `0x40` reads as -25 + 0.25 = -24.75.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureReading {
    /// Integer part (two's complement MSB)
    pub degrees: i8,
    /// Fraction in hundredths (0, 25, 50 or 75)
    pub fraction: u8,
}

impl TemperatureReading {
    /// Decodes the temperature register pair.
    #[must_use]
    pub fn from_registers(msb: Temperature, lsb: TemperatureFraction) -> Self {
        TemperatureReading {
            degrees: msb.degrees(),
            fraction: lsb.hundredths(),
        }
    }

    /// Temperature as a floating point value.
    #[cfg(feature = "temperature_f32")]
    #[must_use]
    pub fn as_f32(&self) -> f32 {
        f32::from(self.degrees) + f32::from(self.fraction) / 100.0
    }
}

impl From<[u8; 2]> for TemperatureReading {
    fn from(data: [u8; 2]) -> Self {
        TemperatureReading::from_registers(Temperature(data[0]), TemperatureFraction(data[1]))
    }
}
