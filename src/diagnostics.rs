//! Snapshot of the full register map for debugging.
//!
//! [`RegisterDump`] is filled by [`crate::DS3231::dump_registers`] in a single
//! bus transaction, so the values are consistent with each other.

use core::fmt;

use crate::registers::{RegAddr, NUM_REGISTERS};

/// Raw contents of registers 0x00-0x12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterDump(pub [u8; NUM_REGISTERS]);

impl RegisterDump {
    /// Value of one register.
    #[must_use]
    pub fn get(&self, reg: RegAddr) -> u8 {
        self.0[reg as usize]
    }

    /// Iterates over `(register, value)` pairs in address order.
    pub fn iter(&self) -> impl Iterator<Item = (RegAddr, u8)> + '_ {
        RegAddr::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

impl fmt::Display for RegisterDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (reg, value) in self.iter() {
            writeln!(f, "0x{:02x}: 0x{:02x}  {}", reg as u8, value, reg.name())?;
        }
        Ok(())
    }
}
