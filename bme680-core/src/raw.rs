//! Raw ADC samples
//!
//! Temperature and pressure come out of 20-bit converters, humidity out of
//! a 16-bit one. The data registers pack them as:
//!
//! ```text
//! 0x1F press_msb  0x20 press_lsb  0x21 press_xlsb[7:4]
//! 0x22 temp_msb   0x23 temp_lsb   0x24 temp_xlsb[7:4]
//! 0x25 hum_msb    0x26 hum_lsb
//! ```

use crate::{
    constants::{compensation::ADC_20BIT_MAX, registers::DATA_BLOCK_LEN},
    errors::{CompensationError, CompensationResult},
};

/// One set of uncompensated readings from a measurement cycle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// 20-bit temperature ADC value
    pub temperature: u32,
    /// 20-bit pressure ADC value
    pub pressure: u32,
    /// 16-bit humidity ADC value
    pub humidity: u16,
}

impl RawSample {
    /// Build a sample, rejecting values wider than the 20-bit converters
    pub fn new(temperature: u32, pressure: u32, humidity: u16) -> CompensationResult<Self> {
        check_20bit("temperature", temperature)?;
        check_20bit("pressure", pressure)?;
        Ok(Self { temperature, pressure, humidity })
    }

    /// Decode the burst read starting at the pressure MSB register (0x1F).
    ///
    /// At least 8 bytes are required; anything after the humidity LSB is
    /// ignored so a longer read that includes gas registers can be passed
    /// as is.
    pub fn from_data_registers(buf: &[u8]) -> CompensationResult<Self> {
        CompensationError::check_len("data 0x1F", buf, DATA_BLOCK_LEN)?;

        Ok(Self {
            pressure: unpack_20bit(buf[0], buf[1], buf[2]),
            temperature: unpack_20bit(buf[3], buf[4], buf[5]),
            humidity: u16::from_be_bytes([buf[6], buf[7]]),
        })
    }
}

#[inline]
fn unpack_20bit(msb: u8, lsb: u8, xlsb: u8) -> u32 {
    (u32::from(msb) << 12) | (u32::from(lsb) << 4) | (u32::from(xlsb) >> 4)
}

fn check_20bit(channel: &'static str, value: u32) -> CompensationResult<()> {
    if value > ADC_20BIT_MAX {
        return Err(CompensationError::AdcOutOfRange {
            channel,
            value,
            max: ADC_20BIT_MAX,
        });
    }
    Ok(())
}
