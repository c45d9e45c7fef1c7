//! Factory Calibration Record
//!
//! ## Background
//!
//! Every BME680 leaves the factory with its own set of trimming
//! coefficients burned into NVM. The compensation formulas are only
//! meaningful together with the coefficients of the device that produced the
//! raw ADC values, so the record is read once at bring-up and kept for the
//! whole session.
//!
//! ## Register Layout
//!
//! The coefficients are spread over two bursts plus three loose registers:
//!
//! ```text
//! 0xE1..=0xEE  h2 h1/h2 h1 h3 h4 h5 h6 h7 t1(le) gh2(le) gh1 gh3
//! 0x8A..=0xA0  t2(le) t3 - p1(le) p2(le) p3 - p4(le) p5(le) p7 p6 - - p8(le) p9(le) p10
//! 0x00         res_heat_val
//! 0x02         res_heat_range (bits 5:4)
//! 0x04         range_sw_err (bits 7:4, signed)
//! ```
//!
//! h1 and h2 are 12-bit values sharing the nibbles of 0xE2.
//!
//! ## Field Widths
//!
//! Fields keep the exact register widths. Compensation widens them to `f32`
//! at the point of use.

use crate::{
    constants::registers::{
        CALIB_BLOCK_1_LEN, CALIB_BLOCK_2_LEN, H1_LSB_MASK, RANGE_SW_ERR_MASK,
        RES_HEAT_RANGE_MASK,
    },
    errors::{CompensationError, CompensationResult},
};

/// Per-device calibration coefficients
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Humidity offset (12-bit)
    pub h1: u16,
    /// Humidity sensitivity (12-bit)
    pub h2: u16,
    /// Humidity offset temperature coefficient
    pub h3: i8,
    /// Humidity sensitivity temperature coefficient, linear
    pub h4: i8,
    /// Humidity sensitivity temperature coefficient, quadratic
    pub h5: i8,
    /// Humidity quadratic term
    pub h6: u8,
    /// Humidity quadratic term temperature coefficient
    pub h7: i8,

    /// Gas heater coefficient 1
    pub gh1: i8,
    /// Gas heater coefficient 2
    pub gh2: i16,
    /// Gas heater coefficient 3
    pub gh3: i8,

    /// Temperature reference point
    pub t1: u16,
    /// Temperature linear term
    pub t2: i16,
    /// Temperature quadratic term
    pub t3: i8,

    /// Pressure scale
    pub p1: u16,
    /// Pressure scale, linear temperature term
    pub p2: i16,
    /// Pressure scale, quadratic temperature term
    pub p3: i8,
    /// Pressure offset
    pub p4: i16,
    /// Pressure offset, linear temperature term
    pub p5: i16,
    /// Pressure offset, quadratic temperature term
    pub p6: i8,
    /// Pressure constant offset
    pub p7: i8,
    /// Pressure linear correction
    pub p8: i16,
    /// Pressure quadratic correction
    pub p9: i16,
    /// Pressure cubic correction
    pub p10: u8,

    /// Heater resistance range
    pub res_heat_range: u8,
    /// Heater resistance correction
    pub res_heat_val: i8,
    /// Gas range switching error
    pub range_sw_err: i8,
}

#[inline]
fn le_u16(lsb: u8, msb: u8) -> u16 {
    u16::from_le_bytes([lsb, msb])
}

#[inline]
fn le_i16(lsb: u8, msb: u8) -> i16 {
    i16::from_le_bytes([lsb, msb])
}

impl Calibration {
    /// Decode the two factory calibration bursts.
    ///
    /// `cd1` must start at 0xE1 and hold at least 14 bytes, `cd2` must start
    /// at 0x8A and hold at least 23 bytes. Trailing bytes are ignored.
    /// Device range fields are left at zero, see [`Self::with_device_ranges`].
    ///
    /// ```rust
    /// use bme680_core::Calibration;
    ///
    /// let cd1 = [0u8; 14];
    /// let cd2 = [0u8; 23];
    /// let calib = Calibration::from_registers(&cd1, &cd2).unwrap();
    /// assert_eq!(calib, Calibration::default());
    /// ```
    pub fn from_registers(cd1: &[u8], cd2: &[u8]) -> CompensationResult<Self> {
        CompensationError::check_len("calibration 0xE1", cd1, CALIB_BLOCK_1_LEN)?;
        CompensationError::check_len("calibration 0x8A", cd2, CALIB_BLOCK_2_LEN)?;

        let calib = Self {
            h1: (u16::from(cd1[2]) << 4) | u16::from(cd1[1] & H1_LSB_MASK),
            h2: (u16::from(cd1[0]) << 4) | u16::from(cd1[1] >> 4),
            h3: cd1[3] as i8,
            h4: cd1[4] as i8,
            h5: cd1[5] as i8,
            h6: cd1[6],
            h7: cd1[7] as i8,

            t1: le_u16(cd1[8], cd1[9]),
            gh2: le_i16(cd1[10], cd1[11]),
            gh1: cd1[12] as i8,
            gh3: cd1[13] as i8,

            t2: le_i16(cd2[0], cd2[1]),
            t3: cd2[2] as i8,

            p1: le_u16(cd2[4], cd2[5]),
            p2: le_i16(cd2[6], cd2[7]),
            p3: cd2[8] as i8,
            p4: le_i16(cd2[10], cd2[11]),
            p5: le_i16(cd2[12], cd2[13]),
            p7: cd2[14] as i8,
            p6: cd2[15] as i8,
            p8: le_i16(cd2[18], cd2[19]),
            p9: le_i16(cd2[20], cd2[21]),
            p10: cd2[22],

            res_heat_range: 0,
            res_heat_val: 0,
            range_sw_err: 0,
        };

        log_trace!("calibration decoded: t1={} p1={} h1={}", calib.t1, calib.p1, calib.h1);
        Ok(calib)
    }

    /// Attach the heater range fields read from 0x02, 0x00 and 0x04.
    ///
    /// Compensation ignores these; they are kept so the record is complete
    /// for gas resistance code built on top of it.
    pub fn with_device_ranges(
        mut self,
        res_heat_range_reg: u8,
        res_heat_val_reg: u8,
        range_sw_err_reg: u8,
    ) -> Self {
        self.res_heat_range = (res_heat_range_reg & RES_HEAT_RANGE_MASK) >> 4;
        self.res_heat_val = res_heat_val_reg as i8;
        // arithmetic shift keeps the sign of the high nibble
        self.range_sw_err = ((range_sw_err_reg & RANGE_SW_ERR_MASK) as i8) >> 4;
        self
    }
}

/// Coefficients of a bench device, shared by the unit tests
#[cfg(test)]
pub(crate) fn sample() -> Calibration {
    Calibration {
        h1: 776,
        h2: 1010,
        h3: 0,
        h4: 45,
        h5: 20,
        h6: 120,
        h7: -100,
        gh1: -30,
        gh2: -12000,
        gh3: 18,
        t1: 26218,
        t2: 26683,
        t3: 3,
        p1: 36094,
        p2: -10547,
        p3: 88,
        p4: 7090,
        p5: -59,
        p6: 30,
        p7: 52,
        p8: -1394,
        p9: -2262,
        p10: 30,
        res_heat_range: 0,
        res_heat_val: 0,
        range_sw_err: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Register dump of the `sample()` device
    const CD1: [u8; 14] = [
        0x3F, 0x28, 0x30, 0x00, 0x2D, 0x14, 0x78, 0x9C,
        0x6A, 0x66, 0x20, 0xD1, 0xE2, 0x12,
    ];
    const CD2: [u8; 23] = [
        0x3B, 0x68, 0x03, 0x00, 0xFE, 0x8C, 0xCD, 0xD6, 0x58, 0x10, 0xB2, 0x1B,
        0xC5, 0xFF, 0x34, 0x1E, 0x00, 0x00, 0x8E, 0xFA, 0x2A, 0xF7, 0x1E,
    ];

    #[test]
    fn decodes_register_dump() {
        let calib = Calibration::from_registers(&CD1, &CD2).unwrap();
        assert_eq!(calib, sample());
    }

    #[test]
    fn humidity_nibbles_split() {
        // 0xE2 = 0xA5: high nibble belongs to h2, low nibble to h1
        let mut cd1 = [0u8; 14];
        cd1[0] = 0x12;
        cd1[1] = 0xA5;
        cd1[2] = 0x34;
        let calib = Calibration::from_registers(&cd1, &[0u8; 23]).unwrap();
        assert_eq!(calib.h1, 0x345);
        assert_eq!(calib.h2, 0x12A);
    }

    #[test]
    fn p6_and_p7_are_swapped_in_memory() {
        let mut cd2 = [0u8; 23];
        cd2[14] = 7;
        cd2[15] = 6;
        let calib = Calibration::from_registers(&[0u8; 14], &cd2).unwrap();
        assert_eq!(calib.p6, 6);
        assert_eq!(calib.p7, 7);
    }

    #[test]
    fn short_buffers_rejected() {
        let err = Calibration::from_registers(&CD1[..10], &CD2).unwrap_err();
        assert!(matches!(
            err,
            CompensationError::InvalidBufferLength { expected: 14, actual: 10, .. }
        ));

        let err = Calibration::from_registers(&CD1, &CD2[..22]).unwrap_err();
        assert!(matches!(
            err,
            CompensationError::InvalidBufferLength { expected: 23, actual: 22, .. }
        ));
    }

    #[test]
    fn device_ranges() {
        let calib = sample().with_device_ranges(0x2A, 0xF3, 0xE0);
        assert_eq!(calib.res_heat_range, 2);
        assert_eq!(calib.res_heat_val, -13);
        assert_eq!(calib.range_sw_err, -2);

        let calib = sample().with_device_ranges(0x00, 0x27, 0x3F);
        assert_eq!(calib.res_heat_range, 0);
        assert_eq!(calib.res_heat_val, 39);
        assert_eq!(calib.range_sw_err, 3);
    }
}
