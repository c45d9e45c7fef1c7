//! BME680 Register Map (calibration and data blocks)
//!
//! Only the registers this crate decodes are listed. Control, heater and
//! gas registers belong to the driver layer.

// ===== IDENTIFICATION =====

/// Chip identification register.
pub const CHIP_ID_ADDR: u8 = 0xD0;

/// Value read back from [`CHIP_ID_ADDR`] on a BME680.
pub const CHIP_ID: u8 = 0x61;

// ===== FACTORY CALIBRATION =====

/// First byte of the humidity / t1 / gas calibration block.
pub const CALIB_BLOCK_1_START: u8 = 0xE1;

/// Length of the block at [`CALIB_BLOCK_1_START`] (0xE1..=0xEE).
pub const CALIB_BLOCK_1_LEN: usize = 14;

/// First byte of the temperature / pressure calibration block.
pub const CALIB_BLOCK_2_START: u8 = 0x8A;

/// Length of the block at [`CALIB_BLOCK_2_START`] (0x8A..=0xA0).
pub const CALIB_BLOCK_2_LEN: usize = 23;

/// Heater resistance range register, bits 5:4.
pub const RES_HEAT_RANGE_ADDR: u8 = 0x02;

/// Heater resistance correction register.
pub const RES_HEAT_VAL_ADDR: u8 = 0x00;

/// Range switching error register, bits 7:4.
pub const RANGE_SW_ERR_ADDR: u8 = 0x04;

/// Mask for the heater range field.
pub const RES_HEAT_RANGE_MASK: u8 = 0x30;

/// Mask for the signed range switching error nibble.
pub const RANGE_SW_ERR_MASK: u8 = 0xF0;

/// Low nibble of the shared h1/h2 register (belongs to h1).
pub const H1_LSB_MASK: u8 = 0x0F;

// ===== MEASUREMENT DATA =====

/// Pressure MSB, start of the pressure/temperature/humidity burst.
pub const DATA_BLOCK_START: u8 = 0x1F;

/// Bytes from [`DATA_BLOCK_START`] through humidity LSB (0x1F..=0x26).
pub const DATA_BLOCK_LEN: usize = 8;
