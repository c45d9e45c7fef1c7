//! Constants for the BME680 compensation core
//!
//! Register geometry and the fixed scales of the datasheet formulas are
//! collected here so decoding and compensation code refer to them by name.
//!
//! ## Organization
//!
//! - **Registers**: addresses, block lengths and bit masks of the factory
//!   calibration and data registers
//! - **Compensation**: output limits and the scales shared between the
//!   temperature, pressure and humidity formulas

/// Register addresses, burst lengths and masks.
pub mod registers;

/// Scales and limits of the compensation formulas.
pub mod compensation;

pub use registers::{
    CALIB_BLOCK_1_START, CALIB_BLOCK_1_LEN, CALIB_BLOCK_2_START, CALIB_BLOCK_2_LEN,
    DATA_BLOCK_START, DATA_BLOCK_LEN, CHIP_ID,
};

pub use compensation::{
    FINE_TEMPERATURE_PER_DEGREE, HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT, ADC_20BIT_MAX,
};
