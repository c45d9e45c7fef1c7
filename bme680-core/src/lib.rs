//! Compensation core for the Bosch BME680 environmental sensor
//!
//! Turns raw ADC counts into °C, Pa and %RH using the per-device factory
//! calibration and the datasheet floating point formulas. No bus access
//! happens here: callers hand over register bytes (or already decoded
//! values) and get plain numbers back.
//!
//! Key constraints:
//! - `no_std`, no heap allocation
//! - Single precision arithmetic, matching the vendor reference bit for bit
//!   where the platform's `f32` allows
//! - Temperature must be compensated before pressure and humidity; the
//!   types make any other order impossible
//!
//! ```no_run
//! use bme680_core::{compensate, Calibration, RawSample};
//!
//! # fn read(_addr: u8, _buf: &mut [u8]) {}
//! let (mut cd1, mut cd2, mut data) = ([0u8; 14], [0u8; 23], [0u8; 8]);
//! read(0xE1, &mut cd1);
//! read(0x8A, &mut cd2);
//! let calib = Calibration::from_registers(&cd1, &cd2).unwrap();
//!
//! // Once per measurement cycle
//! read(0x1F, &mut data);
//! let raw = RawSample::from_data_registers(&data).unwrap();
//! let reading = compensate(&raw, &calib);
//! println!("{} °C, {} Pa, {} %RH", reading.temperature, reading.pressure, reading.humidity);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod calibration;
pub mod compensation;
pub mod constants;
pub mod errors;
pub mod measurement;
pub mod raw;

// Public API
pub use calibration::Calibration;
pub use compensation::{
    compensate,
    compensate_humidity,
    compensate_pressure,
    compensate_temperature,
    FineTemperature,
};
pub use errors::{CompensationError, CompensationResult};
pub use measurement::Measurement;
pub use raw::RawSample;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
