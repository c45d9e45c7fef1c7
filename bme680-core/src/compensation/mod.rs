//! Datasheet Compensation for BME680 Readings
//!
//! ## Overview
//!
//! The sensor reports uncalibrated ADC counts. Three polynomial formulas,
//! parameterised by the per-device [`Calibration`], turn them into physical
//! units:
//!
//! | channel     | input  | output | coefficients |
//! |-------------|--------|--------|--------------|
//! | temperature | 20-bit | °C     | t1..t3       |
//! | pressure    | 20-bit | Pa     | p1..p10      |
//! | humidity    | 16-bit | %RH    | h1..h7       |
//!
//! All arithmetic is single precision, matching the vendor floating point
//! reference. Switching to `f64` changes rounding and breaks parity with it.
//!
//! ## Ordering
//!
//! Pressure and humidity are cross-compensated with the fine temperature
//! `t_fine` produced by temperature compensation. `t_fine` is carried in a
//! [`FineTemperature`] value that only [`compensate_temperature`] can
//! create, so the ordering is enforced by the signatures:
//!
//! ```rust
//! use bme680_core::{Calibration, compensation::*};
//!
//! let calib = Calibration::default();
//! let (celsius, t_fine) = compensate_temperature(498_073, &calib);
//! let pascal = compensate_pressure(355_027, &calib, t_fine);
//! let rh = compensate_humidity(22_055, &calib, t_fine);
//! # let _ = (celsius, pascal, rh);
//! ```
//!
//! [`compensate`] runs the three in sequence for a whole [`RawSample`].
//!
//! ## Concurrency
//!
//! Everything here is a pure function of its arguments. [`FineTemperature`]
//! is `Copy` and the calibration is only borrowed immutably, so several
//! sensors (or threads) can compensate in parallel without locking.

mod humidity;
mod pressure;
mod temperature;

pub use humidity::compensate_humidity;
pub use pressure::compensate_pressure;
pub use temperature::compensate_temperature;

use crate::{
    calibration::Calibration, constants::compensation::FINE_TEMPERATURE_PER_DEGREE,
    measurement::Measurement, raw::RawSample,
};

/// Fine-resolution temperature (`t_fine`) from temperature compensation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FineTemperature(f32);

impl FineTemperature {
    pub(crate) fn new(t_fine: f32) -> Self {
        Self(t_fine)
    }

    /// Raw `t_fine` in internal units
    pub fn value(self) -> f32 {
        self.0
    }

    /// Temperature in °C derived from `t_fine`
    pub fn celsius(self) -> f32 {
        self.0 / FINE_TEMPERATURE_PER_DEGREE
    }
}

/// Compensate a full measurement cycle.
///
/// Temperature runs first; its `t_fine` then feeds pressure and humidity.
pub fn compensate(raw: &RawSample, calib: &Calibration) -> Measurement {
    let (temperature, t_fine) = compensate_temperature(raw.temperature, calib);
    Measurement {
        temperature,
        pressure: compensate_pressure(raw.pressure, calib, t_fine),
        humidity: compensate_humidity(raw.humidity, calib, t_fine),
    }
}
