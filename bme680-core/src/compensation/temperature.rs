//! Temperature compensation
//!
//! Two-term quadratic correction around the reference point `t1`. Besides
//! the temperature it yields `t_fine`, the fine-resolution intermediate that
//! pressure and humidity compensation consume.

use crate::{calibration::Calibration, constants::compensation::FINE_TEMPERATURE_PER_DEGREE};

use super::FineTemperature;

/// Compensate a raw 20-bit temperature sample.
///
/// Returns the temperature in °C together with the [`FineTemperature`]
/// needed by [`compensate_pressure`](super::compensate_pressure) and
/// [`compensate_humidity`](super::compensate_humidity). Defined for every
/// `u32` input; the result is neither rounded nor clamped.
pub fn compensate_temperature(raw_adc: u32, calib: &Calibration) -> (f32, FineTemperature) {
    let adc = raw_adc as f32;
    let t1 = f32::from(calib.t1);

    let var1 = (adc / 16384.0 - t1 / 1024.0) * f32::from(calib.t2);
    let delta = adc / 131072.0 - t1 / 8192.0;
    let var2 = (delta * delta) * (f32::from(calib.t3) * 16.0);

    let t_fine = FineTemperature::new(var1 + var2);
    (t_fine.value() / FINE_TEMPERATURE_PER_DEGREE, t_fine)
}
