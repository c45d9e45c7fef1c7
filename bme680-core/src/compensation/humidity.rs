//! Humidity compensation
//!
//! Offset (h1, h3) and temperature-dependent sensitivity (h2, h4, h5) are
//! applied first, then a quadratic correction (h6, h7). The temperature is
//! recomputed from `t_fine` rather than passed in. Results outside 0-100 %RH
//! saturate.

use crate::{
    calibration::Calibration,
    constants::compensation::{HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT},
};

use super::FineTemperature;

/// Compensate a raw 16-bit humidity sample, in %RH clamped to [0, 100].
pub fn compensate_humidity(raw_adc: u16, calib: &Calibration, t_fine: FineTemperature) -> f32 {
    let temp_comp = t_fine.celsius();

    let var1 = f32::from(raw_adc)
        - (f32::from(calib.h1) * 16.0 + (f32::from(calib.h3) / 2.0) * temp_comp);
    let sensitivity = (f32::from(calib.h2) / 262144.0)
        * (1.0
            + (f32::from(calib.h4) / 16384.0) * temp_comp
            + (f32::from(calib.h5) / 1048576.0) * temp_comp * temp_comp);
    let var2 = var1 * sensitivity;
    let var3 = f32::from(calib.h6) / 16384.0;
    let var4 = f32::from(calib.h7) / 2097152.0;

    let humidity = var2 + (var3 + var4 * temp_comp) * var2 * var2;

    if humidity > HUMIDITY_MAX_PCT {
        log_trace!("humidity {} saturated high", humidity);
        HUMIDITY_MAX_PCT
    } else if humidity < HUMIDITY_MIN_PCT {
        log_trace!("humidity {} saturated low", humidity);
        HUMIDITY_MIN_PCT
    } else {
        humidity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::sample;
    use crate::compensation::compensate_temperature;

    fn room_t_fine() -> FineTemperature {
        compensate_temperature(498_073, &sample()).1
    }

    #[test]
    fn mid_range_humidity() {
        let humidity = compensate_humidity(22_055, &sample(), room_t_fine());
        assert!((humidity - 50.006).abs() < 0.01, "got {humidity}");
    }

    #[test]
    fn saturates_at_limits() {
        // unclamped these come out near 521 and -35 %RH
        assert_eq!(compensate_humidity(u16::MAX, &sample(), room_t_fine()), 100.0);
        assert_eq!(compensate_humidity(0, &sample(), room_t_fine()), 0.0);
    }

    #[test]
    fn depends_on_fine_temperature() {
        let cold = compensate_temperature(0, &sample()).1;
        let warm = compensate_humidity(22_055, &sample(), room_t_fine());
        let chilled = compensate_humidity(22_055, &sample(), cold);
        assert!((chilled - 53.99).abs() < 0.05, "got {chilled}");
        assert_ne!(warm, chilled);
    }

    #[test]
    fn zeroed_calibration_reads_zero() {
        // raw * 0 sensitivity collapses to exactly zero
        let t_fine = compensate_temperature(498_073, &Calibration::default()).1;
        assert_eq!(compensate_humidity(30_000, &Calibration::default(), t_fine), 0.0);
    }
}
