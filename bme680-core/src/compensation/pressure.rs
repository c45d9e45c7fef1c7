//! Pressure compensation
//!
//! ## Algorithm
//!
//! The formula works in two stages:
//!
//! 1. Build an offset (`var2`, from p4..p6) and a scale (`var1`, from
//!    p1..p3), both as functions of the fine temperature.
//! 2. Apply them to the inverted raw reading and add the p7..p10
//!    linearisation terms.
//!
//! ## Division Guard
//!
//! Stage 2 divides by the scale. When the scale *truncated to an integer* is
//! zero the result is 0.0 Pa instead. A scale of 0.9 therefore takes the
//! guard even though the division would be finite. The check is an integer
//! truncation, as in the vendor reference code, not an epsilon comparison.

use crate::{calibration::Calibration, constants::compensation::PRESSURE_ADC_OFFSET};

use super::FineTemperature;

/// Compensate a raw 20-bit pressure sample, in Pa.
///
/// Returns exactly `0.0` when the scale term truncates to zero. A reading
/// of 0.0 Pa can therefore mean either vacuum or a degenerate calibration.
pub fn compensate_pressure(raw_adc: u32, calib: &Calibration, t_fine: FineTemperature) -> f32 {
    let p1 = f32::from(calib.p1);
    let p2 = f32::from(calib.p2);
    let p3 = f32::from(calib.p3);
    let p4 = f32::from(calib.p4);
    let p5 = f32::from(calib.p5);
    let p6 = f32::from(calib.p6);
    let p7 = f32::from(calib.p7);
    let p8 = f32::from(calib.p8);
    let p9 = f32::from(calib.p9);
    let p10 = f32::from(calib.p10);

    let mut var1 = t_fine.value() / 2.0 - 64000.0;
    let mut var2 = var1 * var1 * (p6 / 131072.0);
    var2 += var1 * p5 * 2.0;
    var2 = var2 / 4.0 + p4 * 65536.0;
    var1 = ((p3 * var1 * var1) / 16384.0 + p2 * var1) / 524288.0;
    var1 = (1.0 + var1 / 32768.0) * p1;

    // `as` truncates toward zero and maps NaN to 0
    if var1 as i32 == 0 {
        log_warn!("pressure scale truncates to zero ({}), reporting 0 Pa", var1);
        return 0.0;
    }

    let mut pressure = PRESSURE_ADC_OFFSET - raw_adc as f32;
    pressure = ((pressure - var2 / 4096.0) * 6250.0) / var1;

    let quadratic = p9 * pressure * pressure / 2147483648.0;
    let linear = pressure * (p8 / 32768.0);
    let scaled = pressure / 256.0;
    let cubic = scaled * scaled * scaled * (p10 / 131072.0);

    pressure + (quadratic + linear + cubic + p7 * 128.0) / 16.0
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
    fn sea_level_pressure() {
        let pressure = compensate_pressure(355_027, &sample(), room_t_fine());
        assert!((pressure - 100_800.0).abs() < 1.0, "got {pressure}");
    }

    #[test]
    fn zero_p1_takes_guard() {
        let mut calib = sample();
        calib.p1 = 0;
        assert_eq!(compensate_pressure(355_027, &calib, room_t_fine()), 0.0);
        assert_eq!(compensate_pressure(0, &calib, room_t_fine()), 0.0);
    }

    #[test]
    fn fractional_scale_takes_guard() {
        // with p1 = 1 the scale is 0.9999997: non-zero as a float, zero once truncated
        let mut calib = sample();
        calib.p1 = 1;
        assert_eq!(compensate_pressure(355_027, &calib, room_t_fine()), 0.0);

        // p1 = 2 clears the guard and divides by a tiny scale
        calib.p1 = 2;
        let pressure = compensate_pressure(355_027, &calib, room_t_fine());
        assert!(pressure > 1.0e12);
    }

    #[test]
    fn nan_t_fine_takes_guard() {
        let t_fine = FineTemperature::new(f32::NAN);
        assert_eq!(compensate_pressure(355_027, &sample(), t_fine), 0.0);
    }

    #[test]
    fn higher_adc_means_lower_pressure() {
        let t_fine = room_t_fine();
        let low = compensate_pressure(400_000, &sample(), t_fine);
        let high = compensate_pressure(300_000, &sample(), t_fine);
        assert!(high > low);
    }
}
