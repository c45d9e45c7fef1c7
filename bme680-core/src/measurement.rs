//! Compensated readings

/// Temperature, pressure and humidity from one measurement cycle
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Temperature in °C
    pub temperature: f32,
    /// Pressure in Pa
    pub pressure: f32,
    /// Relative humidity in %RH, within [0, 100]
    pub humidity: f32,
}

impl Measurement {
    /// Whether the pressure reads exactly 0 Pa.
    ///
    /// This is what the division guard reports for a degenerate calibration.
    /// A true vacuum reads the same, so treat it as a hint rather than a
    /// verdict.
    pub fn is_pressure_guarded(&self) -> bool {
        self.pressure == 0.0
    }
}
