//! Compensation Scales and Output Limits
//!
//! The polynomial coefficients themselves stay inline in the formulas,
//! where they can be checked line by line against the datasheet.

/// Divisor turning `t_fine` into degrees Celsius.
///
/// Used by temperature compensation for its result and again by humidity
/// compensation, which recomputes the temperature from `t_fine`.
pub const FINE_TEMPERATURE_PER_DEGREE: f32 = 5120.0;

/// Offset subtracted from the raw pressure ADC value (2^20).
pub const PRESSURE_ADC_OFFSET: f32 = 1_048_576.0;

/// Lower saturation limit of compensated humidity (%RH).
pub const HUMIDITY_MIN_PCT: f32 = 0.0;

/// Upper saturation limit of compensated humidity (%RH).
pub const HUMIDITY_MAX_PCT: f32 = 100.0;

/// Largest value of the 20-bit temperature and pressure ADCs.
pub const ADC_20BIT_MAX: u32 = 0xF_FFFF;
