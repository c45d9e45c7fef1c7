//! Error Types for Register Decoding
//!
//! ## Design Philosophy
//!
//! The compensation formulas themselves never fail: a zero pressure
//! denominator yields a 0.0 Pa sentinel and humidity saturates at the
//! physical limits. Errors only arise at the edges of the crate, where raw
//! register bytes are turned into typed values:
//!
//! 1. **Small Size**: Variants carry a handful of integers and a
//!    `&'static str` label, so the enum stays `Copy`.
//!
//! 2. **No Heap Allocation**: Nothing here allocates. The same type works in
//!    `no_std` firmware and hosted tools.
//!
//! ## Error Categories
//!
//! - `InvalidBufferLength`: a burst read returned fewer bytes than the
//!   register block requires
//! - `AdcOutOfRange`: a raw ADC value does not fit the converter resolution
//!
//! ```rust
//! use bme680_core::{Calibration, CompensationError};
//!
//! let short = [0u8; 4];
//! match Calibration::from_registers(&short, &short) {
//!     Err(CompensationError::InvalidBufferLength { region, .. }) => {
//!         // retry the burst read for `region`
//!         let _ = region;
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for decoding operations
pub type CompensationResult<T> = Result<T, CompensationError>;

/// Decoding errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompensationError {
    /// A register buffer is shorter than the block it should contain
    #[error("{region} buffer holds {actual} bytes, need {expected}")]
    InvalidBufferLength {
        /// Register block being decoded
        region: &'static str,
        /// Minimum number of bytes for the block
        expected: usize,
        /// Number of bytes supplied
        actual: usize,
    },

    /// Raw ADC value exceeds the converter resolution
    #[error("{channel} ADC value {value} exceeds {max}")]
    AdcOutOfRange {
        /// Measurement channel ("temperature", "pressure")
        channel: &'static str,
        /// Offending raw value
        value: u32,
        /// Largest representable raw value
        max: u32,
    },
}

impl CompensationError {
    /// Check that `buf` holds at least `expected` bytes
    pub(crate) fn check_len(
        region: &'static str,
        buf: &[u8],
        expected: usize,
    ) -> CompensationResult<()> {
        if buf.len() < expected {
            return Err(Self::InvalidBufferLength {
                region,
                expected,
                actual: buf.len(),
            });
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CompensationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidBufferLength { region, expected, actual } =>
                defmt::write!(fmt, "{} buffer: {} bytes, need {}", region, actual, expected),
            Self::AdcOutOfRange { channel, value, max } =>
                defmt::write!(fmt, "{} ADC {} exceeds {}", channel, value, max),
        }
    }
}
