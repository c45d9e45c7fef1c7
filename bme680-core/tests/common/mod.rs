//! Shared fixtures: register dumps of a bench BME680

#![allow(dead_code)]

use bme680_core::Calibration;

/// Burst read of 0xE1..=0xEE
pub const CALIB_E1: [u8; 14] = [
    0x3F, 0x28, 0x30, 0x00, 0x2D, 0x14, 0x78, 0x9C,
    0x6A, 0x66, 0x20, 0xD1, 0xE2, 0x12,
];

/// Burst read of 0x8A..=0xA0
pub const CALIB_8A: [u8; 23] = [
    0x3B, 0x68, 0x03, 0x00, 0xFE, 0x8C, 0xCD, 0xD6, 0x58, 0x10, 0xB2, 0x1B,
    0xC5, 0xFF, 0x34, 0x1E, 0x00, 0x00, 0x8E, 0xFA, 0x2A, 0xF7, 0x1E,
];

/// Registers 0x02, 0x00 and 0x04
pub const RES_HEAT_RANGE: u8 = 0x16;
pub const RES_HEAT_VAL: u8 = 0x2E;
pub const RANGE_SW_ERR: u8 = 0x10;

/// Data burst from 0x1F at roughly 25 °C, 1008 hPa, 50 %RH
pub const DATA_ROOM: [u8; 8] = [0x56, 0xAD, 0x30, 0x79, 0x99, 0x90, 0x56, 0x27];

/// Temperature tolerance in °C
pub const TEMP_TOLERANCE_C: f32 = 0.1;
/// Pressure tolerance in Pa
pub const PRESSURE_TOLERANCE_PA: f32 = 10.0;
/// Humidity tolerance in %RH
pub const HUMIDITY_TOLERANCE_PCT: f32 = 0.2;

pub fn bench_calibration() -> Calibration {
    Calibration::from_registers(&CALIB_E1, &CALIB_8A)
        .expect("fixture dump has full length")
        .with_device_ranges(RES_HEAT_RANGE, RES_HEAT_VAL, RANGE_SW_ERR)
}
