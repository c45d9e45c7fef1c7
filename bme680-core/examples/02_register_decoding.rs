//! Register Decoding Example
//!
//! Walks through what a driver does after its burst reads: decode the
//! calibration blocks once, then decode and compensate each data block.

use bme680_core::{
    compensate,
    constants::registers::{
        CALIB_BLOCK_1_START, CALIB_BLOCK_2_START, CHIP_ID, CHIP_ID_ADDR, DATA_BLOCK_START,
        RANGE_SW_ERR_ADDR, RES_HEAT_RANGE_ADDR, RES_HEAT_VAL_ADDR,
    },
    Calibration, CompensationResult, RawSample,
};

/// Canned register file standing in for the bus
fn read_registers(start: u8, buf: &mut [u8]) {
    let dump: &[u8] = match start {
        CHIP_ID_ADDR => &[CHIP_ID],
        CALIB_BLOCK_1_START => &[
            0x3F, 0x28, 0x30, 0x00, 0x2D, 0x14, 0x78, 0x9C, 0x6A, 0x66, 0x20, 0xD1, 0xE2, 0x12,
        ],
        CALIB_BLOCK_2_START => &[
            0x3B, 0x68, 0x03, 0x00, 0xFE, 0x8C, 0xCD, 0xD6, 0x58, 0x10, 0xB2, 0x1B, 0xC5, 0xFF,
            0x34, 0x1E, 0x00, 0x00, 0x8E, 0xFA, 0x2A, 0xF7, 0x1E,
        ],
        RES_HEAT_RANGE_ADDR => &[0x16],
        RES_HEAT_VAL_ADDR => &[0x2E],
        RANGE_SW_ERR_ADDR => &[0x10],
        DATA_BLOCK_START => &[0x56, 0xAD, 0x30, 0x79, 0x99, 0x90, 0x56, 0x27],
        _ => &[],
    };
    let n = dump.len().min(buf.len());
    buf[..n].copy_from_slice(&dump[..n]);
}

fn read_byte(addr: u8) -> u8 {
    let mut b = [0u8];
    read_registers(addr, &mut b);
    b[0]
}

fn main() -> CompensationResult<()> {
    println!("=== BME680 Register Decoding ===\n");

    let chip_id = read_byte(CHIP_ID_ADDR);
    println!("chip id 0x{chip_id:02X} (expected 0x{CHIP_ID:02X})");

    let mut cd1 = [0u8; 14];
    let mut cd2 = [0u8; 23];
    read_registers(CALIB_BLOCK_1_START, &mut cd1);
    read_registers(CALIB_BLOCK_2_START, &mut cd2);

    let calib = Calibration::from_registers(&cd1, &cd2)?.with_device_ranges(
        read_byte(RES_HEAT_RANGE_ADDR),
        read_byte(RES_HEAT_VAL_ADDR),
        read_byte(RANGE_SW_ERR_ADDR),
    );
    println!("calibration: {calib:#?}\n");

    let mut data = [0u8; 8];
    read_registers(DATA_BLOCK_START, &mut data);
    let raw = RawSample::from_data_registers(&data)?;
    println!("raw: {raw:?}");

    let reading = compensate(&raw, &calib);
    println!(
        "compensated: {:.2} °C, {:.0} Pa, {:.2} %RH",
        reading.temperature, reading.pressure, reading.humidity
    );

    // a truncated burst surfaces as an error rather than garbage
    if let Err(e) = RawSample::from_data_registers(&data[..5]) {
        println!("\ntruncated read: {e}");
    }

    Ok(())
}
