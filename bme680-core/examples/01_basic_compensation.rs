//! Basic Compensation Example
//!
//! Compensates a handful of raw samples with a known calibration and prints
//! the readings as JSON lines.

use bme680_core::{compensate, Calibration, RawSample};

fn main() {
    println!("=== BME680 Compensation ===\n");

    let calib = Calibration {
        h1: 776, h2: 1010, h3: 0, h4: 45, h5: 20, h6: 120, h7: -100,
        t1: 26218, t2: 26683, t3: 3,
        p1: 36094, p2: -10547, p3: 88, p4: 7090, p5: -59, p6: 30, p7: 52,
        p8: -1394, p9: -2262, p10: 30,
        ..Calibration::default()
    };

    // (temperature, pressure, humidity) ADC counts
    let samples = [
        (498_073, 355_027, 22_055), // ~25 °C, ~1008 hPa, ~50 %RH
        (470_000, 360_000, 24_000),
        (520_000, 340_000, 19_000),
        (0, 355_027, 22_055),       // dead temperature channel
    ];

    for (t, p, h) in samples {
        let raw = match RawSample::new(t, p, h) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("skipping sample: {e}");
                continue;
            }
        };
        let reading = compensate(&raw, &calib);
        match serde_json::to_string(&reading) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("serialisation failed: {e}"),
        }
    }

    println!("\nZeroed calibration (misread NVM):");
    let raw = RawSample { temperature: 498_073, pressure: 355_027, humidity: 22_055 };
    let reading = compensate(&raw, &Calibration::default());
    println!("  {:?} guarded={}", reading, reading.is_pressure_guarded());
}
