//! Compensation throughput
//!
//! Run with `cargo bench -p bme680-core`.

use bme680_core::{compensate, compensate_temperature, Calibration, RawSample};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_calibration() -> Calibration {
    Calibration {
        h1: 776, h2: 1010, h3: 0, h4: 45, h5: 20, h6: 120, h7: -100,
        t1: 26218, t2: 26683, t3: 3,
        p1: 36094, p2: -10547, p3: 88, p4: 7090, p5: -59, p6: 30, p7: 52,
        p8: -1394, p9: -2262, p10: 30,
        ..Calibration::default()
    }
}

fn compensation(c: &mut Criterion) {
    let calib = bench_calibration();
    let raw = RawSample { temperature: 498_073, pressure: 355_027, humidity: 22_055 };

    c.bench_function("temperature", |b| {
        b.iter(|| compensate_temperature(black_box(raw.temperature), black_box(&calib)))
    });

    c.bench_function("full_cycle", |b| {
        b.iter(|| compensate(black_box(&raw), black_box(&calib)))
    });

    let data = [0x56, 0xAD, 0x30, 0x79, 0x99, 0x90, 0x56, 0x27];
    c.bench_function("decode_and_compensate", |b| {
        b.iter(|| {
            let raw = RawSample::from_data_registers(black_box(&data)).unwrap();
            compensate(&raw, &calib)
        })
    });
}

criterion_group!(benches, compensation);
criterion_main!(benches);
