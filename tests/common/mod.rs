//! Shared test utilities and fixture generators

#![allow(dead_code)]

use rand::prelude::*;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Two WPBC-style records: id, outcome, time, 30 nucleus features, tumor size, lymph nodes
pub const SAMPLE_RECORDS: [&str; 2] = [
    "119513,N,31,18.02,27.6,117.5,1013,0.09489,0.1036,0.1086,0.07055,0.1865,0.06333,0.6249,1.89,3.972,71.55,0.004433,0.01421,0.03233,0.009854,0.01694,0.003495,21.63,37.08,139.7,1437,0.1766,0.4424,0.4504,0.1752,0.2926,0.09,5,5",
    "8423,N,61,17.99,10.38,122.8,1001,0.1184,0.2776,0.3001,0.1471,0.2419,0.07871,1.095,0.9053,8.589,153.4,0.006399,0.04904,0.05373,0.01587,0.03003,0.006193,25.35,17.33,184.6,2019,0.1622,0.6656,0.7119,0.2654,0.4601,0.1189,3,2",
];

/// Build one 35-field record with the given perimeter and area.
///
/// The remaining measurements are derived from the row number so every
/// column stays numeric and non-constant.
pub fn record_line(row: usize, mean_perimeter: f64, mean_area: f64, lymph_nodes: Option<u32>) -> String {
    let mut fields: Vec<String> = Vec::with_capacity(35);
    fields.push((100_000 + row).to_string());
    fields.push(if row % 3 == 0 { "R" } else { "N" }.to_string());
    fields.push((10 + row).to_string());

    for col in 3..33 {
        let value = match col {
            5 => mean_perimeter.to_string(),
            6 => mean_area.to_string(),
            _ => format!("{:.4}", 0.01 * (col as f64) + 0.001 * (row as f64)),
        };
        fields.push(value);
    }

    fields.push(format!("{:.1}", 1.0 + (row % 5) as f64));
    fields.push(match lymph_nodes {
        Some(n) => n.to_string(),
        None => "?".to_string(),
    });

    fields.join(",")
}

/// Records where `mean_area = 2 * mean_perimeter + 1`, perimeters out of order
pub fn linear_records(n: usize) -> Vec<String> {
    (0..n)
        .map(|row| {
            let perimeter = 60.0 + ((row * 7) % n) as f64 * 1.5;
            record_line(row, perimeter, 2.0 * perimeter + 1.0, Some((row % 4) as u32))
        })
        .collect()
}

/// Records following `area ≈ 0.08 · perimeter²` with seeded noise
pub fn noisy_quadratic_records(n: usize, seed: u64) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n)
        .map(|row| {
            let perimeter: f64 = rng.gen_range(50.0..180.0);
            let noise: f64 = rng.gen_range(-20.0..20.0);
            record_line(row, perimeter, 0.08 * perimeter * perimeter + noise, Some(1))
        })
        .collect()
}

/// Write raw lines to a temporary `wpbc.data` file
pub fn write_dataset(lines: &[String]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wpbc.data");

    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }

    (temp_dir, path)
}

/// Write the two sample records
pub fn write_sample_dataset() -> (TempDir, PathBuf) {
    let lines: Vec<String> = SAMPLE_RECORDS.iter().map(|s| s.to_string()).collect();
    write_dataset(&lines)
}

/// Assert two floats agree within `tol`
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} ± {}, got {}",
        expected,
        tol,
        actual
    );
}
