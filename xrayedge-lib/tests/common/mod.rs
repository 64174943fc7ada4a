#![allow(dead_code)]

use xrayedge::XrayDb;
use xrayedge::xrayedge_data::{
    EdgeDatabase, ElementRecord, PhotoabsorptionRecord, VersionRecord, XrayLevelRecord,
};

/// Power-law prefactors so that mu(10 keV) is near the tabulated values.
pub const FE_PHOTO_SCALE: f64 = 1.7e12;
pub const CU_PHOTO_SCALE: f64 = 2.1e12;
pub const PHOTO_EXPONENT: f64 = -2.5;

/// Fixture photoabsorption: `scale * E^-2.5`, exact in log-log space.
pub fn power_law(scale: f64, energy: f64) -> f64 {
    scale * energy.powf(PHOTO_EXPONENT)
}

const FE_LEVELS: [(&str, f64, f64, f64); 7] = [
    ("K", 7112.0, 0.347, 7.7),
    ("L1", 844.6, 0.001, 1.15),
    ("L2", 719.9, 0.0036, 1.42),
    ("L3", 706.8, 0.0063, 3.0),
    ("M1", 91.3, 0.0, 1.06),
    ("M2", 52.7, 0.0, 1.02),
    ("M3", 52.7, 0.0, 1.03),
];

const CU_LEVELS: [(&str, f64, f64, f64); 4] = [
    ("K", 8979.0, 0.44, 7.6),
    ("L1", 1096.7, 0.001, 1.14),
    ("L2", 952.3, 0.0065, 1.41),
    ("L3", 932.7, 0.0095, 3.05),
];

fn levels(symbol: &str, table: &[(&str, f64, f64, f64)]) -> Vec<XrayLevelRecord> {
    table
        .iter()
        .map(|&(label, energy, fy, jump)| XrayLevelRecord {
            element: symbol.to_string(),
            iupac_symbol: label.to_string(),
            absorption_edge: energy,
            fluorescence_yield: fy,
            jump_ratio: jump,
        })
        .collect()
}

fn photo_row(symbol: &str, scale: f64) -> PhotoabsorptionRecord {
    let energies = [
        100.0, 300.0, 1000.0, 3000.0, 10_000.0, 30_000.0, 100_000.0, 300_000.0, 800_000.0,
    ];
    let log_energy: Vec<f64> = energies.iter().map(|e: &f64| e.ln()).collect();
    let log_photoabsorption = log_energy
        .iter()
        .map(|le| scale.ln() + PHOTO_EXPONENT * le)
        .collect();
    PhotoabsorptionRecord {
        element: symbol.to_string(),
        log_energy,
        log_photoabsorption,
        log_photoabsorption_spline: vec![0.0; energies.len()],
    }
}

fn element(z: u16, symbol: &str, name: &str, molar_mass: f64, density: f64) -> ElementRecord {
    ElementRecord {
        atomic_number: z,
        symbol: symbol.to_string(),
        name: name.to_string(),
        molar_mass,
        density,
    }
}

/// Iron and copper edges plus photoabsorption; helium has no edges or table.
pub fn fixture_database() -> EdgeDatabase {
    let mut xray_levels = levels("Fe", &FE_LEVELS);
    xray_levels.extend(levels("Cu", &CU_LEVELS));
    EdgeDatabase {
        version: vec![VersionRecord {
            tag: "fixture".to_string(),
            date: "2026-01-01".to_string(),
            notes: "test data".to_string(),
        }],
        elements: vec![
            element(2, "He", "Helium", 4.0026, 0.000166),
            element(26, "Fe", "Iron", 55.845, 7.86),
            element(29, "Cu", "Copper", 63.546, 8.96),
        ],
        xray_levels,
        photoabsorption: vec![photo_row("Fe", FE_PHOTO_SCALE), photo_row("Cu", CU_PHOTO_SCALE)],
    }
}

pub fn fixture_db() -> XrayDb {
    let _ = env_logger::builder().is_test(true).try_init();
    XrayDb::from_database(fixture_database()).unwrap()
}
