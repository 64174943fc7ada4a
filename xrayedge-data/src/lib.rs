#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Reference tables needed for edge absorption, as stored in a postcard blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeDatabase {
    pub version: Vec<VersionRecord>,
    pub elements: Vec<ElementRecord>,
    pub xray_levels: Vec<XrayLevelRecord>,
    pub photoabsorption: Vec<PhotoabsorptionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionRecord {
    pub tag: String,
    pub date: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRecord {
    pub atomic_number: u16,
    pub symbol: String,
    pub name: String,
    pub molar_mass: f64,
    pub density: f64,
}

/// One absorption edge (core level) of one element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XrayLevelRecord {
    pub element: String,
    pub iupac_symbol: String,
    /// Binding energy in eV.
    pub absorption_edge: f64,
    pub fluorescence_yield: f64,
    pub jump_ratio: f64,
}

/// Elam photoabsorption table for one element.
///
/// All three vectors have the same length. Energies are `ln(eV)`,
/// cross-sections are `ln(cm²/g)`, and the spline column holds the
/// second derivatives used by the cubic spline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoabsorptionRecord {
    pub element: String,
    pub log_energy: Vec<f64>,
    pub log_photoabsorption: Vec<f64>,
    pub log_photoabsorption_spline: Vec<f64>,
}
