use xrayedge_data::PhotoabsorptionRecord;

use crate::constants::{ELAM_MAX_ENERGY, ELAM_MIN_ENERGY};
use crate::db::XrayDb;
use crate::error::{Result, XrayDbError};
use crate::spline::{elam_spline, elam_spline_at};

/// Source of total photoelectric absorption.
pub trait CrossSectionTable {
    /// Total photoelectric absorption at `energy` (eV), summed over every
    /// subshell that can be ionized at that energy.
    fn photo(&self, energy: f64) -> f64;
}

impl<F> CrossSectionTable for F
where
    F: Fn(f64) -> f64,
{
    fn photo(&self, energy: f64) -> f64 {
        self(energy)
    }
}

/// Elam photoabsorption cross-section of a single element, in cm²/g.
#[derive(Debug, Clone)]
pub struct PhotoTable {
    log_energy: Vec<f64>,
    log_photo: Vec<f64>,
    log_photo_spline: Vec<f64>,
}

impl PhotoTable {
    pub fn from_record(row: &PhotoabsorptionRecord) -> Result<Self> {
        validate_photo_row(row)?;
        Ok(PhotoTable {
            log_energy: row.log_energy.clone(),
            log_photo: row.log_photoabsorption.clone(),
            log_photo_spline: row.log_photoabsorption_spline.clone(),
        })
    }

    /// Energy range covered by the table, in eV.
    pub fn energy_range(&self) -> (f64, f64) {
        let first = self.log_energy[0].exp();
        let last = self.log_energy[self.log_energy.len() - 1].exp();
        (first, last)
    }
}

impl CrossSectionTable for PhotoTable {
    /// Energies are clamped to [100 eV, 800 keV] before evaluation.
    fn photo(&self, energy: f64) -> f64 {
        let log_en = energy.clamp(ELAM_MIN_ENERGY, ELAM_MAX_ENERGY).ln();
        elam_spline_at(
            &self.log_energy,
            &self.log_photo,
            &self.log_photo_spline,
            log_en,
        )
        .exp()
    }
}

pub(crate) fn validate_photo_row(row: &PhotoabsorptionRecord) -> Result<()> {
    let n = row.log_energy.len();
    if n < 2 {
        return Err(XrayDbError::DataError(format!(
            "photoabsorption table for {} needs at least 2 points, got {n}",
            row.element
        )));
    }
    if row.log_photoabsorption.len() != n || row.log_photoabsorption_spline.len() != n {
        return Err(XrayDbError::DataError(format!(
            "photoabsorption table for {} has mismatched column lengths",
            row.element
        )));
    }
    if row.log_energy.windows(2).any(|w| w[1] <= w[0]) {
        return Err(XrayDbError::DataError(format!(
            "photoabsorption energies for {} are not strictly increasing",
            row.element
        )));
    }
    Ok(())
}

impl XrayDb {
    /// Elam photoabsorption table for an element.
    pub fn photo_table(&self, element: &str) -> Result<PhotoTable> {
        let sym = self.symbol(element)?;
        let row = self
            .photo_by_symbol(sym)
            .ok_or_else(|| XrayDbError::UnknownElement(element.to_string()))?;
        PhotoTable::from_record(row)
    }

    /// Returns the photoelectric mass attenuation coefficient in cm²/g using
    /// Elam tables.
    ///
    /// Energies are in eV. Values are clamped to [100 eV, 800 keV].
    pub fn mu_elam_photo(&self, element: &str, energies: &[f64]) -> Result<Vec<f64>> {
        let table = self.photo_table(element)?;
        let log_en: Vec<f64> = energies
            .iter()
            .map(|&e| e.clamp(ELAM_MIN_ENERGY, ELAM_MAX_ENERGY).ln())
            .collect();
        Ok(elam_spline(
            &table.log_energy,
            &table.log_photo,
            &table.log_photo_spline,
            &log_en,
        )
        .into_iter()
        .map(f64::exp)
        .collect())
    }
}
