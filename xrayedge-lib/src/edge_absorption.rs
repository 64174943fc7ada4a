//! Photoelectric absorption of a single subshell.
//!
//! Total photoelectric absorption at an energy sums the contributions of
//! every subshell that can be ionized there. Each edge lying between the
//! edge of interest and the probe energy multiplies the total by its jump
//! ratio, so dividing those ratios back out leaves the absorption of the
//! chosen subshell alone (W. T. Elam's approximation).

use log::{debug, trace};

use crate::db::XrayDb;
use crate::edges::{EdgeCatalog, XrayEdge};
use crate::elam::CrossSectionTable;
use crate::error::Result;

/// Photoelectric absorption of the subshell behind `edge` at each energy.
///
/// `energies` are expected highest first, as produced by callers that walk
/// down through an edge. The result has the same length and order as
/// `energies`. Jump ratios are used as stored; a zero ratio yields infinity.
pub fn edge_absorption<T, C>(
    edge: &XrayEdge,
    table: &T,
    catalog: &C,
    energies: &[f64],
) -> Vec<f64>
where
    T: CrossSectionTable + ?Sized,
    C: EdgeCatalog + ?Sized,
{
    let mut result: Vec<f64> = energies.iter().map(|&e| table.photo(e)).collect();
    if energies.is_empty() {
        return result;
    }

    // Sorted input puts this at energies[0]; taking the max keeps unsorted input correct.
    let max_energy = energies.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let edges = catalog.edges_below(edge.atomic_number, max_energy);
    if edges.is_empty() {
        trace!(
            "no edges of Z={} below {max_energy} eV, returning total absorption",
            edge.atomic_number
        );
        return result;
    }

    let candidates: Vec<(f64, f64)> = edges
        .iter()
        .filter(|e| e.energy > edge.energy)
        .map(|e| (e.energy, e.jump_ratio))
        .collect();
    if candidates.is_empty() {
        trace!(
            "no edges of Z={} above {} ({} eV), returning total absorption",
            edge.atomic_number, edge.label, edge.energy
        );
        return result;
    }
    debug!(
        "Z={} {} edge: dividing out {} higher edges",
        edge.atomic_number,
        edge.label,
        candidates.len()
    );

    for (value, &energy) in result.iter_mut().zip(energies) {
        for &(edge_energy, jump) in &candidates {
            if edge_energy < energy {
                *value /= jump;
            }
        }
    }
    result
}

impl XrayDb {
    /// Photoelectric absorption in cm²/g of one subshell of an element,
    /// using the Elam photoabsorption table and this database's edges.
    ///
    /// `edge` is an IUPAC label such as `"L3"`. Energies are in eV,
    /// highest first.
    pub fn edge_absorption(&self, element: &str, edge: &str, energies: &[f64]) -> Result<Vec<f64>> {
        let target = self.xray_edge(element, edge)?;
        let table = self.photo_table(element)?;
        Ok(edge_absorption(&target, &table, self, energies))
    }
}
