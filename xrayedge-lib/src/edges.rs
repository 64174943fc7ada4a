use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use xrayedge_data::XrayLevelRecord;

use crate::constants::DEFAULT_GUESS_EDGES;
use crate::db::XrayDb;
use crate::error::{Result, XrayDbError};

/// X-ray absorption edge data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrayEdge {
    pub atomic_number: u16,
    /// IUPAC label (K, L1, L2, L3, M1, ...).
    pub label: String,
    /// Binding energy in eV.
    pub energy: f64,
    pub fluorescence_yield: f64,
    pub jump_ratio: f64,
}

impl XrayEdge {
    fn from_level(atomic_number: u16, level: &XrayLevelRecord) -> Self {
        XrayEdge {
            atomic_number,
            label: level.iupac_symbol.clone(),
            energy: level.absorption_edge,
            fluorescence_yield: level.fluorescence_yield,
            jump_ratio: level.jump_ratio,
        }
    }
}

/// Source of absorption edges for an element.
pub trait EdgeCatalog {
    /// All edges of element `atomic_number` with binding energy at or below
    /// `max_energy`, in no particular order.
    fn edges_below(&self, atomic_number: u16, max_energy: f64) -> Vec<XrayEdge>;
}

impl EdgeCatalog for [XrayEdge] {
    fn edges_below(&self, atomic_number: u16, max_energy: f64) -> Vec<XrayEdge> {
        self.iter()
            .filter(|e| e.atomic_number == atomic_number && e.energy <= max_energy)
            .cloned()
            .collect()
    }
}

impl EdgeCatalog for Vec<XrayEdge> {
    fn edges_below(&self, atomic_number: u16, max_energy: f64) -> Vec<XrayEdge> {
        self.as_slice().edges_below(atomic_number, max_energy)
    }
}

impl EdgeCatalog for XrayDb {
    fn edges_below(&self, atomic_number: u16, max_energy: f64) -> Vec<XrayEdge> {
        let Some(elem) = self.element_by_z(atomic_number) else {
            return Vec::new();
        };
        self.raw()
            .xray_levels
            .iter()
            .filter(|l| l.element == elem.symbol && l.absorption_edge <= max_energy)
            .map(|l| XrayEdge::from_level(atomic_number, l))
            .collect()
    }
}

impl XrayDb {
    /// Returns a map of all X-ray absorption edges for an element.
    ///
    /// Keys are IUPAC edge labels (K, L1, L2, L3, M1, ...).
    pub fn xray_edges(&self, element: &str) -> Result<BTreeMap<String, XrayEdge>> {
        let z = self.resolve_element(element)?;
        let sym = self.symbol(element)?;
        Ok(self
            .raw()
            .xray_levels
            .iter()
            .filter(|l| l.element == sym)
            .map(|l| (l.iupac_symbol.clone(), XrayEdge::from_level(z, l)))
            .collect())
    }

    /// Returns data for a specific X-ray edge.
    pub fn xray_edge(&self, element: &str, edge: &str) -> Result<XrayEdge> {
        let z = self.resolve_element(element)?;
        let sym = self.symbol(element)?;
        self.raw()
            .xray_levels
            .iter()
            .find(|l| l.element == sym && l.iupac_symbol == edge)
            .map(|l| XrayEdge::from_level(z, l))
            .ok_or_else(|| XrayDbError::UnknownEdge {
                element: element.to_string(),
                edge: edge.to_string(),
            })
    }

    /// Guess the element and edge from an X-ray energy.
    ///
    /// Returns the edge closest in energy among `edges`, or among
    /// K, L3, L2, L1 and M5 when `edges` is `None`.
    pub fn guess_edge(&self, energy: f64, edges: Option<&[&str]>) -> Option<XrayEdge> {
        let edge_filter = edges.unwrap_or(&DEFAULT_GUESS_EDGES);

        let mut best: Option<(&XrayLevelRecord, f64)> = None;
        for level in &self.raw().xray_levels {
            if level.absorption_edge <= 0.0 {
                continue;
            }
            if !edge_filter.contains(&level.iupac_symbol.as_str()) {
                continue;
            }
            let diff = (level.absorption_edge - energy).abs();
            if best.is_none_or(|(_, d)| diff < d) {
                best = Some((level, diff));
            }
        }

        let (level, _) = best?;
        let z = self.resolve_element(&level.element).ok()?;
        Some(XrayEdge::from_level(z, level))
    }
}
