use std::collections::HashMap;

use log::debug;
use xrayedge_data::{EdgeDatabase, ElementRecord, PhotoabsorptionRecord};

use crate::elam::validate_photo_row;
use crate::error::{Result, XrayDbError};

/// The main interface to the X-ray edge database.
///
/// Immutable once built, so a single instance can be shared between threads.
#[derive(Debug)]
pub struct XrayDb {
    data: EdgeDatabase,
    symbol_to_z: HashMap<String, u16>,
    name_to_z: HashMap<String, u16>,
}

impl XrayDb {
    /// Build a database from already decoded tables.
    ///
    /// Photoabsorption rows are checked here so that spline evaluation
    /// never has to.
    pub fn from_database(data: EdgeDatabase) -> Result<Self> {
        for row in &data.photoabsorption {
            validate_photo_row(row)?;
        }

        let mut symbol_to_z = HashMap::new();
        let mut name_to_z = HashMap::new();
        for elem in &data.elements {
            symbol_to_z.insert(elem.symbol.clone(), elem.atomic_number);
            symbol_to_z.insert(elem.symbol.to_lowercase(), elem.atomic_number);
            name_to_z.insert(elem.name.to_lowercase(), elem.atomic_number);
        }

        debug!(
            "loaded edge database: {} elements, {} levels, {} photoabsorption rows",
            data.elements.len(),
            data.xray_levels.len(),
            data.photoabsorption.len()
        );

        Ok(XrayDb {
            data,
            symbol_to_z,
            name_to_z,
        })
    }

    /// Decode a postcard-encoded [`EdgeDatabase`].
    pub fn from_postcard(bytes: &[u8]) -> Result<Self> {
        let data: EdgeDatabase = postcard::from_bytes(bytes)?;
        Self::from_database(data)
    }

    /// Decode a zstd-compressed, postcard-encoded [`EdgeDatabase`].
    #[cfg(feature = "compressed")]
    pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
        let mut decoder = ruzstd::decoding::StreamingDecoder::new(bytes)
            .map_err(|e| XrayDbError::DataError(format!("invalid zstd frame: {e:?}")))?;
        let mut decompressed = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut decompressed)
            .map_err(|e| XrayDbError::DataError(format!("failed to decompress data: {e}")))?;
        Self::from_postcard(&decompressed)
    }

    /// Access the raw tables.
    pub fn raw(&self) -> &EdgeDatabase {
        &self.data
    }

    /// Resolve an element identifier (symbol, name, or atomic number) to Z.
    pub fn resolve_element(&self, element: &str) -> Result<u16> {
        if let Ok(z) = element.parse::<u16>() {
            if self.data.elements.iter().any(|e| e.atomic_number == z) {
                return Ok(z);
            }
        }
        if let Some(&z) = self.symbol_to_z.get(element) {
            return Ok(z);
        }
        if let Some(&z) = self.name_to_z.get(&element.to_lowercase()) {
            return Ok(z);
        }
        Err(XrayDbError::UnknownElement(element.to_string()))
    }

    pub(crate) fn element_by_z(&self, z: u16) -> Option<&ElementRecord> {
        self.data.elements.iter().find(|e| e.atomic_number == z)
    }

    fn element_record(&self, element: &str) -> Result<&ElementRecord> {
        let z = self.resolve_element(element)?;
        self.element_by_z(z)
            .ok_or_else(|| XrayDbError::UnknownElement(element.to_string()))
    }

    pub(crate) fn photo_by_symbol(&self, sym: &str) -> Option<&PhotoabsorptionRecord> {
        self.data.photoabsorption.iter().find(|r| r.element == sym)
    }

    pub fn atomic_number(&self, element: &str) -> Result<u16> {
        self.resolve_element(element)
    }

    pub fn symbol(&self, element: &str) -> Result<&str> {
        Ok(&self.element_record(element)?.symbol)
    }

    pub fn atomic_name(&self, element: &str) -> Result<&str> {
        Ok(&self.element_record(element)?.name)
    }

    /// Molar mass in g/mol.
    pub fn molar_mass(&self, element: &str) -> Result<f64> {
        Ok(self.element_record(element)?.molar_mass)
    }

    /// Density in g/cm³.
    pub fn density(&self, element: &str) -> Result<f64> {
        Ok(self.element_record(element)?.density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrayedge_data::XrayLevelRecord;

    fn iron_only() -> EdgeDatabase {
        EdgeDatabase {
            elements: vec![ElementRecord {
                atomic_number: 26,
                symbol: "Fe".to_string(),
                name: "Iron".to_string(),
                molar_mass: 55.845,
                density: 7.86,
            }],
            xray_levels: vec![XrayLevelRecord {
                element: "Fe".to_string(),
                iupac_symbol: "K".to_string(),
                absorption_edge: 7112.0,
                fluorescence_yield: 0.35,
                jump_ratio: 7.7,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_indices() {
        let db = XrayDb::from_database(iron_only()).unwrap();
        assert_eq!(db.resolve_element("Fe").unwrap(), 26);
        assert_eq!(db.resolve_element("fe").unwrap(), 26);
        assert_eq!(db.resolve_element("IRON").unwrap(), 26);
        assert_eq!(db.resolve_element("26").unwrap(), 26);
        assert!(db.resolve_element("27").is_err());
    }

    #[test]
    fn test_rejects_short_photo_table() {
        let mut data = iron_only();
        data.photoabsorption.push(PhotoabsorptionRecord {
            element: "Fe".to_string(),
            log_energy: vec![5.0],
            log_photoabsorption: vec![1.0],
            log_photoabsorption_spline: vec![0.0],
        });
        assert!(matches!(
            XrayDb::from_database(data),
            Err(XrayDbError::DataError(_))
        ));
    }

    #[test]
    fn test_rejects_unsorted_photo_table() {
        let mut data = iron_only();
        data.photoabsorption.push(PhotoabsorptionRecord {
            element: "Fe".to_string(),
            log_energy: vec![5.0, 7.0, 6.0],
            log_photoabsorption: vec![1.0, 2.0, 3.0],
            log_photoabsorption_spline: vec![0.0; 3],
        });
        assert!(XrayDb::from_database(data).is_err());
    }

    #[test]
    fn test_rejects_garbage_postcard() {
        assert!(matches!(
            XrayDb::from_postcard(&[0xff, 0xff, 0xff]),
            Err(XrayDbError::DataError(_))
        ));
    }
}
