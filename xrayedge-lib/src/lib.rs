pub mod constants;
pub mod db;
pub mod edge_absorption;
pub mod edges;
pub mod elam;
pub mod error;
pub mod spline;

pub use db::XrayDb;
pub use edge_absorption::edge_absorption;
pub use edges::{EdgeCatalog, XrayEdge};
pub use elam::{CrossSectionTable, PhotoTable};
pub use error::{Result, XrayDbError};
pub use xrayedge_data;
