/// Lower bound of the Elam photoabsorption tables (eV).
pub const ELAM_MIN_ENERGY: f64 = 100.0;

/// Upper bound of the Elam photoabsorption tables (eV).
pub const ELAM_MAX_ENERGY: f64 = 800_000.0;

/// Edge labels tried by [`XrayDb::guess_edge`](crate::XrayDb::guess_edge) when none are given.
pub const DEFAULT_GUESS_EDGES: [&str; 5] = ["K", "L3", "L2", "L1", "M5"];
