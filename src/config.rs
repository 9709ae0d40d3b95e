//! Static extraction settings.
//!
//! Which layer gets exported, and which of its attributes, is decided at
//! build time. Edit `DEFAULT_LAYER` to extract something else, e.g.
//!
//! ```text
//! pub const DEFAULT_LAYER: LayerConfig = LayerConfig {
//!     name: "WRECKS",
//!     attributes: &["OBJNAM", "CATWRK", "VALSOU"],
//! };
//! ```

/// File extension of S-57 base cells, matched case-insensitively.
pub const CHART_EXTENSION: &str = ".000";

/// Output file used when `-o/--output` is not given.
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Source CRS of S-57 coordinates (WGS 84).
pub const SOURCE_EPSG: u32 = 4326;

/// Target CRS of the exported coordinates (WGS 84 / Pseudo-Mercator).
pub const TARGET_EPSG: u32 = 3857;

/// A layer name plus the ordered attribute fields exported for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerConfig {
    pub name: &'static str,
    pub attributes: &'static [&'static str],
}

pub const DEFAULT_LAYER: LayerConfig = LayerConfig {
    name: "BOYSPP",
    attributes: &["BOYSHP"],
};
