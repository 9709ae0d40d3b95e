use geo::Geometry;

/// A feature as handed over by a chart source, before reprojection.
///
/// Coordinates are EPSG:4326 in longitude/latitude order. `attributes` holds
/// one entry per configured field, in configuration order; `None` means the
/// field was unset or does not exist in the layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeature {
    pub geometry: Option<Geometry<f64>>,
    pub attributes: Vec<Option<String>>,
}

/// Outcome of looking up the configured layer in one chart.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerRead {
    Missing,
    Found(Vec<RawFeature>),
}

/// One output row: projected coordinates plus stringified attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub x: f64,
    pub y: f64,
    pub attributes: Vec<String>,
    pub source: Option<String>,
}

impl FeatureRecord {
    /// Coordinates rendered the way they appear in the CSV.
    pub fn formatted_coords(&self) -> (String, String) {
        (format!("{:.6}", self.x), format!("{:.6}", self.y))
    }
}
