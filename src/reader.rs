//! Reading the configured layer out of a chart file.

use crate::config::LayerConfig;
use crate::models::record::{LayerRead, RawFeature};
use anyhow::{Context, Result};
use gdal::{
    Dataset,
    errors::Result as GdalResult,
    vector::{Feature, FieldValue, Geometry, LayerAccess},
};
use std::path::Path;
use tracing::{info, warn};

/// A source of chart features.
///
/// `Err` means the file could not be opened at all. A file that opens but
/// has no such layer is `Ok(LayerRead::Missing)`.
pub trait ChartSource {
    fn read_layer(&self, path: &Path, layer: &LayerConfig) -> Result<LayerRead>;
}

/// Reads charts through GDAL/OGR, so any format with a registered vector
/// driver works; for `.000` cells that is the S-57 driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct GdalChartSource;

impl ChartSource for GdalChartSource {
    fn read_layer(&self, path: &Path, config: &LayerConfig) -> Result<LayerRead> {
        let dataset = Dataset::open(path)
            .with_context(|| format!("Could not open {}", path.display()))?;

        let mut layer = match dataset.layer_by_name(config.name) {
            Ok(layer) => layer,
            Err(_) => return Ok(LayerRead::Missing),
        };

        info!(
            "  Found {} {} feature(s)",
            layer.feature_count(),
            config.name
        );

        let features = layer
            .features()
            .map(|feature| raw_feature(&feature, config, path))
            .collect();

        // `layer` borrows `dataset`; both are released when this scope ends.
        Ok(LayerRead::Found(features))
    }
}

fn raw_feature(feature: &Feature, config: &LayerConfig, path: &Path) -> RawFeature {
    let geometry = feature.geometry().and_then(|geom| match planar(geom) {
        Ok(g) => Some(g),
        Err(e) => {
            warn!(
                "  Unsupported geometry in {} (feature {:?}): {}",
                path.display(),
                feature.fid(),
                e
            );
            None
        }
    });

    let attributes = config
        .attributes
        .iter()
        .map(|name| field_string(feature, name))
        .collect();

    RawFeature {
        geometry,
        attributes,
    }
}

/// 2D copy of `geom` as a `geo` geometry. Z and M coordinates are dropped
/// first, so 2.5D primitives such as soundings convert like their flat
/// counterparts.
fn planar(geom: &Geometry) -> GdalResult<geo::Geometry<f64>> {
    let mut flat = geom.clone();
    flat.flatten_to_2d();
    flat.to_geo()
}

/// Value of a named field, `None` when the layer has no such field or the
/// field is unset on this feature.
fn field_string(feature: &Feature, name: &str) -> Option<String> {
    let index = feature.field_index(name).ok()?;
    match feature.field(index) {
        Ok(Some(value)) => Some(format_field_value(value)),
        Ok(None) => None,
        Err(e) => {
            warn!("  Could not read field {}: {}", name, e);
            None
        }
    }
}

/// Renders an OGR field value as text.
///
/// Scalars print plainly, lists print bracketed with string items quoted,
/// dates use OGR's `YYYY/MM/DD` form. Reals print like Python's `str`.
#[allow(unreachable_patterns)]
pub fn format_field_value(value: FieldValue) -> String {
    match value {
        FieldValue::IntegerValue(v) => v.to_string(),
        FieldValue::Integer64Value(v) => v.to_string(),
        FieldValue::RealValue(v) => format_real(v),
        FieldValue::StringValue(v) => v,
        FieldValue::IntegerListValue(v) => format_list(v.iter().map(|i| i.to_string())),
        FieldValue::Integer64ListValue(v) => format_list(v.iter().map(|i| i.to_string())),
        FieldValue::RealListValue(v) => format_list(v.iter().map(|r| format_real(*r))),
        FieldValue::StringListValue(v) => format_list(v.iter().map(|s| format!("'{}'", s))),
        FieldValue::DateValue(d) => d.format("%Y/%m/%d").to_string(),
        FieldValue::DateTimeValue(dt) => dt.format("%Y/%m/%d %H:%M:%S").to_string(),
        other => format!("{:?}", other),
    }
}

/// Shortest round-trip form, always with a fractional part or exponent
/// (`3.0`, `12.5`). Exponents carry a sign and at least two digits (`1e+16`,
/// `1.5e-05`); the switch to exponent form happens below 1e-4 and from 1e16
/// on, the same bounds `{:?}` uses.
pub fn format_real(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    let debug = format!("{:?}", v);
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => debug,
    }
}

fn format_list(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(", "))
}
