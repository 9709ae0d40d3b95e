//! Turns raw chart features into output records.

use crate::config::LayerConfig;
use crate::models::record::{FeatureRecord, LayerRead, RawFeature};
use crate::projection::Reproject;
use crate::reader::ChartSource;
use anyhow::Result;
use geo::{Centroid, Geometry, Point};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Representative point of a geometry: the point itself, or the centroid of
/// anything else. `None` for empty geometries.
pub fn anchor_point(geometry: &Geometry<f64>) -> Option<Point<f64>> {
    match geometry {
        Geometry::Point(p) => Some(*p),
        other => other.centroid(),
    }
}

/// Builds the output record for one feature.
///
/// Returns `Ok(None)` when the feature has nothing to place on the map.
pub fn to_record(
    feature: RawFeature,
    projection: &dyn Reproject,
    source: Option<&str>,
) -> Result<Option<FeatureRecord>> {
    let Some(point) = feature.geometry.as_ref().and_then(anchor_point) else {
        return Ok(None);
    };

    let (x, y) = projection.reproject(point.x(), point.y())?;

    let attributes = feature
        .attributes
        .into_iter()
        .map(|value| value.unwrap_or_default())
        .collect();

    Ok(Some(FeatureRecord {
        x,
        y,
        attributes,
        source: source.map(String::from),
    }))
}

/// Reads the configured layer from every chart and converts its features.
///
/// Charts that fail to open or lack the layer are logged and skipped, as are
/// individual features that can't be placed or reprojected.
pub fn collect_records(
    charts: &[PathBuf],
    reader: &dyn ChartSource,
    projection: &dyn Reproject,
    config: &LayerConfig,
    show_source: bool,
) -> Vec<FeatureRecord> {
    let mut records = Vec::new();

    for path in charts {
        info!("Processing: {}", path.display());

        let features = match reader.read_layer(path, config) {
            Ok(LayerRead::Found(features)) => features,
            Ok(LayerRead::Missing) => {
                info!("  No {} layer found in {}", config.name, path.display());
                continue;
            }
            Err(e) => {
                warn!("  WARNING: {:#}", e);
                continue;
            }
        };

        let source = if show_source { file_name(path) } else { None };

        for feature in features {
            match to_record(feature, projection, source.as_deref()) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => debug!("  Skipping feature without geometry in {}", path.display()),
                Err(e) => warn!("  Skipping feature in {}: {:#}", path.display(), e),
            }
        }
    }

    records
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use geo::{LineString, Polygon, line_string, point, polygon};
    use std::collections::HashMap;

    /// Shifts coordinates so tests can tell projected from raw values.
    struct Offset;

    impl Reproject for Offset {
        fn reproject(&self, x: f64, y: f64) -> Result<(f64, f64)> {
            if x > 180.0 {
                bail!("longitude out of range");
            }
            Ok((x + 1000.0, y - 1000.0))
        }
    }

    struct FakeCharts(HashMap<PathBuf, Option<LayerRead>>);

    impl ChartSource for FakeCharts {
        fn read_layer(&self, path: &Path, _layer: &LayerConfig) -> Result<LayerRead> {
            match self.0.get(path) {
                Some(Some(read)) => Ok(read.clone()),
                _ => bail!("Could not open {}", path.display()),
            }
        }
    }

    const CONFIG: LayerConfig = LayerConfig {
        name: "WRECKS",
        attributes: &["OBJNAM", "CATWRK", "VALSOU"],
    };

    fn raw(geometry: Geometry<f64>, attributes: &[Option<&str>]) -> RawFeature {
        RawFeature {
            geometry: Some(geometry),
            attributes: attributes.iter().map(|a| a.map(String::from)).collect(),
        }
    }

    #[test]
    fn point_is_reprojected_as_is() {
        let record = to_record(raw(point!(x: 10.0, y: 20.0).into(), &[]), &Offset, None)
            .unwrap()
            .unwrap();
        assert_eq!((record.x, record.y), (1010.0, -980.0));
    }

    #[test]
    fn polygon_uses_centroid() {
        let square: Polygon<f64> = polygon![
            (x: 0.0, y: 0.0),
            (x: 4.0, y: 0.0),
            (x: 4.0, y: 2.0),
            (x: 0.0, y: 2.0),
        ];
        let record = to_record(raw(square.into(), &[]), &Offset, None)
            .unwrap()
            .unwrap();
        assert_eq!((record.x, record.y), (1002.0, -999.0));
    }

    #[test]
    fn line_uses_centroid() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)];
        let record = to_record(raw(line.into(), &[]), &Offset, None)
            .unwrap()
            .unwrap();
        assert_eq!((record.x, record.y), (1005.0, -1000.0));
    }

    #[test]
    fn unset_attributes_become_empty_in_place() {
        let record = to_record(
            raw(
                point!(x: 0.0, y: 0.0).into(),
                &[Some("SS Example"), None, Some("12.5")],
            ),
            &Offset,
            Some("US5MA11M.000"),
        )
        .unwrap()
        .unwrap();
        assert_eq!(record.attributes, vec!["SS Example", "", "12.5"]);
        assert_eq!(record.source.as_deref(), Some("US5MA11M.000"));
    }

    #[test]
    fn missing_geometry_is_skipped() {
        let no_geom = RawFeature {
            geometry: None,
            attributes: vec![Some("x".into())],
        };
        assert_eq!(to_record(no_geom, &Offset, None).unwrap(), None);
    }

    #[test]
    fn empty_geometry_is_skipped_not_placed_at_origin() {
        let empty_line: LineString<f64> = LineString::new(vec![]);
        assert_eq!(anchor_point(&empty_line.clone().into()), None);
        assert_eq!(
            to_record(raw(empty_line.into(), &[Some("a")]), &Offset, None).unwrap(),
            None
        );

        let empty_polygon = Polygon::new(LineString::new(vec![]), vec![]);
        assert_eq!(
            to_record(raw(empty_polygon.into(), &[]), &Offset, None).unwrap(),
            None
        );
    }

    #[test]
    fn collects_across_charts_and_skips_failures() {
        let a = PathBuf::from("root/A/A1.000");
        let b = PathBuf::from("root/B/B1.000");
        let broken = PathBuf::from("root/C/broken.000");
        let charts = FakeCharts(HashMap::from([
            (
                a.clone(),
                Some(LayerRead::Found(vec![
                    raw(point!(x: 1.0, y: 2.0).into(), &[Some("one"), Some("2"), None]),
                    raw(point!(x: 500.0, y: 2.0).into(), &[]),
                    RawFeature {
                        geometry: None,
                        attributes: vec![],
                    },
                ])),
            ),
            (b.clone(), Some(LayerRead::Missing)),
            (broken.clone(), None),
        ]));

        let records = collect_records(
            &[a, b, broken],
            &charts,
            &Offset,
            &CONFIG,
            true,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].attributes, vec!["one", "2", ""]);
        assert_eq!(records[0].source.as_deref(), Some("A1.000"));
    }

    #[test]
    fn source_omitted_unless_requested() {
        let a = PathBuf::from("A1.000");
        let charts = FakeCharts(HashMap::from([(
            a.clone(),
            Some(LayerRead::Found(vec![raw(
                point!(x: 1.0, y: 2.0).into(),
                &[None, None, None],
            )])),
        )]));

        let records = collect_records(&[a], &charts, &Offset, &CONFIG, false);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, None);
    }
}
