//! Coordinate reprojection from WGS 84 to Web Mercator.

use crate::config::{SOURCE_EPSG, TARGET_EPSG};
use anyhow::{Context, Result};
use gdal::spatial_ref::{AxisMappingStrategy, CoordTransform, SpatialRef};

/// Something that maps a longitude/latitude pair into the output CRS.
pub trait Reproject {
    fn reproject(&self, x: f64, y: f64) -> Result<(f64, f64)>;
}

/// EPSG:4326 -> EPSG:3857 transform backed by OSR.
///
/// Both spatial references use the traditional GIS axis order, so input is
/// (longitude, latitude) and output is (easting, northing).
pub struct WebMercator {
    transform: CoordTransform,
}

impl WebMercator {
    pub fn new() -> Result<Self> {
        let source = gis_ordered(SOURCE_EPSG)?;
        let target = gis_ordered(TARGET_EPSG)?;
        let transform = CoordTransform::new(&source, &target).with_context(|| {
            format!(
                "Failed to build transform EPSG:{} -> EPSG:{}",
                SOURCE_EPSG, TARGET_EPSG
            )
        })?;

        Ok(WebMercator { transform })
    }
}

fn gis_ordered(epsg: u32) -> Result<SpatialRef> {
    let mut srs = SpatialRef::from_epsg(epsg)
        .with_context(|| format!("Unknown spatial reference EPSG:{}", epsg))?;
    srs.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);
    Ok(srs)
}

impl Reproject for WebMercator {
    fn reproject(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let mut xs = [x];
        let mut ys = [y];
        let mut zs = [0.0];
        self.transform
            .transform_coords(&mut xs, &mut ys, &mut zs)
            .with_context(|| format!("Failed to reproject ({}, {})", x, y))?;
        Ok((xs[0], ys[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_stays_at_origin() {
        let wm = WebMercator::new().unwrap();
        let (x, y) = wm.reproject(0.0, 0.0).unwrap();
        assert!(x.abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn longitude_is_first_axis() {
        let wm = WebMercator::new().unwrap();
        let (x, y) = wm.reproject(1.0, 0.0).unwrap();
        assert_eq!(format!("{:.6}", x), "111319.490793");
        assert!(y.abs() < 1e-6);

        let (x, y) = wm.reproject(-70.0, 42.0).unwrap();
        assert!((x - -7_792_364.355_529).abs() < 1e-3);
        assert!((y - 5_160_979.444_049).abs() < 1e-3);
    }
}
