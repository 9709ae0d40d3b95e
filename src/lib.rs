//! Extracts one feature layer from S-57 ENC charts into a semicolon-delimited
//! CSV of Web Mercator (EPSG:3857) coordinates and attribute values.
//!
//! The pipeline is linear: [`walker`] finds `.000` cells, [`reader`] pulls the
//! configured layer out of each through GDAL, [`extractor`] reduces geometries
//! to points and reprojects them with [`projection`], and [`writer`] writes
//! the rows. [`pipeline::extract`] runs all of it.

pub mod config;
pub mod extractor;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod projection;
pub mod reader;
pub mod ui;
pub mod walker;
pub mod writer;
