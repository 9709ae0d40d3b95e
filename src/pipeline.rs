//! The end-to-end extraction run.

use crate::config::{CHART_EXTENSION, DEFAULT_LAYER, LayerConfig};
use crate::extractor::collect_records;
use crate::projection::{Reproject, WebMercator};
use crate::reader::{ChartSource, GdalChartSource};
use crate::walker::find_chart_files;
use crate::writer::write_csv;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Extracts the default layer from every chart below `parent_dir` into
/// `output_csv`, returning the number of rows written.
pub fn extract(parent_dir: &Path, output_csv: &Path, show_source: bool) -> Result<usize> {
    let projection = WebMercator::new()?;
    extract_with(
        &GdalChartSource,
        &projection,
        &DEFAULT_LAYER,
        parent_dir,
        output_csv,
        show_source,
    )
}

/// Same as [`extract`] with the reader, transform and layer supplied.
pub fn extract_with(
    reader: &dyn ChartSource,
    projection: &dyn Reproject,
    config: &LayerConfig,
    parent_dir: &Path,
    output_csv: &Path,
    show_source: bool,
) -> Result<usize> {
    let charts = find_chart_files(parent_dir, CHART_EXTENSION);
    debug!("{} candidate chart(s) under {}", charts.len(), parent_dir.display());

    let records = collect_records(&charts, reader, projection, config, show_source);
    write_csv(output_csv, config, &records, show_source)?;

    Ok(records.len())
}
