//! Semicolon-delimited CSV output.

use crate::config::LayerConfig;
use crate::models::record::FeatureRecord;
use anyhow::{Context, Result};
use csv::{Terminator, Writer, WriterBuilder};
use std::{fs::File, io::Write, path::Path};

pub const DELIMITER: u8 = b';';

/// Header row: `X`, `Y`, the configured attributes, then `SOURCE` if wanted.
pub fn header(config: &LayerConfig, show_source: bool) -> Vec<String> {
    let mut header = vec!["X".to_string(), "Y".to_string()];
    header.extend(config.attributes.iter().map(|a| a.to_string()));
    if show_source {
        header.push("SOURCE".to_string());
    }
    header
}

/// Cells of one data row, in header order.
pub fn row(record: &FeatureRecord, show_source: bool) -> Vec<String> {
    let (x, y) = record.formatted_coords();
    let mut row = vec![x, y];
    row.extend(record.attributes.iter().cloned());
    if show_source {
        row.push(record.source.clone().unwrap_or_default());
    }
    row
}

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(DELIMITER)
        .terminator(Terminator::CRLF)
        .flexible(false);
    builder
}

/// Writes header and records to any sink.
pub fn write_records<W: Write>(
    sink: W,
    config: &LayerConfig,
    records: &[FeatureRecord],
    show_source: bool,
) -> Result<()> {
    let mut writer: Writer<W> = builder().from_writer(sink);

    writer
        .write_record(header(config, show_source))
        .context("Failed to write CSV header")?;
    for record in records {
        writer
            .write_record(row(record, show_source))
            .context("Failed to write CSV row")?;
    }
    writer.flush().context("Failed to flush CSV output")?;

    Ok(())
}

/// Creates (or truncates) `path` and writes the CSV into it.
pub fn write_csv(
    path: &Path,
    config: &LayerConfig,
    records: &[FeatureRecord],
    show_source: bool,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Could not create output file {}", path.display()))?;
    write_records(file, config, records, show_source)
        .with_context(|| format!("Could not write {}", path.display()))
}
