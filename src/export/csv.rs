//! CSV export of packing reports
//!
//! Writes one row per container so results can be loaded into spreadsheets
//! or analysis notebooks.

use std::path::Path;

use crate::{Result, analysis::PackingReport, error::Error};

/// Exporter for packing-report CSV files
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    /// Write the report to `path`, one row per container.
    ///
    /// Columns: `container,item_count,load,capacity,remaining,fill_ratio,items`
    /// where `items` holds the weights joined with `;`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Csv`] if the file cannot be created or a row fails
    /// to write.
    pub fn export(report: &PackingReport, path: &Path) -> Result<usize> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record([
            "container",
            "item_count",
            "load",
            "capacity",
            "remaining",
            "fill_ratio",
            "items",
        ])?;

        for summary in &report.containers {
            let items = summary
                .items
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(";");
            writer.write_record([
                summary.index.to_string(),
                summary.items.len().to_string(),
                summary.load.to_string(),
                summary.capacity.to_string(),
                summary.remaining.to_string(),
                format!("{:.4}", summary.fill_ratio),
                items,
            ])?;
        }

        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush CSV writer for {path:?}"),
            source,
        })?;

        Ok(report.containers.len())
    }
}
