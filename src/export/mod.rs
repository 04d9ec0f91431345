//! Export functionality for packing results
//!
//! This module provides functionality to export packing reports in tabular
//! formats. Currently supports CSV export of per-container breakdowns.

mod csv;

pub use csv::CsvExporter;
