//! Report generation module - pair resolution, layout and emission.
//!
//! This module handles:
//! - Enumerating and resolving the unordered pairs of a primer set
//! - Formatting the per-pair text report
//! - Describing and writing the spreadsheet matrix report
//! - Summarizing sets and exporting the summaries as JSON
//! - Writing the feature overlap table
//!
//! # Module Organization
//!
//! - `pairs` - Primer numbering and pair deduplication
//! - `text` - Per-pair text blocks and the full text report
//! - `sheet` - Matrix, legend and detail table as sheet descriptions
//! - `workbook` - Renders sheet descriptions and saves the workbook
//! - `stats` - Per-set summaries
//! - `export` - JSON summary export
//! - `gff` - Feature overlap table

mod export;
mod gff;
mod pairs;
mod sheet;
mod stats;
mod text;
mod workbook;

// Re-export report writers
pub use export::export_json_summary;
pub use gff::write_gff_report;
pub use text::write_detailed_report;
pub use workbook::write_stats_workbook;

// Re-export summaries
pub use stats::{SetSummary, summarize_sets};
