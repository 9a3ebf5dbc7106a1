//! Spreadsheet layout for one primer set.
//!
//! The builders here never touch a workbook. They describe the cells,
//! styles, column widths and frozen rows of a sheet as a [`SheetPlan`];
//! `workbook` renders the plans and saves the file.
//!
//! Sheet sections (all coordinates 0-based):
//! - Title and highlight note on row 0
//! - Column headers on rows 1-2 and row headers on columns 0-1
//! - The pair matrix below/right of the headers (upper triangle)
//! - The legend to the right of the matrix
//! - The detail table below both, one row per pair

use super::pairs::{ResolvedPair, index_primers, resolve_pairs};
use crate::config::{LayoutConfig, MetricSpec, ReportConfig};
use crate::error::{ReportError, Result};
use crate::types::{NUM_POSSIBLE_PRODUCTS_700, NUM_SEQUENCIABLE_PRODUCTS, PrimerSet};
use log::debug;

/// Columns that get the configured default width.
const SIZED_COLUMNS: u16 = 12;
const NOTE_COLUMN: u16 = 6;

/// Content of one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

/// Visual style of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    #[default]
    Plain,
    /// Axis labels
    Bold,
    /// Red text: low-yield matrix cells and the note explaining them
    Highlight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub column: u16,
    pub value: CellValue,
    pub style: CellStyle,
}

/// Everything needed to render one sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetPlan {
    pub cells: Vec<Cell>,
    pub column_widths: Vec<(u16, f64)>,
    /// Rows above this index stay visible while scrolling
    pub freeze_row: Option<u32>,
}

impl SheetPlan {
    pub fn text(&mut self, row: u32, column: u16, text: impl Into<String>, style: CellStyle) {
        self.cells.push(Cell { row, column, value: CellValue::Text(text.into()), style });
    }

    pub fn number(&mut self, row: u32, column: u16, number: f64, style: CellStyle) {
        self.cells.push(Cell { row, column, value: CellValue::Number(number), style });
    }

    /// Set a column width, replacing an earlier width for the same column.
    pub fn set_width(&mut self, column: u16, width: f64) {
        self.column_widths.retain(|(c, _)| *c != column);
        self.column_widths.push((column, width));
    }

    /// The last value written to a cell, if any.
    pub fn cell(&self, row: u32, column: u16) -> Option<&Cell> {
        self.cells.iter().rev().find(|c| c.row == row && c.column == column)
    }
}

/// Resolved positions of the sheet sections for a given panel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub header_row: u32,
    pub matrix_row: u32,
    pub matrix_column: u16,
    pub legend_row: u32,
    pub legend_column: u16,
    pub detail_row: u32,
}

impl SheetLayout {
    /// Place the sections for `primers` primers and `metrics` legend entries.
    ///
    /// The configured legend column and detail row are minimums; they move
    /// right/down so that no section overlaps another.
    pub fn for_panel(primers: usize, metrics: usize, config: &LayoutConfig) -> Self {
        let header_row = 1;
        let matrix_row = header_row + 2;
        let matrix_column = 2;
        let legend_row = 1;

        let after_matrix_column = matrix_column + primers as u16 + 1;
        let legend_column = config.legend_column.max(after_matrix_column);

        let after_matrix_row = matrix_row + primers as u32 + 1;
        // title, header, entries, then one blank row
        let after_legend_row = legend_row + 2 + metrics as u32 + 1;
        let detail_row = config.detail_row.max(after_matrix_row).max(after_legend_row);

        Self { header_row, matrix_row, matrix_column, legend_row, legend_column, detail_row }
    }

    fn cell_of(&self, pair: &ResolvedPair<'_>) -> (u32, u16) {
        (self.matrix_row + pair.row as u32 - 1, self.matrix_column + pair.column as u16 - 1)
    }
}

/// Sequenceable products as a fraction of the possible products under 700bp.
pub fn sequenceable_ratio(sequenceable: f64, possible_700: f64, pair: &str) -> Result<f64> {
    if possible_700 == 0.0 {
        return Err(ReportError::DegenerateDenominator {
            pair: pair.to_string(),
            ratio: "sequenceable products ratio",
        });
    }
    Ok(sequenceable / possible_700)
}

/// Whether a matrix cell is flagged as low yield (strictly below the threshold).
pub fn is_low_yield(ratio: f64, threshold: f64) -> bool {
    ratio < threshold
}

/// Write the title, axis labels and pair matrix.
///
/// Returns the pairs flagged as low yield, by detail label.
pub fn write_matrix(
    plan: &mut SheetPlan,
    layout: &SheetLayout,
    set: &PrimerSet,
    pairs: &[ResolvedPair<'_>],
    low_yield_ratio: f64,
) -> Result<Vec<String>> {
    let first = pairs.first().ok_or(ReportError::EmptySet { set: set.index })?;
    let first_label = first.sequences();
    let (min, max) = first.stats.metric(NUM_SEQUENCIABLE_PRODUCTS, &first_label)?.range().ok_or_else(|| {
        ReportError::ShapeMismatch {
            pair: first_label.clone(),
            metric: NUM_SEQUENCIABLE_PRODUCTS.to_string(),
            expected: "a counted sub-record with min and max",
        }
    })?;

    plan.text(0, 0, format!("Number of sequenceable products between {}-{} bp", min, max), CellStyle::Plain);
    plan.text(
        0,
        NOTE_COLUMN,
        format!(
            "Cells in red: sequenceable products are less than {:.0}% of possible products (<700bp)",
            low_yield_ratio * 100.0
        ),
        CellStyle::Highlight,
    );

    for (index, primer) in index_primers(&set.primers) {
        let offset = index - 1;
        let column = layout.matrix_column + offset as u16;
        plan.text(layout.header_row, column, format!("Primer_{}", index), CellStyle::Bold);
        plan.text(layout.header_row + 1, column, primer, CellStyle::Plain);

        let row = layout.matrix_row + offset as u32;
        plan.text(row, 0, format!("Primer_{}", index), CellStyle::Bold);
        plan.text(row, 1, primer, CellStyle::Plain);
    }

    let mut low_yield = Vec::new();
    for pair in pairs {
        let label = pair.sequences();
        let sequenceable = pair.stats.metric(NUM_SEQUENCIABLE_PRODUCTS, &label)?.count();
        let possible = pair.stats.metric(NUM_POSSIBLE_PRODUCTS_700, &label)?.count();
        let ratio = sequenceable_ratio(sequenceable, possible, &label)?;

        let style = if is_low_yield(ratio, low_yield_ratio) {
            debug!("Set {} {}: sequenceable ratio {:.3} flagged", set.index, pair.label(), ratio);
            low_yield.push(pair.label());
            CellStyle::Highlight
        } else {
            CellStyle::Plain
        };

        let (row, column) = layout.cell_of(pair);
        plan.number(row, column, sequenceable, style);
    }

    Ok(low_yield)
}

/// Write the code/description lookup table.
pub fn write_legend(plan: &mut SheetPlan, layout: &SheetLayout, metrics: &[MetricSpec], config: &LayoutConfig) {
    let code_column = layout.legend_column;
    let label_column = code_column + 1;

    plan.text(layout.legend_row, code_column, "LEGEND", CellStyle::Bold);
    plan.text(layout.legend_row + 1, code_column, "Code", CellStyle::Bold);
    plan.text(layout.legend_row + 1, label_column, "Description", CellStyle::Bold);

    for (index, metric) in metrics.iter().enumerate() {
        let row = layout.legend_row + 2 + index as u32;
        plan.text(row, code_column, metric.code.as_str(), CellStyle::Plain);
        plan.text(row, label_column, metric.label.as_str(), CellStyle::Plain);
    }

    plan.set_width(code_column, config.column_width);
    plan.set_width(label_column, config.legend_label_width);
}

/// Write one row per pair, one column per metric, in resolution order.
pub fn write_detail_table(
    plan: &mut SheetPlan,
    layout: &SheetLayout,
    pairs: &[ResolvedPair<'_>],
    metrics: &[MetricSpec],
) -> Result<()> {
    for (index, metric) in metrics.iter().enumerate() {
        plan.text(layout.detail_row, 1 + index as u16, metric.code.as_str(), CellStyle::Bold);
    }

    for (offset, pair) in pairs.iter().enumerate() {
        let row = layout.detail_row + 1 + offset as u32;
        let sequences = pair.sequences();
        plan.text(row, 0, pair.label(), CellStyle::Plain);

        for (index, metric) in metrics.iter().enumerate() {
            let value = pair.stats.metric(&metric.key, &sequences)?.count();
            plan.number(row, 1 + index as u16, value, CellStyle::Plain);
        }
    }

    Ok(())
}

/// A fully described sheet plus what it flagged.
#[derive(Debug, Clone, PartialEq)]
pub struct SetSheet {
    pub plan: SheetPlan,
    pub layout: SheetLayout,
    /// Detail labels of the pairs in resolution order
    pub pair_labels: Vec<String>,
    pub low_yield_pairs: Vec<String>,
}

/// Describe the whole sheet of one primer set.
pub fn build_set_sheet(set: &PrimerSet, config: &ReportConfig) -> Result<SetSheet> {
    let pairs = resolve_pairs(set)?;
    let layout = SheetLayout::for_panel(set.primers.len(), config.metrics.len(), &config.layout);
    debug!("Set {}: {} pairs, layout {:?}", set.index, pairs.len(), layout);

    let mut plan = SheetPlan::default();
    for column in 0..SIZED_COLUMNS {
        plan.set_width(column, config.layout.column_width);
    }

    let low_yield_pairs = write_matrix(&mut plan, &layout, set, &pairs, config.low_yield_ratio)?;
    write_legend(&mut plan, &layout, &config.metrics, &config.layout);
    write_detail_table(&mut plan, &layout, &pairs, &config.metrics)?;
    plan.freeze_row = Some(layout.detail_row + 1);

    Ok(SetSheet { plan, layout, pair_labels: pairs.iter().map(|p| p.label()).collect(), low_yield_pairs })
}

#[cfg(test)]
#[path = "sheet_test.rs"]
mod sheet_test;
