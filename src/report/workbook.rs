//! Spreadsheet report writer.
//!
//! Owns the single workbook of a run. Every set's sheet is described first
//! (see `sheet`); only when all sets succeeded are the sheets rendered and
//! the file saved, exactly once.

use super::sheet::{CellStyle, CellValue, SetSheet, SheetPlan, build_set_sheet};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::types::PrimerSets;
use log::{debug, info};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};
use std::path::Path;

/// Title of the sheet holding a set, `None` for the workbook's default sheet.
pub fn sheet_name(position: usize, set_index: usize) -> Option<String> {
    if position == 0 { None } else { Some(format!("sheet {}", set_index + 1)) }
}

/// Describe the sheets of every set, in set order.
pub fn build_workbook_sheets(sets: &PrimerSets, config: &ReportConfig) -> Result<Vec<(usize, SetSheet)>> {
    sets.iter().map(|(index, set)| Ok((*index, build_set_sheet(set, config)?))).collect()
}

/// Render one sheet description onto a worksheet.
fn render_sheet(worksheet: &mut Worksheet, plan: &SheetPlan) -> Result<()> {
    let bold = Format::new().set_bold().set_font_color(Color::Black);
    let highlight = Format::new().set_font_color(Color::Red);

    for (column, width) in &plan.column_widths {
        worksheet.set_column_width(*column, *width)?;
    }

    for cell in &plan.cells {
        let format = match cell.style {
            CellStyle::Plain => None,
            CellStyle::Bold => Some(&bold),
            CellStyle::Highlight => Some(&highlight),
        };

        match (&cell.value, format) {
            (CellValue::Text(text), None) => worksheet.write_string(cell.row, cell.column, text)?,
            (CellValue::Text(text), Some(format)) => {
                worksheet.write_string_with_format(cell.row, cell.column, text, format)?
            }
            (CellValue::Number(number), None) => worksheet.write_number(cell.row, cell.column, *number)?,
            (CellValue::Number(number), Some(format)) => {
                worksheet.write_number_with_format(cell.row, cell.column, *number, format)?
            }
        };
    }

    if let Some(row) = plan.freeze_row {
        worksheet.set_freeze_panes(row, 0)?;
    }

    Ok(())
}

/// Write one sheet per primer set and save the workbook to `path`.
///
/// Returns the number of sheets written. Nothing is created on disk if any
/// set fails to build.
pub fn write_stats_workbook(path: &Path, sets: &PrimerSets, config: &ReportConfig) -> Result<usize> {
    let sheets = build_workbook_sheets(sets, config)?;

    let mut workbook = Workbook::new();
    for (position, (set_index, sheet)) in sheets.iter().enumerate() {
        let worksheet = workbook.add_worksheet();
        if let Some(name) = sheet_name(position, *set_index) {
            worksheet.set_name(name)?;
        }
        debug!("Rendering set {} ({} cells)", set_index, sheet.plan.cells.len());
        render_sheet(worksheet, &sheet.plan)?;
    }

    workbook.save(path)?;
    info!("Saved {} sheet(s) to {}", sheets.len(), path.display());

    Ok(sheets.len())
}
