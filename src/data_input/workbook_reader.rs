// src/data_input/workbook_reader.rs

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};

use crate::chart_spec::{column_letters, ChartSpec};
use crate::data_input::material_data::MaterialSeries;
use crate::error::{RenderError, RenderResult};
use crate::frequency_bands::{band_row, BAND_COUNT};

/// An open measurement workbook.
///
/// Formula cells yield their cached results, so a workbook must have been
/// saved by a spreadsheet application for computed columns to carry values.
pub struct MeasurementWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl MeasurementWorkbook {
    /// Opens `.xlsx`, `.xlsm`, `.xls` or `.ods` files, picking the format by extension.
    pub fn open(path: &Path) -> RenderResult<Self> {
        let sheets = open_workbook_auto(path).map_err(|source| RenderError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Reads the band cells of `column` (0-based) starting at 1-based `first_row`.
    pub fn read_material_series(
        &mut self,
        sheet: &str,
        column: u32,
        first_row: u32,
    ) -> RenderResult<MaterialSeries> {
        if !self.sheet_names().iter().any(|name| name == sheet) {
            return Err(RenderError::MissingSheet {
                path: self.path.clone(),
                sheet: sheet.to_string(),
            });
        }
        let range = self
            .sheets
            .worksheet_range(sheet)
            .map_err(|source| RenderError::SheetRead {
                sheet: sheet.to_string(),
                source,
            })?;
        let values = extract_band_values(&range, sheet, column, first_row)?;
        Ok(MaterialSeries::new(sheet, values))
    }
}

/// Reads one value per band from `column`, rows `first_row..first_row + BAND_COUNT`.
pub fn extract_band_values(
    range: &Range<Data>,
    sheet: &str,
    column: u32,
    first_row: u32,
) -> RenderResult<[Option<f64>; BAND_COUNT]> {
    let mut values = [None; BAND_COUNT];
    for (band, slot) in values.iter_mut().enumerate() {
        let row = band_row(first_row, band);
        // calamine positions are 0-based, sheet rows are 1-based.
        let cell = range.get_value((row - 1, column));
        *slot = match cell {
            Some(cell) => cell_to_f64(cell, sheet, &cell_reference(row, column))?,
            None => None,
        };
    }
    Ok(values)
}

/// Converts a cell to a measurement. Empty cells yield `Ok(None)`.
pub fn cell_to_f64(cell: &Data, sheet: &str, cell_ref: &str) -> RenderResult<Option<f64>> {
    let non_numeric = |found: String| RenderError::NonNumericCell {
        sheet: sheet.to_string(),
        cell: cell_ref.to_string(),
        found,
    };
    match cell {
        Data::Empty => Ok(None),
        Data::Float(v) if v.is_finite() => Ok(Some(*v)),
        Data::Int(v) => Ok(Some(*v as f64)),
        Data::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(non_numeric(format!("text '{text}'"))),
            }
        }
        other => Err(non_numeric(format!("'{other}'"))),
    }
}

/// A1-style reference for a 1-based row and 0-based column.
pub fn cell_reference(row: u32, column: u32) -> String {
    format!("{}{}", column_letters(column), row)
}

/// Reads every sheet of `spec`, in the order the chart lists them.
pub fn load_measurements(spec: &ChartSpec) -> RenderResult<Vec<MaterialSeries>> {
    let column = spec.value_column_index()?;
    let mut workbook = MeasurementWorkbook::open(&spec.workbook)?;
    log::info!(
        "Reading {} sheets from '{}' (column {}, rows {}..={})",
        spec.sheets.len(),
        workbook.path().display(),
        spec.value_column,
        spec.first_row,
        band_row(spec.first_row, BAND_COUNT - 1),
    );

    let mut all_series = Vec::with_capacity(spec.sheets.len());
    for sheet in &spec.sheets {
        let series = workbook.read_material_series(&sheet.name, column, spec.first_row)?;
        log::debug!("  '{}': {:?}", series.sheet_name, series.values);
        if series.is_empty() {
            log::warn!("Sheet '{}' has no values in the band rows", series.sheet_name);
        }
        all_series.push(series);
    }
    Ok(all_series)
}
