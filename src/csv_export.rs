// src/csv_export.rs

use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::data_input::material_data::MaterialSeries;
use crate::error::RenderResult;
use crate::frequency_bands::FREQUENCY_BANDS_HZ;

pub const FREQUENCY_COLUMN_HEADER: &str = "Frequency (Hz)";

/// Path of the table exported next to a chart: same stem, `.csv` extension.
pub fn table_path_for(chart_output: &Path) -> PathBuf {
    chart_output.with_extension("csv")
}

/// Writes one row per band: the frequency, then one column per sheet.
/// Empty cells stay empty.
pub fn write_band_table<W: Write>(writer: W, series: &[MaterialSeries]) -> RenderResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    let mut header = Vec::with_capacity(series.len() + 1);
    header.push(FREQUENCY_COLUMN_HEADER.to_string());
    header.extend(series.iter().map(|s| s.sheet_name.clone()));
    wtr.write_record(&header)?;

    for (band, hz) in FREQUENCY_BANDS_HZ.iter().enumerate() {
        let mut record = Vec::with_capacity(series.len() + 1);
        record.push(hz.to_string());
        record.extend(
            series
                .iter()
                .map(|s| s.values[band].map(|v| v.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_band_table(path: &Path, series: &[MaterialSeries]) -> RenderResult<()> {
    let file = std::fs::File::create(path)?;
    write_band_table(file, series)?;
    log::info!("Band table saved as '{}'", path.display());
    Ok(())
}
