// src/data_analysis/band_extremes.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt; // argmin/argmax on Array1

use crate::data_input::material_data::MaterialSeries;
use crate::frequency_bands::FREQUENCY_BANDS_HZ;

/// Lowest and highest value measured in one band across all sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct BandExtremes {
    pub frequency_hz: f64,
    pub min: f64,
    pub min_sheet: String,
    pub max: f64,
    pub max_sheet: String,
    /// Number of sheets with a value in this band.
    pub count: usize,
}

/// Per-band extremes over the present values. Bands nobody measured are left out.
/// Ties resolve to the sheet listed first.
pub fn band_extremes(series: &[MaterialSeries]) -> Vec<BandExtremes> {
    FREQUENCY_BANDS_HZ
        .iter()
        .enumerate()
        .filter_map(|(band, &frequency_hz)| {
            let (sheets, values): (Vec<&str>, Vec<f64>) = series
                .iter()
                .filter_map(|s| s.values[band].map(|v| (s.sheet_name.as_str(), v)))
                .unzip();
            if values.is_empty() {
                log::warn!("No values for the {frequency_hz} Hz band");
                return None;
            }

            let values = Array1::from(values);
            let min_idx = values.argmin().ok()?;
            let max_idx = values.argmax().ok()?;
            Some(BandExtremes {
                frequency_hz,
                min: values[min_idx],
                min_sheet: sheets[min_idx].to_string(),
                max: values[max_idx],
                max_sheet: sheets[max_idx].to_string(),
                count: values.len(),
            })
        })
        .collect()
}
