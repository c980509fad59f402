// src/data_input/material_data.rs

use crate::frequency_bands::{BAND_COUNT, FREQUENCY_BANDS_HZ};

/// Measurements read from one sheet, one slot per frequency band.
/// `None` marks an empty cell; values never shift to another band.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MaterialSeries {
    pub sheet_name: String,
    pub values: [Option<f64>; BAND_COUNT],
}

impl MaterialSeries {
    pub fn new(sheet_name: impl Into<String>, values: [Option<f64>; BAND_COUNT]) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            values,
        }
    }

    /// `(frequency, value)` pairs for the bands that hold a value.
    pub fn points(&self) -> Vec<(f64, f64)> {
        FREQUENCY_BANDS_HZ
            .iter()
            .zip(self.values.iter())
            .filter_map(|(&hz, value)| value.map(|v| (hz, v)))
            .collect()
    }

    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }

    /// Smallest and largest present value.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.values.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_skip_empty_bands_without_shifting() {
        let series = MaterialSeries::new(
            "SPI-A",
            [Some(10.0), None, Some(30.0), None, None, Some(60.0)],
        );
        assert_eq!(
            series.points(),
            vec![(62.5, 10.0), (250.0, 30.0), (1800.0, 60.0)]
        );
        assert_eq!(series.present_count(), 3);
    }

    #[test]
    fn test_value_bounds() {
        let series = MaterialSeries::new("x", [None, Some(0.4), Some(0.3), None, Some(0.5), None]);
        assert_eq!(series.value_bounds(), Some((0.3, 0.5)));
        assert_eq!(MaterialSeries::default().value_bounds(), None);
        assert!(MaterialSeries::default().is_empty());
    }
}
