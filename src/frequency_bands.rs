// src/frequency_bands.rs
/// Centralized frequency band definitions
///
/// Every chart plots against the same six measurement bands. Band `i` is read
/// from sheet row `first_row + i`.
pub const BAND_COUNT: usize = 6;

/// Band centre frequencies in Hz, in sheet row order.
pub const FREQUENCY_BANDS_HZ: [f64; BAND_COUNT] = [62.5, 125.0, 250.0, 500.0, 1000.0, 1800.0];

/// Tick label for a band frequency.
///
/// Integral frequencies print without decimals (`"125 Hz"`), others keep
/// their natural digits (`"62.5 Hz"`).
pub fn format_frequency_label(hz: f64) -> String {
    if hz.fract() == 0.0 {
        format!("{hz:.0} Hz")
    } else {
        format!("{hz} Hz")
    }
}

/// 1-based sheet row holding `band`.
pub fn band_row(first_row: u32, band: usize) -> u32 {
    first_row + band as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_frequency_label() {
        assert_eq!(format_frequency_label(62.5), "62.5 Hz");
        assert_eq!(format_frequency_label(125.0), "125 Hz");
        assert_eq!(format_frequency_label(1000.0), "1000 Hz");
        assert_eq!(format_frequency_label(1800.0), "1800 Hz");
    }

    #[test]
    fn test_band_row() {
        assert_eq!(band_row(2, 0), 2);
        assert_eq!(band_row(2, BAND_COUNT - 1), 7);
    }

    #[test]
    fn test_bands_ascending() {
        assert!(FREQUENCY_BANDS_HZ.windows(2).all(|w| w[0] < w[1]));
    }
}
