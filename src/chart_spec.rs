// src/chart_spec.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colors::parse_color;
use crate::error::{RenderError, RenderResult};

/// How each sheet's values are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Polyline through the bands with a circle marker at every point.
    Line,
    /// One short horizontal bar per band.
    Threads,
}

/// A sheet to read and the colour its series is drawn in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetStyle {
    pub name: String,
    pub color: String,
}

impl SheetStyle {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YAxisSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FigureSpec {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSpec {
    pub title_pt: f64,
    pub axis_desc_pt: f64,
    pub tick_pt: f64,
    pub annotation_pt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegendSpec {
    pub title: String,
    pub columns: usize,
    pub font_pt: f64,
}

/// Settings specific to [`ChartKind::Threads`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThreadSpec {
    /// Bars span `f / width_factor ..= f * width_factor`.
    pub width_factor: f64,
    /// Vertical distance between an extreme and its label, in data units.
    pub annotation_offset: f64,
    pub annotation_precision: usize,
    pub annotate_extremes: bool,
}

/// Everything needed to turn one workbook into one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub workbook: PathBuf,
    pub output: PathBuf,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Spreadsheet column letter holding the values, e.g. `"B"`.
    pub value_column: String,
    pub first_row: u32,
    pub sheets: Vec<SheetStyle>,
    pub y_axis: YAxisSpec,
    pub figure: FigureSpec,
    pub fonts: FontSpec,
    pub line_width_pt: f64,
    pub marker_size_pt: f64,
    pub legend: LegendSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<ThreadSpec>,
}

impl ChartSpec {
    /// 0-based column index of [`ChartSpec::value_column`].
    pub fn value_column_index(&self) -> RenderResult<u32> {
        column_index_from_letters(&self.value_column)
    }

    /// Thread settings, falling back to defaults for thread charts without any.
    pub fn thread_settings(&self) -> ThreadSpec {
        self.threads.clone().unwrap_or_else(default_thread_spec)
    }

    pub fn validate(&self) -> RenderResult<()> {
        let fail = |msg: String| Err(RenderError::Config(format!("{}: {msg}", self.title)));

        if self.sheets.is_empty() {
            return fail("no sheets to plot".into());
        }
        for sheet in &self.sheets {
            if sheet.name.trim().is_empty() {
                return fail("sheet name is empty".into());
            }
            parse_color(&sheet.color)?;
        }
        self.value_column_index()?;
        if self.first_row == 0 {
            return fail("first_row is 1-based and must be at least 1".into());
        }

        let y = &self.y_axis;
        if !(y.min.is_finite() && y.max.is_finite() && y.step.is_finite()) {
            return fail("y axis bounds must be finite".into());
        }
        if y.max <= y.min {
            return fail(format!("y axis max {} must exceed min {}", y.max, y.min));
        }
        if y.step <= 0.0 {
            return fail(format!("y axis step {} must be positive", y.step));
        }

        let f = &self.figure;
        if f.dpi == 0 || f.width_in <= 0.0 || f.height_in <= 0.0 {
            return fail("figure size and dpi must be positive".into());
        }
        if self.legend.columns == 0 {
            return fail("legend needs at least one column".into());
        }
        let sizes = [
            self.fonts.title_pt,
            self.fonts.axis_desc_pt,
            self.fonts.tick_pt,
            self.fonts.annotation_pt,
            self.legend.font_pt,
            self.line_width_pt,
        ];
        if sizes.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
            return fail("font sizes and line width must be positive".into());
        }
        if self.marker_size_pt < 0.0 {
            return fail("marker size must not be negative".into());
        }

        if let Some(threads) = &self.threads {
            if threads.width_factor <= 1.0 {
                return fail(format!(
                    "thread width factor {} must be greater than 1",
                    threads.width_factor
                ));
            }
        }
        Ok(())
    }

    /// Joins relative workbook and output paths onto the given directories.
    pub fn resolve_paths(&mut self, input_dir: Option<&Path>, output_dir: Option<&Path>) {
        if let Some(dir) = input_dir {
            if self.workbook.is_relative() {
                self.workbook = dir.join(&self.workbook);
            }
        }
        if let Some(dir) = output_dir {
            if self.output.is_relative() {
                self.output = dir.join(&self.output);
            }
        }
    }
}

/// Converts a spreadsheet column reference (`"A"`, `"d"`, `"AA"`) to a 0-based index.
pub fn column_index_from_letters(letters: &str) -> RenderResult<u32> {
    let letters = letters.trim();
    if letters.is_empty() || letters.len() > 3 || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RenderError::Config(format!(
            "invalid column reference '{letters}'"
        )));
    }
    let index = letters
        .chars()
        .fold(0u32, |acc, c| acc * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1));
    Ok(index - 1)
}

/// Converts a 0-based column index back to letters (`1` -> `"B"`).
pub fn column_letters(index: u32) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

pub fn default_thread_spec() -> ThreadSpec {
    ThreadSpec {
        width_factor: crate::constants::THREAD_WIDTH_FACTOR,
        annotation_offset: crate::constants::ANNOTATION_OFFSET,
        annotation_precision: crate::constants::ANNOTATION_PRECISION,
        annotate_extremes: true,
    }
}

/// Chart definitions loadable from a JSON file. Missing charts keep their preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission_loss: Option<ChartSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absorption: Option<ChartSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_decay_time: Option<ChartSpec>,
}

impl RenderConfig {
    /// The built-in chart definitions.
    pub fn presets() -> Self {
        Self {
            transmission_loss: Some(crate::plot_functions::plot_transmission_loss::preset()),
            absorption: Some(crate::plot_functions::plot_absorption_coefficient::preset()),
            early_decay_time: Some(crate::plot_functions::plot_early_decay_time::preset()),
        }
    }

    pub fn from_json_str(text: &str) -> RenderResult<Self> {
        let config: RenderConfig = serde_json::from_str(text)?;
        for spec in [
            &config.transmission_loss,
            &config.absorption,
            &config.early_decay_time,
        ]
        .into_iter()
        .flatten()
        {
            spec.validate()?;
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> RenderResult<Self> {
        let text = fs::read_to_string(path)?;
        log::info!("Loaded chart definitions from '{}'", path.display());
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot_functions::{plot_early_decay_time, plot_transmission_loss};

    #[test]
    fn test_column_letters_round_trip_edges() {
        assert_eq!(column_index_from_letters("A").unwrap(), 0);
        assert_eq!(column_index_from_letters("b").unwrap(), 1);
        assert_eq!(column_index_from_letters("D").unwrap(), 3);
        assert_eq!(column_index_from_letters("Z").unwrap(), 25);
        assert_eq!(column_index_from_letters("AA").unwrap(), 26);
        assert_eq!(column_letters(1), "B");
        assert_eq!(column_letters(26), "AA");
    }

    #[test]
    fn test_invalid_column_letters() {
        assert!(column_index_from_letters("").is_err());
        assert!(column_index_from_letters("B2").is_err());
        assert!(column_index_from_letters("ABCD").is_err());
    }

    #[test]
    fn test_presets_validate() {
        for spec in [
            RenderConfig::presets().transmission_loss.unwrap(),
            RenderConfig::presets().absorption.unwrap(),
            RenderConfig::presets().early_decay_time.unwrap(),
        ] {
            spec.validate().unwrap();
        }
    }

    #[test]
    fn test_validate_rejects_inverted_axis() {
        let mut spec = plot_transmission_loss::preset();
        spec.y_axis.max = spec.y_axis.min;
        assert!(matches!(spec.validate(), Err(RenderError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_color() {
        let mut spec = plot_transmission_loss::preset();
        spec.sheets[0].color = "not-a-colour".into();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_narrow_threads() {
        let mut spec = plot_early_decay_time::preset();
        if let Some(threads) = spec.threads.as_mut() {
            threads.width_factor = 1.0;
        }
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_config_json_round_trip_keeps_presets() {
        let presets = RenderConfig::presets();
        let json = presets.to_json_pretty().unwrap();
        let parsed = RenderConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, presets);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let err = RenderConfig::from_json_str(r#"{ "transmision_loss": null }"#).unwrap_err();
        assert!(matches!(err, RenderError::Json(_)));
    }

    #[test]
    fn test_empty_config_is_accepted() {
        let config = RenderConfig::from_json_str("{}").unwrap();
        assert!(config.transmission_loss.is_none());
    }

    #[test]
    fn test_resolve_paths_only_touches_relative() {
        let mut spec = plot_transmission_loss::preset();
        spec.output = PathBuf::from("/abs/out.png");
        spec.resolve_paths(Some(Path::new("data")), Some(Path::new("plots")));
        assert_eq!(spec.workbook, Path::new("data").join("Transmission Loss (db).xlsx"));
        assert_eq!(spec.output, PathBuf::from("/abs/out.png"));
    }
}
