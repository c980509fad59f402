// src/plot_framework.rs

use std::fs;
use std::ops::Range;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::chart_spec::{ChartKind, ChartSpec};
use crate::colors::parse_color;
use crate::constants::{
    COLOR_BACKGROUND, COLOR_LEGEND_FRAME, COLOR_TEXT, FIGURE_MARGIN_RATIO, LEGEND_GAP_ABOVE_PT,
    LEGEND_ROW_SPACING, LEGEND_SAMPLE_LENGTH_PT, MAX_TICK_DECIMALS, X_AXIS_PAD_FACTOR,
};
use crate::data_input::material_data::MaterialSeries;
use crate::error::{RenderError, RenderResult};
use crate::font_config::{font, pt_to_px, ScaledSizes};
use crate::frequency_bands::{format_frequency_label, FREQUENCY_BANDS_HZ};

/// Number of decimals needed to print multiples of `step` exactly.
pub fn step_decimals(step: f64) -> usize {
    (0..=MAX_TICK_DECIMALS)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(MAX_TICK_DECIMALS)
}

/// Formats a y tick with a fixed number of decimals (`"5"`, `"0.05"`, `"0.275"`).
pub fn format_tick(value: f64, decimals: usize) -> String {
    // avoid "-0.00"
    let value = if value.abs() < 0.5 * 10f64.powi(-(decimals as i32)) {
        0.0
    } else {
        value
    };
    format!("{value:.decimals$}")
}

/// Ticks at `min + k * step` that fall inside `min..=max`.
pub fn y_axis_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max < min {
        return Vec::new();
    }
    let decimals = step_decimals(step);
    let scale = 10f64.powi(decimals as i32);
    let count = ((max - min) / step + 1e-9).floor() as usize;
    (0..=count)
        .map(|k| ((min + k as f64 * step) * scale).round() / scale)
        .collect()
}

/// Legend slot `(column, row)` for each entry, filling columns top to bottom.
/// Earlier columns take the extra entries when the count does not divide evenly.
pub fn legend_grid(entries: usize, columns: usize) -> Vec<(usize, usize)> {
    if entries == 0 {
        return Vec::new();
    }
    let columns = columns.clamp(1, entries);
    let (base_rows, long_columns) = (entries / columns, entries % columns);
    let mut slots = Vec::with_capacity(entries);
    for col in 0..columns {
        let rows = base_rows + usize::from(col < long_columns);
        slots.extend((0..rows).map(|row| (col, row)));
    }
    slots
}

pub fn legend_rows(entries: usize, columns: usize) -> usize {
    entries.div_ceil(columns.max(1))
}

/// Log-axis range covering every band, with room for thread bars.
pub fn x_axis_range(spec: &ChartSpec) -> Range<f64> {
    let pad = match spec.kind {
        ChartKind::Line => X_AXIS_PAD_FACTOR,
        ChartKind::Threads => X_AXIS_PAD_FACTOR.max(spec.thread_settings().width_factor * 1.1),
    };
    let lowest = FREQUENCY_BANDS_HZ[0];
    let highest = FREQUENCY_BANDS_HZ[FREQUENCY_BANDS_HZ.len() - 1];
    (lowest / pad)..(highest * pad)
}

/// Log-scaled frequency axis with ticks exactly on the measurement bands.
pub struct BandLogAxis {
    inner: LogCoord<f64>,
}

impl BandLogAxis {
    pub fn new(range: Range<f64>) -> Self {
        Self {
            inner: range.log_scale().into(),
        }
    }
}

impl Ranged for BandLogAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        // bands only, no light mesh points
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        let range = self.inner.range();
        FREQUENCY_BANDS_HZ
            .iter()
            .copied()
            .filter(|hz| range.contains(hz))
            .collect()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }

    fn axis_pixel_range(&self, limit: (i32, i32)) -> Range<i32> {
        self.inner.axis_pixel_range(limit)
    }
}

/// Linear value axis with ticks at `min + k * step`.
pub struct SteppedAxis {
    inner: RangedCoordf64,
    ticks: Vec<f64>,
}

impl SteppedAxis {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            inner: (min..max).into(),
            ticks: y_axis_ticks(min, max, step),
        }
    }
}

impl Ranged for SteppedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

/// Chart context handed to the per-chart series drawing.
pub type BandChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<BandLogAxis, SteppedAxis>>;

/// Pixel geometry of a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureLayout {
    pub width: u32,
    pub height: u32,
    pub margin: i32,
    pub plot_height: i32,
    pub legend_height: i32,
    pub legend_row_height: i32,
}

impl FigureLayout {
    pub fn new(spec: &ChartSpec, sizes: &ScaledSizes) -> Self {
        let dpi = spec.figure.dpi as f64;
        let width = (spec.figure.width_in * dpi).round() as u32;
        let height = (spec.figure.height_in * dpi).round() as u32;
        let margin = (width.min(height) as f64 * FIGURE_MARGIN_RATIO).round() as i32;

        let legend_row_height = (sizes.legend * LEGEND_ROW_SPACING).round() as i32;
        let rows = legend_rows(spec.sheets.len(), spec.legend.columns) as i32;
        // title row + entry rows, padded top and bottom
        let legend_height = sizes.legend_padding * 2 + legend_row_height * (rows + 1);
        let gap = pt_to_px(LEGEND_GAP_ABOVE_PT, spec.figure.dpi).round() as i32;
        let plot_height = (height as i32 - 2 * margin - legend_height - gap).max(1);

        Self {
            width,
            height,
            margin,
            plot_height,
            legend_height,
            legend_row_height,
        }
    }
}

/// Resolves each sheet's colour in chart order.
pub fn series_colors(spec: &ChartSpec) -> RenderResult<Vec<RGBColor>> {
    spec.sheets.iter().map(|s| parse_color(&s.color)).collect()
}

/// Draws the frame, axes and legend of a comparison chart to `spec.output`;
/// `draw_data` plots `series` (one per sheet, in sheet order) with the resolved colours.
pub fn draw_comparison_chart<F>(
    spec: &ChartSpec,
    series: &[MaterialSeries],
    draw_data: F,
) -> RenderResult<()>
where
    F: FnOnce(&mut BandChart<'_, '_>, &[RGBColor], &ScaledSizes) -> RenderResult<()>,
{
    if series.len() != spec.sheets.len() {
        return Err(RenderError::Config(format!(
            "{} series supplied for {} sheets",
            series.len(),
            spec.sheets.len()
        )));
    }
    let colors = series_colors(spec)?;
    let sizes = ScaledSizes::for_spec(spec);
    let layout = FigureLayout::new(spec, &sizes);

    if let Some(parent) = spec.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let root_area =
        BitMapBackend::new(&spec.output, (layout.width, layout.height)).into_drawing_area();
    root_area.fill(COLOR_BACKGROUND)?;
    let inner_area = root_area.margin(layout.margin, layout.margin, layout.margin, layout.margin);
    let (plot_area, lower_area) = inner_area.split_vertically(layout.plot_height);
    let (_gap_area, legend_area) =
        lower_area.split_vertically(lower_area.dim_in_pixel().1 as i32 - layout.legend_height);

    let y_ticks = y_axis_ticks(spec.y_axis.min, spec.y_axis.max, spec.y_axis.step);
    let decimals = step_decimals(spec.y_axis.step);
    let widest_tick = y_ticks
        .iter()
        .map(|v| format_tick(*v, decimals).len())
        .max()
        .unwrap_or(1);
    let x_label_area = (sizes.tick * 2.0 + sizes.axis_desc * 2.0).round() as i32;
    let y_label_area =
        (sizes.tick * (0.65 * widest_tick as f64 + 1.0) + sizes.axis_desc * 2.0).round() as i32;

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(&spec.title, font(sizes.title).into_font())
        .margin(sizes.tick.round() as i32)
        .x_label_area_size(x_label_area)
        .y_label_area_size(y_label_area)
        .build_cartesian_2d(
            BandLogAxis::new(x_axis_range(spec)),
            SteppedAxis::new(spec.y_axis.min, spec.y_axis.max, spec.y_axis.step),
        )?;

    // Grid lines stay off; only ticks and labels are drawn.
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(FREQUENCY_BANDS_HZ.len())
        .y_labels(y_ticks.len())
        .x_label_formatter(&|hz| format_frequency_label(*hz))
        .y_label_formatter(&|v| format_tick(*v, decimals))
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .label_style(font(sizes.tick).into_font())
        .axis_desc_style(font(sizes.axis_desc).into_font())
        .axis_style(COLOR_TEXT.stroke_width(sizes.frame_width))
        .draw()?;

    draw_data(&mut chart, colors.as_slice(), &sizes)?;

    draw_legend(&legend_area, spec, &colors, &sizes, layout.legend_row_height)?;

    root_area.present()?;
    log::info!("Plot saved as '{}'", spec.output.display());
    Ok(())
}

/// Titled, framed legend centred in `area`, one sample per sheet.
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    colors: &[RGBColor],
    sizes: &ScaledSizes,
    row_height: i32,
) -> RenderResult<()> {
    let (area_width, _) = area.dim_in_pixel();
    let label_style = font(sizes.legend).into_font().color(COLOR_TEXT);
    let title_style = font(sizes.legend).into_font().color(COLOR_TEXT);
    let padding = sizes.legend_padding;
    let sample_length = pt_to_px(LEGEND_SAMPLE_LENGTH_PT, spec.figure.dpi).round() as i32;
    let text_gap = padding;

    let mut widest_label = 0i32;
    for sheet in &spec.sheets {
        let (w, _) = area.estimate_text_size(&sheet.name, &label_style)?;
        widest_label = widest_label.max(w as i32);
    }
    let (title_width, _) = area.estimate_text_size(&spec.legend.title, &title_style)?;

    let slots = legend_grid(spec.sheets.len(), spec.legend.columns);
    let used_columns = slots.iter().map(|(c, _)| c + 1).max().unwrap_or(1) as i32;
    let rows = legend_rows(spec.sheets.len(), spec.legend.columns) as i32;
    let column_width = sample_length + text_gap + widest_label + 2 * padding;
    let block_width = (used_columns * column_width)
        .max(title_width as i32 + 2 * padding)
        .min(area_width as i32);
    let block_height = padding * 2 + row_height * (rows + 1);
    let left = (area_width as i32 - block_width) / 2;
    let top = 0;

    area.draw(&Rectangle::new(
        [(left, top), (left + block_width, top + block_height)],
        COLOR_LEGEND_FRAME.stroke_width(sizes.frame_width),
    ))?;
    area.draw(&Text::new(
        spec.legend.title.as_str(),
        (left + block_width / 2, top + padding + row_height / 2),
        title_style.pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;

    let columns_left = left + (block_width - used_columns * column_width) / 2;
    for ((sheet, color), (col, row)) in spec.sheets.iter().zip(colors).zip(slots) {
        let x = columns_left + col as i32 * column_width + padding;
        let y = top + padding + row_height * (row as i32 + 1) + row_height / 2;

        area.draw(&PathElement::new(
            vec![(x, y), (x + sample_length, y)],
            color.stroke_width(sizes.line_width),
        ))?;
        if spec.kind == ChartKind::Line && sizes.marker_radius > 0 {
            area.draw(&Circle::new(
                (x + sample_length / 2, y),
                sizes.marker_radius,
                color.filled(),
            ))?;
        }
        area.draw(&Text::new(
            sheet.name.as_str(),
            (x + sample_length + text_gap, y),
            label_style.pos(Pos::new(HPos::Left, VPos::Center)),
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot_functions::{plot_early_decay_time, plot_transmission_loss};
    use plotters::coord::ranged1d::{BoldPoints, LightPoints};

    #[test]
    fn test_legend_grid_matches_column_major_fill() {
        let slots = legend_grid(9, 4);
        assert_eq!(
            slots,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (2, 0),
                (2, 1),
                (3, 0),
                (3, 1)
            ]
        );
        assert_eq!(legend_rows(9, 4), 3);
    }

    #[test]
    fn test_legend_grid_even_split() {
        let slots = legend_grid(9, 3);
        assert_eq!(slots[3], (1, 0));
        assert_eq!(slots[8], (2, 2));
        assert_eq!(legend_rows(9, 3), 3);
    }

    #[test]
    fn test_legend_grid_more_columns_than_entries() {
        assert_eq!(legend_grid(2, 4), vec![(0, 0), (1, 0)]);
        assert!(legend_grid(0, 4).is_empty());
    }

    #[test]
    fn test_figure_layout_matches_figsize_and_dpi() {
        let spec = plot_transmission_loss::preset();
        let sizes = ScaledSizes::for_spec(&spec);
        let layout = FigureLayout::new(&spec, &sizes);
        assert_eq!((layout.width, layout.height), (3600, 2400));
        assert!(layout.plot_height > layout.legend_height);
        assert!(layout.plot_height + layout.legend_height < layout.height as i32);
    }

    #[test]
    fn test_x_axis_range_covers_thread_bars() {
        let spec = plot_early_decay_time::preset();
        let range = x_axis_range(&spec);
        let width = spec.thread_settings().width_factor;
        assert!(range.start < FREQUENCY_BANDS_HZ[0] / width);
        assert!(range.end > FREQUENCY_BANDS_HZ[5] * width);
    }

    #[test]
    fn test_draw_rejects_mismatched_series() {
        let spec = plot_transmission_loss::preset();
        let err = draw_comparison_chart(&spec, &[], |_, _, _| Ok(())).unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
    }

    #[test]
    fn test_band_axis_ticks_sit_on_bands() {
        let axis = BandLogAxis::new(x_axis_range(&plot_transmission_loss::preset()));
        assert_eq!(axis.key_points(BoldPoints(6)), FREQUENCY_BANDS_HZ.to_vec());
        assert!(axis.key_points(LightPoints::new(6, 60)).is_empty());
    }

    #[test]
    fn test_band_axis_is_logarithmic() {
        let axis = BandLogAxis::new(x_axis_range(&plot_transmission_loss::preset()));
        let limit = (0, 3000);
        let octave_low = axis.map(&250.0, limit) - axis.map(&125.0, limit);
        let octave_high = axis.map(&1000.0, limit) - axis.map(&500.0, limit);
        assert!(octave_low > 0);
        assert!((octave_low - octave_high).abs() <= 1);
    }

    #[test]
    fn test_stepped_axis_ticks() {
        let spec = plot_early_decay_time::preset();
        let axis = SteppedAxis::new(spec.y_axis.min, spec.y_axis.max, spec.y_axis.step);
        let ticks = axis.key_points(BoldPoints(12));
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0], 0.275);
        assert_eq!(ticks[11], 0.55);
        assert_eq!(axis.range(), 0.275..0.55);
        assert!(axis.key_points(LightPoints::new(12, 120)).is_empty());
    }
}
