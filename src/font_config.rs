// src/font_config.rs

// Font and stroke sizes for chart rendering.
// Chart definitions carry sizes in points; the bitmap backend works in pixels,
// so everything is scaled by dpi / 72 once per render.

use crate::chart_spec::ChartSpec;
use crate::constants::{LEGEND_PADDING_PT, LINE_PT_FRAME, POINTS_PER_INCH};

/// Font family used for all text. Resolved from system fonts by plotters.
pub const FONT_FAMILY: &str = "sans-serif";

/// Converts a size in points to pixels at `dpi`.
pub fn pt_to_px(pt: f64, dpi: u32) -> f64 {
    pt * dpi as f64 / POINTS_PER_INCH
}

/// Pixel sizes derived from a chart definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSizes {
    pub title: f64,
    pub axis_desc: f64,
    pub tick: f64,
    pub legend: f64,
    pub annotation: f64,
    pub line_width: u32,
    pub marker_radius: i32,
    pub frame_width: u32,
    pub legend_padding: i32,
}

impl ScaledSizes {
    pub fn for_spec(spec: &ChartSpec) -> Self {
        let dpi = spec.figure.dpi;
        let px = |pt: f64| pt_to_px(pt, dpi);
        Self {
            title: px(spec.fonts.title_pt),
            axis_desc: px(spec.fonts.axis_desc_pt),
            tick: px(spec.fonts.tick_pt),
            legend: px(spec.legend.font_pt),
            annotation: px(spec.fonts.annotation_pt),
            line_width: px(spec.line_width_pt).round().max(1.0) as u32,
            // marker size is a diameter, like matplotlib's markersize
            marker_radius: (px(spec.marker_size_pt) / 2.0).round() as i32,
            frame_width: px(LINE_PT_FRAME).round().max(1.0) as u32,
            legend_padding: px(LEGEND_PADDING_PT).round() as i32,
        }
    }
}

/// Tuple form for plotters' `IntoFont` / `IntoTextStyle`.
pub fn font(size_px: f64) -> (&'static str, f64) {
    (FONT_FAMILY, size_px)
}
