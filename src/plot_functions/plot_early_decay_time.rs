// src/plot_functions/plot_early_decay_time.rs

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::chart_pipeline::{render_chart, ChartReport, RenderOptions};
use crate::chart_spec::{
    default_thread_spec, ChartKind, ChartSpec, FigureSpec, FontSpec, LegendSpec, SheetStyle,
    ThreadSpec, YAxisSpec,
};
use crate::constants::{
    COLOR_TEXT, DEFAULT_DPI, DEFAULT_FIRST_ROW, EDT_OUTPUT, EDT_WORKBOOK, FONT_PT_ANNOTATION,
    FONT_PT_AXIS_DESC_LARGE, FONT_PT_LEGEND_LARGE, FONT_PT_TICK_LARGE, FONT_PT_TITLE_LARGE,
    LINE_PT_THREAD,
};
use crate::data_analysis::band_extremes::BandExtremes;
use crate::data_input::material_data::MaterialSeries;
use crate::error::RenderResult;
use crate::font_config::{font, ScaledSizes};
use crate::plot_framework::BandChart;

/// Simulated room EDT with each material as ceiling. Sheets carry the
/// material name only, without the averaging suffix.
pub fn preset() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Threads,
        workbook: EDT_WORKBOOK.into(),
        output: EDT_OUTPUT.into(),
        title: "Early Decay Time (EDT) with different AM Materials as Ceiling".to_string(),
        x_label: "Frequency (Hz)".to_string(),
        y_label: "EDT in s".to_string(),
        value_column: "B".to_string(),
        first_row: DEFAULT_FIRST_ROW,
        sheets: vec![
            SheetStyle::new("SPI-A", "b"),
            SheetStyle::new("SPI-B", "g"),
            SheetStyle::new("SCA-B1", "lime"),
            SheetStyle::new("SCA-B2", "crimson"),
            SheetStyle::new("E3DCP-Concrete", "k"),
            SheetStyle::new("E3DCP-Cast Pattern", "darkgray"),
            SheetStyle::new("E3DCP-Clay", "darkorange"),
            SheetStyle::new("Shotcrete-A", "aqua"),
            SheetStyle::new("Shotcrete-B", "violet"),
        ],
        y_axis: YAxisSpec {
            min: 0.275,
            max: 0.55,
            step: 0.025,
        },
        figure: FigureSpec {
            width_in: 12.0,
            height_in: 16.0,
            dpi: DEFAULT_DPI,
        },
        fonts: FontSpec {
            title_pt: FONT_PT_TITLE_LARGE,
            axis_desc_pt: FONT_PT_AXIS_DESC_LARGE,
            tick_pt: FONT_PT_TICK_LARGE,
            annotation_pt: FONT_PT_ANNOTATION,
        },
        line_width_pt: LINE_PT_THREAD,
        marker_size_pt: 0.0,
        legend: LegendSpec {
            title: "Materials".to_string(),
            columns: 3,
            font_pt: FONT_PT_LEGEND_LARGE,
        },
        threads: Some(default_thread_spec()),
    }
}

/// Generates the EDT thread chart with per-band min/max annotations.
pub fn plot_early_decay_time(spec: &ChartSpec, options: RenderOptions) -> RenderResult<ChartReport> {
    render_chart(spec, options)
}

/// One short horizontal bar per sheet and band, spanning
/// `hz / width_factor ..= hz * width_factor` on the log axis.
pub fn draw_material_threads(
    chart: &mut BandChart<'_, '_>,
    series: &[MaterialSeries],
    colors: &[RGBColor],
    sizes: &ScaledSizes,
    threads: &ThreadSpec,
) -> RenderResult<()> {
    for (s, color) in series.iter().zip(colors) {
        for (hz, value) in s.points() {
            chart.draw_series(LineSeries::new(
                vec![
                    (hz / threads.width_factor, value),
                    (hz * threads.width_factor, value),
                ],
                color.stroke_width(sizes.line_width),
            ))?;
        }
    }
    Ok(())
}

/// Labels each band's maximum just above it and its minimum just below it.
pub fn draw_extreme_annotations(
    chart: &mut BandChart<'_, '_>,
    extremes: &[BandExtremes],
    sizes: &ScaledSizes,
    threads: &ThreadSpec,
) -> RenderResult<()> {
    let precision = threads.annotation_precision;
    let above = font(sizes.annotation)
        .into_font()
        .color(COLOR_TEXT)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let below = font(sizes.annotation)
        .into_font()
        .color(COLOR_TEXT)
        .pos(Pos::new(HPos::Center, VPos::Top));

    for band in extremes {
        chart.draw_series(std::iter::once(Text::new(
            format!("{:.precision$}", band.max),
            (band.frequency_hz, band.max + threads.annotation_offset),
            above.clone(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{:.precision$}", band.min),
            (band.frequency_hz, band.min - threads.annotation_offset),
            below.clone(),
        )))?;
    }
    Ok(())
}
