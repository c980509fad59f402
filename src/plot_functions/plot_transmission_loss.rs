// src/plot_functions/plot_transmission_loss.rs

use plotters::prelude::*;

use crate::chart_pipeline::{render_chart, ChartReport, RenderOptions};
use crate::chart_spec::{ChartKind, ChartSpec, FigureSpec, FontSpec, LegendSpec, YAxisSpec};
use crate::constants::{
    DEFAULT_DPI, DEFAULT_FIRST_ROW, FONT_PT_ANNOTATION, FONT_PT_AXIS_DESC, FONT_PT_LEGEND,
    FONT_PT_TICK, FONT_PT_TITLE, LINE_PT_SERIES, MARKER_PT_SERIES, TRANSMISSION_LOSS_OUTPUT,
    TRANSMISSION_LOSS_WORKBOOK,
};
use crate::data_input::material_data::MaterialSeries;
use crate::error::RenderResult;
use crate::font_config::ScaledSizes;
use crate::plot_framework::BandChart;
use crate::plot_functions::averaged_material_sheets;

/// Averaged sound transmission loss per material, dB against frequency.
pub fn preset() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        workbook: TRANSMISSION_LOSS_WORKBOOK.into(),
        output: TRANSMISSION_LOSS_OUTPUT.into(),
        title: "Average Sound Transmission Loss of AM Materials".to_string(),
        x_label: "Frequency (Hz)".to_string(),
        y_label: "Transmission Loss (dB)".to_string(),
        value_column: "B".to_string(),
        first_row: DEFAULT_FIRST_ROW,
        sheets: averaged_material_sheets(),
        y_axis: YAxisSpec {
            min: 5.0,
            max: 55.0,
            step: 5.0,
        },
        figure: FigureSpec {
            width_in: 12.0,
            height_in: 8.0,
            dpi: DEFAULT_DPI,
        },
        fonts: FontSpec {
            title_pt: FONT_PT_TITLE,
            axis_desc_pt: FONT_PT_AXIS_DESC,
            tick_pt: FONT_PT_TICK,
            annotation_pt: FONT_PT_ANNOTATION,
        },
        line_width_pt: LINE_PT_SERIES,
        marker_size_pt: MARKER_PT_SERIES,
        legend: LegendSpec {
            title: "Materials".to_string(),
            columns: 4,
            font_pt: FONT_PT_LEGEND,
        },
        threads: None,
    }
}

/// Generates the transmission loss comparison chart.
pub fn plot_transmission_loss(
    spec: &ChartSpec,
    options: RenderOptions,
) -> RenderResult<ChartReport> {
    render_chart(spec, options)
}

/// One polyline per sheet through its present bands, with a filled circle on
/// each point. Shared by every line chart.
pub fn draw_material_lines(
    chart: &mut BandChart<'_, '_>,
    series: &[MaterialSeries],
    colors: &[RGBColor],
    sizes: &ScaledSizes,
) -> RenderResult<()> {
    for (s, color) in series.iter().zip(colors) {
        let points = s.points();
        if points.is_empty() {
            continue;
        }
        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            color.stroke_width(sizes.line_width),
        ))?;
        if sizes.marker_radius > 0 {
            chart.draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, sizes.marker_radius, color.filled())),
            )?;
        }
    }
    Ok(())
}
