// src/plot_functions/plot_absorption_coefficient.rs

use crate::chart_pipeline::{render_chart, ChartReport, RenderOptions};
use crate::chart_spec::{ChartKind, ChartSpec, FigureSpec, FontSpec, LegendSpec, YAxisSpec};
use crate::constants::{
    ABSORPTION_OUTPUT, ABSORPTION_WORKBOOK, DEFAULT_DPI, DEFAULT_FIRST_ROW, FONT_PT_ANNOTATION,
    FONT_PT_AXIS_DESC, FONT_PT_LEGEND, FONT_PT_TICK, FONT_PT_TITLE, LINE_PT_SERIES,
    MARKER_PT_SERIES,
};
use crate::error::RenderResult;
use crate::plot_functions::averaged_material_sheets;

/// Averaged sound absorption coefficient per material. The workbook keeps
/// reflection in the earlier columns; the coefficient sits in column D.
pub fn preset() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        workbook: ABSORPTION_WORKBOOK.into(),
        output: ABSORPTION_OUTPUT.into(),
        title: "Average Sound Absorption Coefficient of AM Materials".to_string(),
        x_label: "Frequency (Hz)".to_string(),
        y_label: "Sound Absorption Coefficient".to_string(),
        value_column: "D".to_string(),
        first_row: DEFAULT_FIRST_ROW,
        sheets: averaged_material_sheets(),
        y_axis: YAxisSpec {
            min: 0.0,
            max: 0.65,
            step: 0.05,
        },
        figure: FigureSpec {
            width_in: 12.0,
            height_in: 9.0,
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

pub fn plot_absorption_coefficient(
    spec: &ChartSpec,
    options: RenderOptions,
) -> RenderResult<ChartReport> {
    render_chart(spec, options)
}
