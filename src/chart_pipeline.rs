// src/chart_pipeline.rs

use std::path::PathBuf;

use crate::chart_spec::{ChartKind, ChartSpec};
use crate::csv_export::{export_band_table, table_path_for};
use crate::data_analysis::band_extremes::{band_extremes, BandExtremes};
use crate::data_input::material_data::MaterialSeries;
use crate::data_input::workbook_reader::load_measurements;
use crate::error::RenderResult;
use crate::frequency_bands::format_frequency_label;
use crate::plot_framework::draw_comparison_chart;
use crate::plot_functions::plot_early_decay_time::{
    draw_extreme_annotations, draw_material_threads,
};
use crate::plot_functions::plot_transmission_loss::draw_material_lines;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Also write the extracted band table next to the image.
    pub export_csv: bool,
}

/// What a render produced.
#[derive(Debug, Clone)]
pub struct ChartReport {
    pub output: PathBuf,
    pub csv_output: Option<PathBuf>,
    pub series_count: usize,
    pub extremes: Vec<BandExtremes>,
}

/// Workbook -> band values -> PNG (and optionally CSV).
pub fn render_chart(spec: &ChartSpec, options: RenderOptions) -> RenderResult<ChartReport> {
    spec.validate()?;
    log::info!("Rendering '{}'", spec.title);
    let series = load_measurements(spec)?;
    render_series(spec, &series, options)
}

/// Renders already-loaded series; `series` must follow `spec.sheets` order.
pub fn render_series(
    spec: &ChartSpec,
    series: &[MaterialSeries],
    options: RenderOptions,
) -> RenderResult<ChartReport> {
    warn_out_of_range(spec, series);

    let extremes = band_extremes(series);
    if spec.kind == ChartKind::Threads {
        for band in &extremes {
            log::info!(
                "  {}: max {:.3} ({}), min {:.3} ({})",
                format_frequency_label(band.frequency_hz),
                band.max,
                band.max_sheet,
                band.min,
                band.min_sheet
            );
        }
    }

    draw_comparison_chart(spec, series, |chart, colors, sizes| match spec.kind {
        ChartKind::Line => draw_material_lines(chart, series, colors, sizes),
        ChartKind::Threads => {
            let threads = spec.thread_settings();
            draw_material_threads(chart, series, colors, sizes, &threads)?;
            if threads.annotate_extremes {
                draw_extreme_annotations(chart, &extremes, sizes, &threads)?;
            }
            Ok(())
        }
    })?;

    let csv_output = if options.export_csv {
        let path = table_path_for(&spec.output);
        export_band_table(&path, series)?;
        Some(path)
    } else {
        None
    };

    Ok(ChartReport {
        output: spec.output.clone(),
        csv_output,
        series_count: series.len(),
        extremes,
    })
}

/// Values outside the fixed y axis still render but may be clipped; say so.
fn warn_out_of_range(spec: &ChartSpec, series: &[MaterialSeries]) {
    for s in series {
        if let Some((lo, hi)) = s.value_bounds() {
            if lo < spec.y_axis.min || hi > spec.y_axis.max {
                log::warn!(
                    "Sheet '{}' has values in {lo}..={hi}, outside the y axis {}..={}",
                    s.sheet_name,
                    spec.y_axis.min,
                    spec.y_axis.max
                );
            }
        }
    }
}
