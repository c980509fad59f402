// src/constants.rs

use plotters::style::colors::{BLACK, WHITE};
use plotters::style::RGBColor;

// Default workbook and output file names, resolved against the working directory.
pub const TRANSMISSION_LOSS_WORKBOOK: &str = "Transmission Loss (db).xlsx";
pub const TRANSMISSION_LOSS_OUTPUT: &str = "DTL Comparison.png";
pub const ABSORPTION_WORKBOOK: &str = "Reflection & absorption coefficient.xlsx";
pub const ABSORPTION_OUTPUT: &str = "SAC_Comparison_Updated.png";
pub const EDT_WORKBOOK: &str = "EDT.xlsx";
pub const EDT_OUTPUT: &str = "EDT_Threads_Narrow_YAxis_Annotated.png";

// First sheet row holding band data (row 1 is the header).
pub const DEFAULT_FIRST_ROW: u32 = 2;

// Figure resolution.
pub const DEFAULT_DPI: u32 = 300;
pub const POINTS_PER_INCH: f64 = 72.0;

// Font sizes in points (scaled by dpi at render time).
pub const FONT_PT_TITLE: f64 = 16.0;
pub const FONT_PT_TITLE_LARGE: f64 = 18.0;
pub const FONT_PT_AXIS_DESC: f64 = 14.0;
pub const FONT_PT_AXIS_DESC_LARGE: f64 = 16.0;
pub const FONT_PT_TICK: f64 = 10.0;
pub const FONT_PT_TICK_LARGE: f64 = 12.0;
pub const FONT_PT_LEGEND: f64 = 14.0;
pub const FONT_PT_LEGEND_LARGE: f64 = 16.0;
pub const FONT_PT_ANNOTATION: f64 = 10.0;

// Line and marker sizes in points.
pub const LINE_PT_SERIES: f64 = 1.5;
pub const LINE_PT_THREAD: f64 = 2.0;
pub const MARKER_PT_SERIES: f64 = 6.0;
pub const LINE_PT_FRAME: f64 = 0.8;

// Thread chart settings.
pub const THREAD_WIDTH_FACTOR: f64 = 1.15;
pub const ANNOTATION_OFFSET: f64 = 0.005;
pub const ANNOTATION_PRECISION: usize = 3;

// Log-axis padding applied on each side of the outermost bands.
pub const X_AXIS_PAD_FACTOR: f64 = 1.3;

// Layout ratios relative to the figure.
pub const FIGURE_MARGIN_RATIO: f64 = 0.02;
pub const LEGEND_PADDING_PT: f64 = 8.0;
pub const LEGEND_SAMPLE_LENGTH_PT: f64 = 24.0;
pub const LEGEND_ROW_SPACING: f64 = 1.5;
pub const LEGEND_GAP_ABOVE_PT: f64 = 12.0;

// Legend and annotation colours.
pub const COLOR_TEXT: &RGBColor = &BLACK;
pub const COLOR_BACKGROUND: &RGBColor = &WHITE;
pub const COLOR_LEGEND_FRAME: RGBColor = RGBColor(204, 204, 204);

// Decimal places beyond which tick steps are not refined further.
pub const MAX_TICK_DECIMALS: usize = 6;
