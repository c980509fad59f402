// src/error.rs

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors raised while loading, validating or rendering a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to open workbook '{}': {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet '{sheet}' not found in workbook '{}'", path.display())]
    MissingSheet { path: PathBuf, sheet: String },

    #[error("failed to read sheet '{sheet}': {source}")]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet '{sheet}' cell {cell}: expected a number, found {found}")]
    NonNumericCell {
        sheet: String,
        cell: String,
        found: String,
    },

    #[error("invalid chart configuration: {0}")]
    Config(String),

    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
