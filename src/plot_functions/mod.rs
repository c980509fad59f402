// src/plot_functions/mod.rs

pub mod plot_absorption_coefficient;
pub mod plot_early_decay_time;
pub mod plot_transmission_loss;

use crate::chart_spec::SheetStyle;

/// Sheets holding per-material averages, shared by the TL and SAC workbooks.
pub fn averaged_material_sheets() -> Vec<SheetStyle> {
    vec![
        SheetStyle::new("SPI-A-Av", "b"),
        SheetStyle::new("SPI-B-Av", "g"),
        SheetStyle::new("SCA-B1-Av", "darkorange"),
        SheetStyle::new("SCA-B2-Av", "navy"),
        SheetStyle::new("E3DCP-Concrete-Av", "violet"),
        SheetStyle::new("E3DCP-Cast Pattern-Av", "crimson"),
        SheetStyle::new("E3DCP-Clay-Av", "gold"),
        SheetStyle::new("Shotcrete-A-Av", "aqua"),
        SheetStyle::new("Shotcrete-B-Av", "lime"),
    ]
}
