// src/data_analysis/mod.rs

pub mod band_extremes;
