// src/data_input/mod.rs

pub mod material_data;
pub mod workbook_reader;
