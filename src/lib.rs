// src/lib.rs - Library interface for internal module access

pub mod chart_pipeline;
pub mod chart_spec;
pub mod colors;
pub mod constants;
pub mod csv_export;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod frequency_bands;
pub mod plot_framework;
pub mod plot_functions;

// Version string; a git-describe value injected at build time wins over the package version.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
