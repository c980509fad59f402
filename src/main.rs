// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use acoustic_xlsx_render::chart_pipeline::{ChartReport, RenderOptions};
use acoustic_xlsx_render::chart_spec::{ChartSpec, RenderConfig};
use acoustic_xlsx_render::error::RenderResult;
use acoustic_xlsx_render::plot_functions::{
    plot_absorption_coefficient, plot_early_decay_time, plot_transmission_loss,
};

/// Renders acoustic comparison charts from measurement workbooks.
#[derive(Parser)]
#[command(author, version = acoustic_xlsx_render::crate_version(), about)]
struct Cli {
    /// JSON file with chart definitions replacing the built-in presets
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the workbooks (default: working directory)
    #[arg(long, global = true)]
    input_dir: Option<PathBuf>,
    /// Directory the charts are written to (default: working directory)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,
    /// Override the output resolution
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    dpi: Option<u32>,
    /// Also write the extracted band values as CSV next to each chart
    #[arg(long, global = true)]
    export_csv: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Average sound transmission loss (dB) per material
    #[command(visible_alias = "tl")]
    TransmissionLoss(ChartArgs),
    /// Average sound absorption coefficient per material
    #[command(visible_alias = "sac")]
    Absorption(ChartArgs),
    /// Early decay time thread chart with per-band extremes
    Edt(ChartArgs),
    /// Render every chart
    All,
    /// Print the chart definitions in use as JSON
    DumpConfig,
}

#[derive(Args, Default)]
struct ChartArgs {
    /// Workbook to read instead of the chart's default
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Image file to write instead of the chart's default
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy)]
enum ChartId {
    TransmissionLoss,
    Absorption,
    EarlyDecayTime,
}

impl ChartId {
    const ALL: [ChartId; 3] = [
        ChartId::TransmissionLoss,
        ChartId::Absorption,
        ChartId::EarlyDecayTime,
    ];

    fn spec_from(self, config: &RenderConfig) -> ChartSpec {
        match self {
            ChartId::TransmissionLoss => config
                .transmission_loss
                .clone()
                .unwrap_or_else(plot_transmission_loss::preset),
            ChartId::Absorption => config
                .absorption
                .clone()
                .unwrap_or_else(plot_absorption_coefficient::preset),
            ChartId::EarlyDecayTime => config
                .early_decay_time
                .clone()
                .unwrap_or_else(plot_early_decay_time::preset),
        }
    }

    fn render(self, spec: &ChartSpec, options: RenderOptions) -> RenderResult<ChartReport> {
        match self {
            ChartId::TransmissionLoss => {
                plot_transmission_loss::plot_transmission_loss(spec, options)
            }
            ChartId::Absorption => {
                plot_absorption_coefficient::plot_absorption_coefficient(spec, options)
            }
            ChartId::EarlyDecayTime => plot_early_decay_time::plot_early_decay_time(spec, options),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("loading chart definitions from '{}'", path.display()))?,
        None => RenderConfig::default(),
    };
    let options = RenderOptions {
        export_csv: cli.export_csv,
    };

    match &cli.command {
        Command::TransmissionLoss(args) => {
            render_one(cli, &config, ChartId::TransmissionLoss, args, options)
        }
        Command::Absorption(args) => render_one(cli, &config, ChartId::Absorption, args, options),
        Command::Edt(args) => render_one(cli, &config, ChartId::EarlyDecayTime, args, options),
        Command::All => {
            let mut failed = Vec::new();
            for chart in ChartId::ALL {
                if let Err(err) = render_one(cli, &config, chart, &ChartArgs::default(), options) {
                    log::error!("{chart:?}: {err:#}");
                    failed.push(chart);
                }
            }
            if !failed.is_empty() {
                bail!("{} of {} charts failed: {failed:?}", failed.len(), ChartId::ALL.len());
            }
            Ok(())
        }
        Command::DumpConfig => {
            let effective = RenderConfig {
                transmission_loss: Some(ChartId::TransmissionLoss.spec_from(&config)),
                absorption: Some(ChartId::Absorption.spec_from(&config)),
                early_decay_time: Some(ChartId::EarlyDecayTime.spec_from(&config)),
            };
            println!("{}", effective.to_json_pretty()?);
            Ok(())
        }
    }
}

fn render_one(
    cli: &Cli,
    config: &RenderConfig,
    chart: ChartId,
    args: &ChartArgs,
    options: RenderOptions,
) -> anyhow::Result<()> {
    let mut spec = chart.spec_from(config);
    if let Some(dpi) = cli.dpi {
        spec.figure.dpi = dpi;
    }

    // Explicit paths are taken as given; defaults resolve against the directories.
    let input_dir = match &args.input {
        Some(input) => {
            spec.workbook = input.clone();
            None
        }
        None => cli.input_dir.as_deref(),
    };
    let output_dir = match &args.output {
        Some(output) => {
            spec.output = output.clone();
            None
        }
        None => cli.output_dir.as_deref(),
    };
    spec.resolve_paths(input_dir, output_dir);

    let report = chart
        .render(&spec, options)
        .with_context(|| format!("rendering '{}'", spec.title))?;
    log::info!(
        "{:?}: {} series -> '{}'",
        chart,
        report.series_count,
        report.output.display()
    );
    if let Some(csv) = &report.csv_output {
        log::info!("{:?}: band table -> '{}'", chart, csv.display());
    }
    Ok(())
}
