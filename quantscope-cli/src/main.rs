//! Quantization comparison figures from the command line.
//!
//! Reads precomputed original, quantized and quantized+sampled signals from a
//! JSON document and writes the waveform overlay, the bit-plane stack and the
//! linear and dB spectrum comparisons.

mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use input::SignalDocument;
use log::info;
use quantscope::canvas::backend;
use quantscope::canvas::bitplane_renderer::plot_bitplanes;
use quantscope::canvas::waveform_renderer::plot_quantized_all;
use quantscope::{plot_fourier_three, Figure, RenderSettings, Stage};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quantscope")]
#[command(author, version, about = "Quantization and sampling spectrum comparison", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every comparison figure for a signal document
    Render {
        /// JSON document with `original`, `quantized` and `sampled` series
        #[arg(short, long)]
        input: PathBuf,

        /// Directory the figures are written to
        #[arg(short, long, default_value = "figures")]
        out_dir: PathBuf,

        /// JSON render settings (missing fields use defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Png)]
        format: Format,

        /// Upper frequency limit of spectrum panels in Hz
        #[arg(long)]
        freq_lim: Option<f64>,

        /// Lower limit of dB panels
        #[arg(long, allow_hyphen_values = true)]
        db_floor: Option<f64>,
    },

    /// Print the default render settings as JSON
    Settings,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Png,
    Svg,
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Svg => "svg",
            Format::Json => "json",
        }
    }
}

fn init_logging(verbose: u8) {
    let default = if verbose > 0 { "quantscope=debug" } else { "quantscope=info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_default();
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
    {
        eprintln!("failed to initialise logging: {err}");
    }
}

fn write_figure(figure: &Figure, dir: &Path, name: &str, format: Format) -> Result<()> {
    let path = dir.join(format!("{name}.{}", format.extension()));
    match format {
        Format::Png => backend::save_png(figure, &path)?,
        Format::Svg => backend::save_svg(figure, &path)?,
        Format::Json => std::fs::write(&path, figure.to_json()?)
            .with_context(|| format!("failed to write {}", path.display()))?,
    }
    info!("wrote {}", path.display());
    Ok(())
}

fn render(
    input: &Path,
    out_dir: &Path,
    config: Option<&Path>,
    format: Format,
    freq_lim: Option<f64>,
    db_floor: Option<f64>,
) -> Result<()> {
    let mut settings = match config {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };
    if let Some(floor) = db_floor {
        settings.db_floor = floor;
        settings.validate()?;
    }

    let doc = SignalDocument::load(input)?;
    let [original, quantized, sampled] = doc.set.analyze()?;
    let freq_lim = freq_lim.unwrap_or_else(|| doc.freq_lim(&original));
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let waveform = plot_quantized_all(&doc.set, doc.x_lim(), doc.y_lim(), &settings)?;
    write_figure(&waveform, out_dir, "waveform", format)?;

    if let Some(bitplanes) = &doc.bitplanes {
        let figure = plot_bitplanes(&bitplanes.bits, &bitplanes.time, &settings)?;
        write_figure(&figure, out_dir, "bitplanes", format)?;
    }

    let figures = plot_fourier_three(&original, &quantized, &sampled, freq_lim, &settings)?;
    write_figure(&figures.linear, out_dir, "spectrum_linear", format)?;
    write_figure(&figures.db, out_dir, "spectrum_db", format)?;

    for (stage, spectrum) in Stage::ALL.iter().zip([&original, &quantized, &sampled]) {
        match spectrum.peak_frequency() {
            Some(peak) => info!("{}: peak at {peak:.3} Hz", stage.title()),
            None => info!("{}: all-zero signal", stage.title()),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            input,
            out_dir,
            config,
            format,
            freq_lim,
            db_floor,
        } => render(
            &input,
            &out_dir,
            config.as_deref(),
            format,
            freq_lim,
            db_floor,
        ),
        Commands::Settings => {
            println!("{}", serde_json::to_string_pretty(&RenderSettings::default())?);
            Ok(())
        }
    }
}
