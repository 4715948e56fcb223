use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dither_png::models::{AppConfig, ConfigOverrides};
use dither_png::services::{Converter, Outcome};
use mono_dither::DitherMode;

#[derive(Parser)]
#[command(name = "dither-png")]
#[command(version, about = "Dither grayscale PNG images to pure black and white")]
struct Cli {
    /// Input PNG file
    input: Option<PathBuf>,

    /// Output PNG file [default: out.png]
    output: Option<PathBuf>,

    /// Use Floyd-Steinberg error diffusion instead of ordered dithering
    #[arg(short, long)]
    floyd_steinberg: bool,

    /// Threshold matrix order (1-8); the matrix is 2^order pixels wide
    #[arg(long)]
    order: Option<u32>,

    /// Multiplier applied to threshold matrix entries
    #[arg(long)]
    coefficient: Option<u32>,

    /// Refuse images with more pixels than this
    #[arg(long)]
    max_pixels: Option<usize>,

    /// YAML configuration file (falls back to CONFIG_FILE)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a 1-bit grayscale PNG
    #[arg(long)]
    one_bit: bool,

    /// Re-compress the output with oxipng
    #[arg(long)]
    optimize: bool,

    /// Fail on images that cannot be dithered instead of copying them
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(input) = cli.input.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dither_png=warn,mono_dither=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_file = cli
        .config
        .clone()
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let file_config = match config_file {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };
    let config = cli.overrides().apply(file_config);

    let converter = Converter::new(&config)?;
    let conversion = converter.convert_file(&input, &config.output)?;

    match conversion.outcome {
        Outcome::Dithered(summary) => println!(
            "Dithered {} -> {} ({}, {}x{})",
            input.display(),
            config.output.display(),
            summary.mode,
            conversion.width,
            conversion.height
        ),
        Outcome::Untouched { channels } => println!(
            "Copied {} -> {} (unsupported color model, {channels} channels)",
            input.display(),
            config.output.display()
        ),
    }

    Ok(())
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mode: self.floyd_steinberg.then_some(DitherMode::FloydSteinberg),
            order: self.order,
            coefficient: self.coefficient,
            max_pixels: self.max_pixels,
            output: self.output.clone(),
            one_bit: self.one_bit,
            optimize: self.optimize,
            strict: self.strict,
        }
    }
}
