use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seeded_noise::config::{GeneratorKind, RenderConfig};
use seeded_noise::export::{save_grey_png, write_summary};

/// Render a seeded noise field to a normalized greyscale PNG.
#[derive(Parser)]
#[command(name = "seeded-noise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON render config; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (default: renders/<generator>-<seed>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    generator: Option<Generator>,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Samples per spline cache (spline generator only, minimum 3)
    #[arg(long)]
    cache_size: Option<usize>,

    #[arg(long)]
    octaves: Option<u32>,

    #[arg(long)]
    persistence: Option<f64>,

    /// Noise-space x of the first sample
    #[arg(long, allow_negative_numbers = true)]
    min_x: Option<f64>,

    /// Noise-space y of the first sample
    #[arg(long, allow_negative_numbers = true)]
    min_y: Option<f64>,

    /// Distance between samples in noise space
    #[arg(long)]
    step: Option<f64>,

    /// Image width in samples
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Image height in samples
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Generator {
    Classic,
    Spline,
    Simplex,
}

impl From<Generator> for GeneratorKind {
    fn from(g: Generator) -> Self {
        match g {
            Generator::Classic => GeneratorKind::Classic,
            Generator::Spline => GeneratorKind::Spline,
            Generator::Simplex => GeneratorKind::Simplex,
        }
    }
}

impl Cli {
    fn render_config(&self) -> anyhow::Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RenderConfig::default(),
        };

        if let Some(g) = self.generator {
            config.generator = g.into();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(size) = self.cache_size {
            config.spline_cache_size = size;
        }
        if let Some(octaves) = self.octaves {
            config.octaves = octaves;
        }
        if let Some(persistence) = self.persistence {
            config.persistence = persistence;
        }
        if let Some(x) = self.min_x {
            config.origin[0] = x;
        }
        if let Some(y) = self.min_y {
            config.origin[1] = y;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(width) = self.width {
            config.samples_x = width;
        }
        if let Some(height) = self.height {
            config.samples_y = height;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = cli.render_config()?;

    let dir = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("renders/{}-{}", config.generator, config.seed)));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let source = config.build_source();
    let png_path = dir.join("noise.png");
    let summary = save_grey_png(&png_path, source.as_ref(), &config.grid())
        .with_context(|| format!("rendering {}", png_path.display()))?;
    write_summary(&summary, dir.join("noise.json"))?;

    tracing::info!(
        generator = %config.generator,
        seed = config.seed,
        octaves = config.octaves,
        "wrote {}/noise.png",
        dir.display()
    );
    Ok(())
}
