use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use meshmaker::{Color, MeshConfig, SurfacePreset};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum Size {
    /// 1080x1080
    Square,
    /// 1080x1920
    Reel,
    /// 1200x675
    Post,
}

impl From<Size> for SurfacePreset {
    fn from(size: Size) -> Self {
        match size {
            Size::Square => SurfacePreset::Square,
            Size::Reel => SurfacePreset::Reel,
            Size::Post => SurfacePreset::Post,
        }
    }
}

#[derive(Parser)]
#[command(about = "Render a random gradient mesh from a set of base colors")]
struct Options {
    /// Base color as a #RRGGBB hex string, repeat for each color
    #[arg(long = "color", short)]
    colors: Vec<Color>,

    /// Control points scattered per base color
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=20))]
    points_per_color: u32,

    /// Surface size preset
    #[arg(long, value_enum)]
    size: Option<Size>,

    /// Surface width in pixels, overrides the preset
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in pixels, overrides the preset
    #[arg(long)]
    height: Option<u32>,

    /// Seed the point layout instead of drawing fresh randomness
    #[arg(long)]
    seed: Option<u64>,

    /// Read the whole mesh configuration from a JSON file instead of flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output image path, png or jpeg by extension
    #[arg(long, short)]
    output: PathBuf,
}

fn build_config(opt: &Options) -> Result<MeshConfig> {
    if let Some(path) = &opt.config {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        return serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()));
    }

    let preset: SurfacePreset = opt.size.unwrap_or(Size::Square).into();
    let mut config = MeshConfig::with_preset(opt.colors.clone(), opt.points_per_color, preset);

    if let Some(width) = opt.width {
        config.width = width;
    }

    if let Some(height) = opt.height {
        config.height = height;
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Options::parse();
    let config = build_config(&opt)?;

    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "Render {}x{} mesh from {} colors, {} points each",
        config.width,
        config.height,
        config.base_colors.len(),
        config.points_per_color
    );

    match meshmaker::render(&config, &mut rng)? {
        Some(buffer) => {
            let (width, height) = (buffer.width(), buffer.height());
            let image = image::RgbaImage::from_raw(width, height, buffer.into_raw())
                .context("Pixel buffer does not match its dimensions")?;

            image
                .save(&opt.output)
                .with_context(|| format!("Failed to write {}", opt.output.display()))?;

            info!("Wrote {}", opt.output.display());
        }
        None => warn!("Need at least two base colors, nothing rendered"),
    }

    Ok(())
}
