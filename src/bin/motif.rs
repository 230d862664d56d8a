use anyhow::{Context as _, Result};
use clap::Parser;
use geo_types::{coord, Rect};
use radial_motif_rs::color::JitterRange;
use radial_motif_rs::context::Context;
use radial_motif_rs::geo_types::svg::Arrangement;
use radial_motif_rs::motif::{paint, MotifConfig};
use rand::prelude::{SeedableRng, SmallRng};
use std::fs;
use std::path::PathBuf;

/// Render the radial circle motif to an SVG file.
#[derive(Parser, Debug)]
#[command(name = "motif", about = "Render the radial circle motif to SVG", version)]
struct Args {
    /// Output SVG path
    #[arg(short, long, default_value = "motif.svg")]
    output: PathBuf,

    /// Load a full MotifConfig from a RON file (flags below still override)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config as RON to the given path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Hue advance per outer iteration
    #[arg(long)]
    hue_step: Option<f64>,

    /// Enable per-channel color jitter (defaults to the wide 0.7..1.3 range)
    #[arg(long)]
    jitter: bool,

    /// Lower bound of the jitter range (implies --jitter)
    #[arg(long)]
    jitter_min: Option<f64>,

    /// Upper bound of the jitter range (implies --jitter)
    #[arg(long)]
    jitter_max: Option<f64>,

    /// RNG seed, for reproducible jittered output
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Page size (square, mm)
    #[arg(long, default_value_t = 400.0)]
    page: f64,

    /// Page margin (mm)
    #[arg(long, default_value_t = 10.0)]
    margin: f64,
}

fn effective_config(args: &Args) -> Result<MotifConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ron::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => MotifConfig::default(),
    };
    if let Some(step) = args.hue_step {
        config.hue_step = step;
    }
    if args.jitter || args.jitter_min.is_some() || args.jitter_max.is_some() {
        let mut range = config.jitter.unwrap_or_else(JitterRange::wide);
        if let Some(min) = args.jitter_min {
            range.min = min;
        }
        if let Some(max) = args.jitter_max {
            range.max = max;
        }
        config.jitter = Some(range);
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = effective_config(&args)?;

    if let Some(path) = &args.write_config {
        let text = ron::ser::to_string_pretty(&config, Default::default())?;
        fs::write(path, text).with_context(|| format!("writing config {}", path.display()))?;
        log::info!("wrote config to {}", path.display());
        return Ok(());
    }

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut ctx = Context::new();
    ctx.background("black");
    paint(&config, &mut ctx, &mut rng);
    log::info!(
        "painted {} bands ({} arcs), hue step {}",
        config.outer_iterations,
        config.arcs_total(),
        config.hue_step
    );

    let viewbox = Rect::new(
        coord! {x: 0.0, y: 0.0},
        coord! {x: args.page, y: args.page},
    );
    let arrangement = Arrangement::FitCenterMargin(args.margin, viewbox, false);
    let svg = ctx.to_svg(&arrangement)?;
    svg::save(&args.output, &svg)
        .with_context(|| format!("saving svg {}", args.output.display()))?;
    log::info!("saved {}", args.output.display());
    Ok(())
}
