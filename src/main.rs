//! Quadratic attractors CLI - Search for a chaotic attractor and render it.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use quadratic_attractors::{
    compute::{SearchError, search},
    render::render,
    schema::{
        Attractor, AttractorMetadata, ConfigError, DensityConfig, MetadataError, RenderConfig,
        SearchConfig, SeedSource, SeedToken,
    },
};

#[derive(Parser, Debug)]
#[command(name = "quadratic-attractors")]
#[command(about = "Generate and render chaotic quadratic attractors")]
#[command(after_help = "Examples:
  quadratic-attractors --output attractor
  quadratic-attractors --seed \"my_seed\" --width 3840 --height 2160
  quadratic-attractors --load-metadata attractor_metadata.json --replay")]
struct Cli {
    /// Base name for output files (no extension)
    #[arg(short, long, default_value = "attractor")]
    output: String,

    /// Directory receiving images and metadata
    #[arg(long, default_value = "outputs")]
    output_dir: PathBuf,

    /// Seed phrase for reproducible searches
    #[arg(short, long)]
    seed: Option<String>,

    /// Image width in pixels
    #[arg(short, long, default_value_t = 1920)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Maximum map iterations per attempt
    #[arg(short, long, default_value_t = 10_000)]
    iterations: usize,

    /// Minimum accumulated Lyapunov estimate
    #[arg(short = 'l', long, default_value_t = 10.0)]
    min_lyapunov: f64,

    /// Reuse the seed token from a metadata file (relative to the output directory)
    #[arg(long)]
    load_metadata: Option<PathBuf>,

    /// Redraw the stored parameters instead of repeating the search
    #[arg(long, requires = "load_metadata")]
    replay: bool,

    /// Only write metadata, skip the image
    #[arg(long)]
    no_image: bool,

    /// Color points by local density
    #[arg(long)]
    density_color: bool,

    /// Radius used for density coloring
    #[arg(long, default_value_t = 5)]
    density_radius: usize,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("Could not load metadata: {0}")]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to prepare output directory: {0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    fs::create_dir_all(&cli.output_dir)?;

    let search_config = SearchConfig {
        max_iterations: cli.iterations,
        min_lyapunov: cli.min_lyapunov,
        ..Default::default()
    };
    search_config.validate()?;

    let render_config = RenderConfig {
        width: cli.width,
        height: cli.height,
        density: cli.density_color.then_some(DensityConfig {
            radius: cli.density_radius,
        }),
        ..Default::default()
    };
    if !cli.no_image {
        render_config.validate()?;
    }

    let loaded = match &cli.load_metadata {
        Some(path) => Some(AttractorMetadata::load(resolve(&cli.output_dir, path))?),
        None => None,
    };

    let start = Instant::now();
    let (attractor, seed) = match loaded {
        Some(metadata) if cli.replay => {
            println!("Replaying stored parameters ({} points)", metadata.num_points);
            let attractor = Attractor::replay(
                metadata.parameters()?,
                search_config.burn_in,
                metadata.num_points,
            )
            .ok_or_else(|| {
                MetadataError::Invalid(format!(
                    "num_points {} is too large to replay",
                    metadata.num_points
                ))
            })?;
            (attractor, metadata.seed)
        }
        Some(metadata) => find(search_config, SeedSource::Token(metadata.seed))?,
        None => {
            let source = match cli.seed {
                Some(phrase) => SeedSource::Phrase(phrase),
                None => SeedSource::Entropy,
            };
            find(search_config, source)?
        }
    };
    log::info!(
        "attractor ready in {:.2}s ({} points)",
        start.elapsed().as_secs_f32(),
        attractor.len()
    );

    let base_path = cli.output_dir.join(&cli.output);

    if !cli.no_image {
        let image = render(&attractor, &render_config);
        let image_path = base_path.with_extension("png");
        image.save(&image_path)?;
        println!("Image saved: {}", image_path.display());
    }

    let metadata_path = cli.output_dir.join(format!("{}_metadata.json", cli.output));
    AttractorMetadata::new(seed.clone(), &attractor.parameters, attractor.len())
        .save(&metadata_path)?;
    println!("Metadata saved: {}", metadata_path.display());
    println!("Seed token: {}", seed);

    Ok(())
}

/// Run a single-attractor search.
fn find(config: SearchConfig, source: SeedSource) -> Result<(Attractor, SeedToken), CliError> {
    let outcome = search(config, source)?;
    println!("Found attractor after {} attempts", outcome.stats.attempts);
    let mut attractors = outcome.attractors;
    // An `Ok` search holds exactly `count` (here 1) attractors.
    Ok((attractors.swap_remove(0), outcome.seed))
}

/// Relative metadata paths live under the output directory.
fn resolve(output_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        output_dir.join(path)
    }
}
