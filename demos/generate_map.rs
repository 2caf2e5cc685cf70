use clap::Parser;
use std::path::PathBuf;
use wave_terrain::{GenerationConfig, Tileset, generate};

/// Terrain generation configuration.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Config {
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    tileset: Option<PathBuf>,

    #[arg(short = 'n', long)]
    size: Option<usize>,

    #[arg(short, long)]
    scale: Option<f64>,

    #[arg(short, long)]
    resolution: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Config::parse();

    let mut config = match &args.config {
        Some(path) => GenerationConfig::load(path).expect("Failed to load config"),
        None => GenerationConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(scale) = args.scale {
        config.noise_scale = scale;
    }
    if let Some(resolution) = args.resolution {
        config.resolution = resolution;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.show_progress = args.verbose;
    config.validate().expect("Invalid config");

    let tileset = match &args.tileset {
        Some(path) => Tileset::load(path).expect("Failed to load tileset"),
        None => Tileset::terrain(),
    };

    if args.verbose {
        println!("Grid size         : {}", config.size);
        println!("Noise scale       : {}", config.effective_scale());
        println!("Resolution        : {}", config.resolution);
        println!("Seed              : {:?}", config.seed);
        println!("Number of tiles   : {}", tileset.len());
        for tile in tileset.tiles() {
            println!("    {tile}");
        }
    }

    let map = generate(&config, &tileset).to_map();
    print!("{}", map.render_glyphs(&tileset));

    if args.verbose {
        println!("Fixed cells       : {}", map.num_fixed());
        println!("Undetermined cells: {}", map.num_undetermined());
    }

    if let Some(path) = &args.output {
        map.save(path).expect("Failed to save map");
    }
}
