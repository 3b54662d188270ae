use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use blockfit_core::config::{PackerConfig, RotationMode, SortOrder};
use blockfit_core::{Block, Container, PackStats, pack_with_config};
use clap::{ArgAction, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

mod svg;

#[derive(Parser, Debug)]
#[command(
    name = "blockfit",
    about = "Place rectangular blocks into a container",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a JSON block list and export the layout
    Pack(PackArgs),
    /// Simple timing bench on random blocks (packs once, prints time + fullness)
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    // Input/Output
    /// JSON file holding an array of {"width", "height"} records
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Base name for output files (name.json / name.svg)
    #[arg(short, long, default_value = "layout", help_heading = "Input/Output")]
    name: String,
    /// YAML config file path (overrides container and packing options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Container
    /// Container width
    #[arg(long, default_value_t = 350.0, help_heading = "Container")]
    width: f64,
    /// Container height
    #[arg(long, default_value_t = 350.0, help_heading = "Container")]
    height: f64,

    // Packing
    /// Rotation handling: faithful | apply | disabled
    #[arg(long, default_value = "faithful", help_heading = "Packing")]
    rotation: String,
    /// Sort order: area_desc|max_side_desc|height_desc|width_desc|none
    #[arg(long, default_value = "area_desc", help_heading = "Packing")]
    sort_order: String,

    // Export
    /// Output format: json | svg | both
    #[arg(long, value_parser = ["json", "svg", "both"], default_value = "both", help_heading = "Export")]
    format: String,
    /// Seed for block colours in the SVG (random when unset)
    #[arg(long, help_heading = "Export")]
    seed: Option<u64>,
    /// Export packing stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
    /// Dry run: compute layout and stats but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of random blocks
    #[arg(long, default_value_t = 200)]
    count: usize,
    /// Largest random block side
    #[arg(long, default_value_t = 64)]
    max_side: u32,
    /// Container width
    #[arg(long, default_value_t = 2048.0)]
    width: f64,
    /// Container height
    #[arg(long, default_value_t = 2048.0)]
    height: f64,
    /// Rotation handling: faithful | apply | disabled
    #[arg(long, default_value = "faithful")]
    rotation: String,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Container plus packer options, as merged from flags and the YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct LayoutConfig {
    container: Container,
    #[serde(flatten)]
    packer: PackerConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Bench(b) => run_bench(b),
    }
}

fn run_pack(cli: &PackArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(cli)?;
    if cli.print_config {
        match cli.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }
    write_layout(cli, &cfg)?;
    Ok(())
}

/// Flags first, then the YAML file on top.
fn resolve_config(cli: &PackArgs) -> anyhow::Result<LayoutConfig> {
    let mut cfg = LayoutConfig {
        container: Container::new(cli.width, cli.height),
        packer: PackerConfig {
            rotation: parse_rotation(&cli.rotation)?,
            sort_order: parse_sort_order(&cli.sort_order)?,
        },
    };
    // Config file sets container and packing options en bloc
    if let Some(path) = &cli.config {
        let file =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg = y.into_layout_config(cfg)?;
    }
    Ok(cfg)
}

/// Loads, packs and writes the requested outputs. Nothing is written unless
/// every block was placed.
fn write_layout(cli: &PackArgs, cfg: &LayoutConfig) -> anyhow::Result<PackStats> {
    let blocks = load_blocks(&cli.input)?;
    info!(count = blocks.len(), "loaded blocks");

    let placement = match pack_with_config(&blocks, cfg.container, &cfg.packer) {
        Ok(p) => p,
        Err(e) => {
            error!(error = %e, "packing failed");
            return Err(e).context("could not place all blocks into the container");
        }
    };
    let stats = placement.stats();
    info!(
        blocks = stats.num_blocks,
        fullness = stats.fullness,
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        free_regions = stats.num_free_regions,
        "stats"
    );

    if cli.dry_run {
        if cli.export_stats.is_some() {
            println!("{}", stats.summary());
        }
        return Ok(stats);
    }

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create out_dir {}", cli.out_dir.display()))?;

    if matches!(cli.format.as_str(), "json" | "both") {
        let json_path = cli.out_dir.join(format!("{}.json", cli.name));
        let json = serde_json::to_string_pretty(&blockfit_core::to_json(&placement))?;
        fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;
        info!(?json_path, "layout written");
    }
    if matches!(cli.format.as_str(), "svg" | "both") {
        let rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut colors = svg::ColorMap::new(rng);
        let svg_path = cli.out_dir.join(format!("{}.svg", cli.name));
        fs::write(&svg_path, svg::render_svg(&placement, &mut colors))
            .with_context(|| format!("write {}", svg_path.display()))?;
        if colors.is_empty() {
            info!(?svg_path, "empty drawing written");
        } else {
            info!(?svg_path, colors = colors.len(), "drawing written");
        }
    }

    if let Some(stats_path) = &cli.export_stats {
        fs::write(stats_path, serde_json::to_string_pretty(&stats)?)
            .with_context(|| format!("write {}", stats_path.display()))?;
        info!(?stats_path, "stats exported");
    }
    Ok(stats)
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(b.seed);
    let max_side = b.max_side.max(1);
    let blocks: Vec<Block> = (0..b.count)
        .map(|_| {
            Block::new(
                rng.gen_range(1..=max_side) as f64,
                rng.gen_range(1..=max_side) as f64,
            )
        })
        .collect();
    let cfg = PackerConfig::builder()
        .rotation(parse_rotation(&b.rotation)?)
        .build();
    let container = Container::new(b.width, b.height);

    let start = Instant::now();
    let result = pack_with_config(&blocks, container, &cfg);
    let dur = start.elapsed();
    match result {
        Ok(out) => {
            let stats = out.stats();
            println!(
                "blocks={} fullness={:.4} occupancy={:.2}% time={}",
                stats.num_blocks,
                stats.fullness,
                stats.occupancy * 100.0,
                bench_fmt_dur(dur)
            );
        }
        Err(e) => println!("failed: {} time={}", e, bench_fmt_dur(dur)),
    }
    Ok(())
}

fn bench_fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

/// Reads the block list. Anything but a JSON array of `{width, height}` is rejected.
fn load_blocks(path: &Path) -> anyhow::Result<Vec<Block>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_blocks(&text).with_context(|| format!("load blocks from {}", path.display()))
}

fn parse_blocks(text: &str) -> anyhow::Result<Vec<Block>> {
    let blocks: Vec<Block> = serde_json::from_str(text)
        .context("expected a JSON array of {\"width\", \"height\"} records")?;
    Ok(blocks)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    width: Option<f64>,
    height: Option<f64>,
    rotation: Option<String>,
    sort_order: Option<String>,
}

impl YamlConfig {
    fn into_layout_config(self, mut cfg: LayoutConfig) -> anyhow::Result<LayoutConfig> {
        if let Some(v) = self.width {
            cfg.container.width = v;
        }
        if let Some(v) = self.height {
            cfg.container.height = v;
        }
        if let Some(v) = self.rotation {
            cfg.packer.rotation = parse_rotation(&v)?;
        }
        if let Some(v) = self.sort_order {
            cfg.packer.sort_order = parse_sort_order(&v)?;
        }
        Ok(cfg)
    }
}

fn parse_rotation(s: &str) -> anyhow::Result<RotationMode> {
    match s.parse() {
        Ok(v) => Ok(v),
        Err(()) => anyhow::bail!("unknown rotation mode: {}", s),
    }
}

fn parse_sort_order(s: &str) -> anyhow::Result<SortOrder> {
    match s.parse() {
        Ok(v) => Ok(v),
        Err(()) => anyhow::bail!("unknown sort order: {}", s),
    }
}
