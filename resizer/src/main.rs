use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use resizer::{AssetPipeline, FsSink, Job, JobEvent, ResizerConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;

#[derive(Parser, Debug)]
#[command(name = "resizer", version)]
#[command(about = "Generate Android and iOS density variants of PNG assets")]
#[command(long_about = "Generate Android (ldpi..xxxhdpi) and iOS (@1x..@3x) density variants of PNG assets.
Files ending in .9.png are processed as Android 9-patches: their border markers are kept
pixel-exact while the content is resized.")]
struct Args {
    /// Source PNG files
    #[arg(required = true, value_name = "SOURCE")]
    sources: Vec<PathBuf>,

    /// Density the sources were drawn at (1.0 = mdpi / @1x, 2.0 = xhdpi / @2x)
    #[arg(short, long)]
    density: Option<f64>,

    /// Output root (default: next to each source)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write Contents.json manifests into the iOS asset catalog (Images.xcassets)
    #[arg(long)]
    ios_catalog: bool,

    /// Switch a density bucket on (e.g. ldpi); may be repeated
    #[arg(long, value_name = "BUCKET")]
    enable: Vec<String>,

    /// Switch a density bucket off (e.g. @1x or 1x); may be repeated
    #[arg(long, value_name = "BUCKET")]
    disable: Vec<String>,

    /// Configuration file (default: resizer.config.json next to the first source)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of worker threads (default: available parallelism)
    #[arg(short, long)]
    jobs: Option<usize>,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let density = args.density.unwrap_or(config.source_density);
    let ios_catalog = args.ios_catalog || config.ios_catalog;
    let output = args.output.clone().or_else(|| config.output.clone());
    let catalog = config
        .catalog(&args.enable, &args.disable)
        .context("invalid density bucket override")?;
    let threads = args
        .jobs
        .or(config.jobs)
        .unwrap_or_else(|| thread::available_parallelism().map_or(1, |n| n.get()))
        .max(1);

    log::debug!(
        "density {}, {} bucket(s), {} thread(s)",
        density,
        catalog.active().count(),
        threads
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("failed to create thread pool")?;

    let sink = FsSink::new();
    let mut pipeline = AssetPipeline::new(&catalog, &sink);
    if let Some(root) = output {
        pipeline = pipeline.with_output_root(root);
    }

    let failed = pool.install(|| {
        args.sources
            .par_iter()
            .filter(|source| {
                let mut job = Job::new(source.as_path(), density).with_manifest(ios_catalog);
                pipeline.run(&mut job, print_event).is_err()
            })
            .count()
    });

    let finished = args.sources.len() - failed;
    println!("{} finished, {} failed", finished, failed);

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_config(args: &Args) -> Result<ResizerConfig> {
    if let Some(path) = &args.config {
        return Ok(ResizerConfig::from_path(path)?);
    }
    let dir = args
        .sources
        .first()
        .and_then(|s| s.parent())
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    Ok(ResizerConfig::discover(dir)?.unwrap_or_default())
}

fn print_event(event: &JobEvent) {
    println!("{}: {}", event.source.display(), event.status);
}
