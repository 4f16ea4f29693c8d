use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use thumbkit::{
    AccentSource, CompositeResult, FontSet, Metadata, SearchRecord, ThumbnailStyle, Thumbnailer,
};

#[derive(Parser, Debug)]
#[command(name = "thumbkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one thumbnail as a PNG.
    Compose(ComposeArgs),
    /// Render many thumbnails described by a JSON job list.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct FontArgs {
    /// Font for the title lines.
    #[arg(long)]
    heading_font: PathBuf,

    /// Font for the info line, duration and watermark.
    #[arg(long)]
    secondary_font: PathBuf,

    /// Layout overrides as JSON.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Seed the accent colour instead of picking it at random.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Source image.
    #[arg(long)]
    image: PathBuf,

    /// Search record JSON to take text fields from; explicit flags win.
    #[arg(long)]
    record: Option<PathBuf>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    channel: Option<String>,

    #[arg(long)]
    views: Option<String>,

    #[arg(long)]
    duration: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// JSON array of `{image, out, title, channel, views, duration}` objects.
    #[arg(long)]
    jobs: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Deserialize, Debug)]
struct Job {
    image: PathBuf,
    out: PathBuf,
    #[serde(flatten)]
    record: SearchRecord,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn thumbnailer(args: &FontArgs) -> anyhow::Result<Thumbnailer> {
    let fonts = FontSet::from_paths(&args.heading_font, &args.secondary_font)?;
    let mut t = Thumbnailer::new(fonts);
    if let Some(path) = &args.style {
        t = t.with_style(ThumbnailStyle::from_path(path)?)?;
    }
    if let Some(seed) = args.seed {
        t = t.with_accent(AccentSource::Seeded(seed));
    }
    Ok(t)
}

fn render_one(t: &Thumbnailer, image: &Path, out: &Path, meta: &Metadata) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(image).with_context(|| format!("read image '{}'", image.display()))?;
    match t.compose(&bytes, meta) {
        CompositeResult::Success(img) => {
            thumbkit::publish(out, &img)?;
            Ok(())
        }
        CompositeResult::Failure(f) => {
            anyhow::bail!("compose '{}': {f}", image.display())
        }
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let t = thumbnailer(&args.fonts)?;

    let mut record = match &args.record {
        Some(path) => {
            let f = std::fs::File::open(path)
                .with_context(|| format!("open record '{}'", path.display()))?;
            serde_json::from_reader(std::io::BufReader::new(f))
                .with_context(|| format!("parse record '{}'", path.display()))?
        }
        None => SearchRecord::default(),
    };
    record.title = args.title.or(record.title);
    record.channel = args.channel.or(record.channel);
    record.view_count = args.views.or(record.view_count);
    record.duration = args.duration.or(record.duration);
    let meta = Metadata::from_record(&record);

    render_one(&t, &args.image, &args.out, &meta)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    if args.threads == Some(0) {
        anyhow::bail!("--threads must be >= 1 when set");
    }
    let t = thumbnailer(&args.fonts)?;
    let f = std::fs::File::open(&args.jobs)
        .with_context(|| format!("open jobs '{}'", args.jobs.display()))?;
    let jobs: Vec<Job> = serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parse jobs '{}'", args.jobs.display()))?;

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = args.threads {
        builder = builder.num_threads(n);
    }
    let pool = builder
        .build()
        .context("failed to build rayon thread pool")?;

    let results: Vec<(usize, anyhow::Result<()>)> = pool.install(|| {
        jobs.par_iter()
            .enumerate()
            .map(|(i, job)| {
                let meta = Metadata::from_record(&job.record);
                (i, render_one(&t, &job.image, &job.out, &meta))
            })
            .collect()
    });

    let mut failed = 0usize;
    for (i, res) in results {
        match res {
            Ok(()) => eprintln!("wrote {}", jobs[i].out.display()),
            Err(e) => {
                failed += 1;
                eprintln!("job {i} failed: {e:#}");
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} jobs failed", jobs.len());
    }
    Ok(())
}
