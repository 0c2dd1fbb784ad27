use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pixmorph::{
    CaptureFrameSink, FfmpegSink, FfmpegSinkOpts, FrameIndex, FrameSink, ImageSource,
    ImmediateScheduler, MorphConfig, MorphError, MorphSession, PngSequenceSink, ResizeFilter,
    RunStats,
};

#[derive(Parser, Debug)]
#[command(name = "pixmorph", version, about = "Morph one image into another, pixel by pixel")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write every frame as a numbered PNG.
    Frames(FramesArgs),
    /// Write a single frame as a PNG (the final frame by default).
    Frame(FrameArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct MorphArgs {
    /// Source image (its pixels move).
    #[arg(long)]
    source: PathBuf,

    /// Target image (its pixel coordinates are the destinations).
    #[arg(long)]
    target: PathBuf,

    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Fraction of the remaining distance covered per frame.
    #[arg(long)]
    damping: Option<f64>,

    /// Distance at which a pixel counts as arrived.
    #[arg(long)]
    threshold: Option<f64>,

    /// Resampling filter used to stretch inputs onto the canvas.
    #[arg(long, value_enum)]
    filter: Option<FilterChoice>,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    morph: MorphArgs,

    /// Output directory for frame_00000.png, frame_00001.png, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    morph: MorphArgs,

    /// Frame index (0-based). Defaults to the last frame.
    #[arg(long)]
    index: Option<u64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    morph: MorphArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Output frame rate.
    #[arg(long)]
    fps: Option<u32>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterChoice> for ResizeFilter {
    fn from(f: FilterChoice) -> Self {
        match f {
            FilterChoice::Nearest => ResizeFilter::Nearest,
            FilterChoice::Triangle => ResizeFilter::Triangle,
            FilterChoice::CatmullRom => ResizeFilter::CatmullRom,
            FilterChoice::Gaussian => ResizeFilter::Gaussian,
            FilterChoice::Lanczos3 => ResizeFilter::Lanczos3,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    };

    // Missing or unreadable images get the single user-facing message.
    if let Err(err) = &result
        && let Some(morph_err) = err.downcast_ref::<MorphError>()
        && morph_err.is_user_facing()
    {
        tracing::debug!(error = %morph_err, "morph failed");
        eprintln!("{}", morph_err.user_message());
        std::process::exit(2);
    }
    result
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_config(args: &MorphArgs) -> anyhow::Result<MorphConfig> {
    let mut cfg = match &args.config {
        Some(path) => MorphConfig::from_json_path(path)?,
        None => MorphConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.canvas.width = w;
    }
    if let Some(h) = args.height {
        cfg.canvas.height = h;
    }
    if let Some(d) = args.damping {
        cfg.params.damping = d;
    }
    if let Some(t) = args.threshold {
        cfg.params.threshold = t;
    }
    if let Some(f) = args.filter {
        cfg.resize_filter = f.into();
    }
    if args.max_frames.is_some() {
        cfg.max_frames = args.max_frames;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run_morph(
    args: &MorphArgs,
    cfg: MorphConfig,
    sink: &mut dyn FrameSink,
) -> anyhow::Result<RunStats> {
    let mut session = MorphSession::new(cfg)?;

    pollster::block_on(async {
        session
            .select_source(ImageSource::path(&args.source))
            .await?;
        session
            .select_target(ImageSource::path(&args.target))
            .await?;
        session.start_morph().await
    })?;

    let stats = session.run(&mut ImmediateScheduler, sink)?;
    Ok(stats)
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.morph)?;
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = run_morph(&args.morph, cfg, &mut sink)?;

    eprintln!(
        "wrote {} frames to {}{}",
        stats.frames,
        args.out_dir.display(),
        if stats.converged { "" } else { " (stopped before convergence)" }
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.morph)?;
    let background = cfg.background;
    let mut sink = match args.index {
        Some(i) => CaptureFrameSink::at(FrameIndex(i)),
        None => CaptureFrameSink::last(),
    };
    let stats = run_morph(&args.morph, cfg, &mut sink)?;

    let (idx, frame) = sink.into_frame().with_context(|| {
        format!(
            "frame {} was not rendered (the morph produced {} frames)",
            args.index.unwrap_or_default(),
            stats.frames
        )
    })?;
    pixmorph::write_png(&args.out, &frame, background)?;

    eprintln!(
        "wrote frame {} ({:016x}) to {}",
        idx.0,
        frame.digest(),
        args.out.display()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = build_config(&args.morph)?;
    if let Some(fps) = args.fps {
        cfg.fps = pixmorph::Fps::new(fps, 1)?;
    }
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&args.out));
    let stats = run_morph(&args.morph, cfg, &mut sink)?;

    eprintln!("wrote {} ({} frames)", args.out.display(), stats.frames);
    Ok(())
}
