use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use dotfield::{ClockMode, DotField, FieldConfig, Point, Rgba8, Viewport, render_frame_rgba};

#[derive(Parser, Debug)]
#[command(name = "dotfield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG frame sequence.
    Sequence(SequenceArgs),
    /// Live interactive preview in the terminal (mouse steers the field).
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Field config JSON; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logical viewport width.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Logical viewport height.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Device pixel ratio (capped at 2).
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Override the dot color (hex, e.g. '#22d3ee').
    #[arg(long)]
    dot_color: Option<String>,

    /// Override the background color (hex).
    #[arg(long)]
    bg_color: Option<String>,

    /// Override the grid density.
    #[arg(long)]
    grid_size: Option<u32>,

    /// Advance the clock by real frame deltas instead of a fixed step.
    #[arg(long)]
    delta_time: bool,

    /// Pin the pointer to 'x,y' in device pixels.
    #[arg(long)]
    cursor: Option<String>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frames to advance before capturing (lets the cursor easing settle).
    #[arg(long, default_value_t = 1)]
    warmup: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to render.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Output directory for 'prefix_00000.png' files.
    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long, default_value = "dotfield")]
    prefix: String,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Target frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn load_config(scene: &SceneArgs) -> anyhow::Result<FieldConfig> {
    let mut cfg = match &scene.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("open config '{}'", path.display()))?;
            FieldConfig::from_json(&json)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => FieldConfig::default(),
    };

    if let Some(hex) = &scene.dot_color {
        cfg.dot_color = Rgba8::parse_hex_or(hex, cfg.dot_color);
    }
    if let Some(hex) = &scene.bg_color {
        cfg.bg_color = Rgba8::parse_hex_or(hex, cfg.bg_color);
    }
    if let Some(g) = scene.grid_size {
        cfg.grid_size = g;
    }
    if scene.delta_time {
        cfg.clock = ClockMode::DeltaTime;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn build_field(scene: &SceneArgs) -> anyhow::Result<DotField> {
    let cfg = load_config(scene)?;
    let viewport = Viewport::from_logical(scene.width, scene.height, scene.dpr);
    let mut field = DotField::new(cfg, viewport)?;
    if let Some(spec) = &scene.cursor {
        field.set_pointer(parse_cursor(spec)?);
    }
    Ok(field)
}

fn parse_cursor(spec: &str) -> anyhow::Result<Point> {
    let (x, y) = spec
        .split_once(',')
        .with_context(|| format!("cursor '{spec}' must be 'x,y'"))?;
    Ok(Point::new(
        x.trim().parse::<f64>().context("cursor x")?,
        y.trim().parse::<f64>().context("cursor y")?,
    ))
}

fn save_png(frame: &dotfield::FrameRgba, path: &Path) -> anyhow::Result<()> {
    if frame.is_empty() {
        anyhow::bail!("viewport is empty, nothing to write");
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut field = build_field(&args.scene)?;
    let dt = 1.0 / 60.0;
    for _ in 0..args.warmup.saturating_sub(1) {
        field.advance(dt);
    }
    let frame = render_frame_rgba(&mut field, dt)?;
    save_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be > 0");
    }
    let mut field = build_field(&args.scene)?;
    let dt = 1.0 / 60.0;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for i in 0..args.frames {
        let frame = render_frame_rgba(&mut field, dt)?;
        let path = args.out_dir.join(format!("{}_{i:05}.png", args.prefix));
        save_png(&frame, &path)?;
    }
    eprintln!(
        "wrote {} frames to {}",
        args.frames,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    dotfield::preview::run(cfg, args.fps)?;
    Ok(())
}
