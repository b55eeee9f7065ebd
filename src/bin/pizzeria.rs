use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pizzeria::{PageConfig, PageEvent, PageView, RasterOptions, ScrollScript};
use tracing_subscriber::EnvFilter;

const SETTLE_FPS: f64 = 60.0;
const MAX_SETTLE_SECS: f64 = 3600.0;

#[derive(Parser, Debug)]
#[command(name = "pizzeria", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the viewport at a scroll position as a PNG.
    Frame(FrameArgs),
    /// Write the viewport at a scroll position as an SVG document.
    Svg(FrameArgs),
    /// Replay a scripted session and write every frame as JSON.
    Simulate(SimulateArgs),
    /// Print the menu.
    Menu,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Document scroll position in px.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Page configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pointer position in client px, as `X,Y`.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<(f64, f64)>,

    /// Seconds of animation to run after the events are applied.
    #[arg(long, default_value_t = 1.0)]
    time: f64,

    /// Viewport width override.
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height override.
    #[arg(long)]
    height: Option<f64>,

    /// Extra font directory for SVG text.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Session script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Page configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Menu => cmd_menu(),
    }
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((x, y))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PageConfig> {
    match path {
        Some(p) => PageConfig::from_json_file(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(PageConfig::default()),
    }
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Mount a page, apply the requested state, and let animations run for `args.time` seconds.
fn snapshot_svg(args: &FrameArgs) -> anyhow::Result<String> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(w) = args.width {
        config.viewport.width = w;
    }
    if let Some(h) = args.height {
        config.viewport.height = h;
    }
    if !(args.time.is_finite() && (0.0..=MAX_SETTLE_SECS).contains(&args.time)) {
        anyhow::bail!("--time must be within [0, {MAX_SETTLE_SECS}]");
    }

    let mut page = PageView::new(config)?;
    page.mount();
    page.handle(PageEvent::Scroll { y: args.scroll });
    if let Some((x, y)) = args.pointer {
        page.handle(PageEvent::PointerMove { x, y });
    }
    let steps = (args.time * SETTLE_FPS).round() as u64;
    for _ in 0..steps {
        page.tick(1.0 / SETTLE_FPS);
    }
    tracing::info!(
        scroll_y = page.scroll_y(),
        active = %page.active_section(),
        progress = page.global_progress().get(),
        "snapshot"
    );
    Ok(pizzeria::render_svg(page.layout(), &page.frame())?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let svg = snapshot_svg(&args)?;
    create_parent_dir(&args.out)?;
    let opts = RasterOptions {
        fonts_dir: args.fonts_dir.as_deref(),
        skip_system_fonts: false,
    };
    pizzeria::render_png(&svg, &opts, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_svg(args: FrameArgs) -> anyhow::Result<()> {
    let svg = snapshot_svg(&args)?;
    create_parent_dir(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let script = ScrollScript::from_json_file(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;
    let frames = pizzeria::run_script(config, &script)?;

    create_parent_dir(&args.out)?;
    let f = File::create(&args.out)
        .with_context(|| format!("create '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), &frames)
        .with_context(|| "write frames JSON")?;
    eprintln!("wrote {} ({} frames)", args.out.display(), frames.len());
    Ok(())
}

fn cmd_menu() -> anyhow::Result<()> {
    use pizzeria::content::{MENU, MENU_TITLE};

    println!("{MENU_TITLE}");
    for item in &MENU {
        println!("  {:<28} {:>7}", item.name, item.price);
        println!("    {}", item.desc);
        if !item.tags.is_empty() {
            println!("    [{}]", item.tags.join(", "));
        }
    }
    Ok(())
}
