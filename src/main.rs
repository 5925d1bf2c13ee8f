//! Voxel-space terrain flyer (default binary).
//!
//! Loads a height/color map pair (or generates one), then flies a camera over
//! it in the terminal until Esc, Ctrl-C or a mouse click.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use voxel_space::assets::{
    map_paths, GeneratedLoader, MapTemplate, PngLoader, ResourceLoader, DEFAULT_COLOR_TEMPLATE,
    DEFAULT_HEIGHT_TEMPLATE,
};
use voxel_space::config::Settings;
use voxel_space::core::HeightfieldStore;
use voxel_space::engine::Compositor;
use voxel_space::input::TerminalInput;
use voxel_space::term::TerminalDisplay;
use voxel_space::types::{DEFAULT_MAP_SIDE, LAYER_HEIGHT, LAYER_WIDTH, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "voxel-space", version, about = "Voxel-space terrain flyer for the terminal")]
struct Cli {
    /// Directory holding the map files
    #[arg(long, default_value = "maps")]
    maps_dir: PathBuf,

    /// Map number substituted into the file name templates
    #[arg(long, default_value_t = 0)]
    map_index: u32,

    /// Height map file name template
    #[arg(long, default_value = DEFAULT_HEIGHT_TEMPLATE)]
    height_template: String,

    /// Color map file name template
    #[arg(long, default_value = DEFAULT_COLOR_TEMPLATE)]
    color_template: String,

    /// Skip map files and generate terrain
    #[arg(long)]
    generate: bool,

    /// Seed for generated terrain
    #[arg(long, default_value_t = 1)]
    seed: i32,

    /// Side of generated terrain (power of two)
    #[arg(long, default_value_t = DEFAULT_MAP_SIDE)]
    size: usize,

    /// Render layer width in pixels
    #[arg(long, default_value_t = LAYER_WIDTH)]
    width: u16,

    /// Render layer height in pixels
    #[arg(long, default_value_t = LAYER_HEIGHT)]
    height: u16,

    /// Frame budget in milliseconds
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,

    /// Start with the debug overlay shown
    #[arg(long)]
    debug: bool,

    /// Start with the night palette
    #[arg(long)]
    night: bool,

    /// JSON file with tuning and camera start values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn init_logging(cli: &Cli) -> Result<()> {
    // The terminal belongs to the renderer, so logs only go to a file.
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_ansi(false)
        .with_writer(file)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default tracing subscriber")?;
    Ok(())
}

fn load_store(cli: &Cli) -> Result<HeightfieldStore> {
    let generated = GeneratedLoader::new(cli.seed, cli.size);
    if cli.generate {
        return Ok(generated.load_store()?);
    }

    let (height_path, color_path) = map_paths(
        &cli.maps_dir,
        &MapTemplate::new(&cli.height_template),
        &MapTemplate::new(&cli.color_template),
        cli.map_index,
    );
    if !height_path.exists() && !color_path.exists() {
        warn!(
            height = %height_path.display(),
            color = %color_path.display(),
            "map files not found, generating terrain"
        );
        return Ok(generated.load_store()?);
    }

    let store = PngLoader::new(height_path, color_path)
        .load_store()
        .with_context(|| format!("loading map {}", cli.map_index))?;
    Ok(store)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    // Resource failures are fatal and reported before the terminal is touched.
    let store = load_store(&cli)?;
    info!(side = store.side(), "map ready");

    let mut display = TerminalDisplay::new();
    display.enter()?;
    let mut input = TerminalInput::new();

    let result = run(&cli, &settings, store, &mut display, &mut input);

    // Always try to restore terminal state.
    let _ = input.exit();
    let _ = display.exit();
    result
}

fn run(
    cli: &Cli,
    settings: &Settings,
    store: HeightfieldStore,
    display: &mut TerminalDisplay,
    input: &mut TerminalInput,
) -> Result<()> {
    input.enter()?;
    if !input.has_release_events() {
        info!("terminal does not report key releases, using auto-release");
    }

    let mut compositor = Compositor::new(store, &mut *display, cli.width, cli.height)
        .with_camera(settings.camera_state())
        .with_tuning(settings.render_tuning())
        .with_debug(cli.debug)
        .with_night_mode(cli.night);

    compositor.run(input, Duration::from_millis(u64::from(cli.tick_ms.max(1))))
}
