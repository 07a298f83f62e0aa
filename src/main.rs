use anyhow::Context;
use clap::{ArgAction, Parser};
use mirramaze::config::Config;
use mirramaze::export::{self, ExportError};
use mirramaze::input::KaleidoscopeState;
use mirramaze::script::StrokeScript;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mirramaze")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MIRRAMAZE_GIT_HASH"), ")"),
    about = "Kaleidoscope pattern renderer"
)]
struct Cli {
    /// Stroke script (JSON) to replay onto a blank canvas
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Directory to write mirramaze-kaleidoscope.png into
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/mirramaze/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of rotational copies (3-24)
    #[arg(long, value_name = "N")]
    segments: Option<u32>,

    /// Color scheme (rainbow, ocean, fire, forest, monochrome, neon, pastel, sunset, cosmic, autumn, winter)
    #[arg(long, value_name = "NAME")]
    scheme: Option<String>,

    /// Effect (normal, glow, neon, liquid, crystal)
    #[arg(long, value_name = "NAME")]
    effect: Option<String>,

    /// Brush radius in pixels (1-20)
    #[arg(long, value_name = "PX")]
    brush_size: Option<f64>,

    /// Brush opacity in percent (10-100)
    #[arg(long, value_name = "PERCENT")]
    opacity: Option<f64>,

    /// Disable reflection through the center
    #[arg(long, action = ArgAction::SetTrue)]
    no_mirror: bool,

    /// Rotate dabs by the animation angle advanced with script ticks
    #[arg(long, action = ArgAction::SetTrue)]
    auto_rotate: bool,

    /// Auto-rotate speed multiplier (0.1-5.0)
    #[arg(long, value_name = "SPEED")]
    rotate_speed: Option<f64>,

    /// Square canvas size in pixels (16-4096)
    #[arg(long, value_name = "PX")]
    size: Option<i32>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(segments) = self.segments {
            config.pattern.segments = segments;
        }
        if self.no_mirror {
            config.pattern.mirror_mode = false;
        }
        if let Some(scheme) = &self.scheme {
            config.paint.color_scheme = scheme.clone();
        }
        if let Some(effect) = &self.effect {
            config.paint.effect_mode = effect.clone();
        }
        if let Some(size) = self.brush_size {
            config.paint.brush_size = size;
        }
        if let Some(opacity) = self.opacity {
            config.paint.opacity = opacity;
        }
        if self.auto_rotate {
            config.animation.auto_rotate = true;
        }
        if let Some(speed) = self.rotate_speed {
            config.animation.rotate_speed = speed;
        }
        if let Some(size) = self.size {
            config.canvas.width = size;
            config.canvas.height = size;
        }
        config.validate_and_clamp();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = &cli.script else {
        // No script: show usage
        println!("mirramaze: Kaleidoscope pattern renderer");
        println!();
        println!("Usage:");
        println!("  mirramaze --script strokes.json            Replay strokes and save a PNG");
        println!("  mirramaze --script strokes.json -o out/    Choose the output directory");
        println!("  mirramaze --help                           Show all options");
        println!();
        println!("Settings are read from ~/.config/mirramaze/config.toml;");
        println!("command-line options override the file.");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);

    let script = StrokeScript::load(script_path)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;

    let mut state = KaleidoscopeState::from_config(&config);
    let summary = script.replay(&mut state);
    log::debug!("Replay summary: {:?}", summary);

    let output_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| export::expand_tilde(&config.export.directory));

    match export::save_png(
        state.surface(),
        &output_dir,
        config.export.background.color(),
    ) {
        Ok(path) => println!("Saved {}", path.display()),
        Err(ExportError::EmptySurface) => {
            log::warn!("Canvas is empty; nothing exported");
        }
        Err(err) => return Err(err).context("Failed to export kaleidoscope"),
    }

    Ok(())
}
