use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::Parser;

use histoscope::cli::{Args, Command, ConfigAction, Effect};
use histoscope::config::{self, Config};
use histoscope::frame::{ColorEffect, SyntheticSource};
use histoscope::overlay::{ChartLayout, Renderer, TextRenderer};
use histoscope::pipeline::PipelineSession;

/// Global flag for handling Ctrl+C across the application
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Set up the Ctrl+C handler.
///
/// This should be called once at program startup.
fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        CTRLC_RECEIVED.store(true, Ordering::SeqCst);
        eprintln!("\nReceived Ctrl+C, shutting down...");
    })
}

fn load_config(path: Option<&PathBuf>) -> Config {
    // If --config is specified, require the file to exist
    // Otherwise, fall back to defaults if the default config is unreadable
    if let Some(path) = path {
        if !path.exists() {
            eprintln!("Error: config file '{}' not found", path.display());
            std::process::exit(1);
        }
        match Config::load(Some(path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::load(None) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Config::default()
            }
        }
    }
}

fn run_config_action(action: ConfigAction, path: Option<&PathBuf>) -> Result<(), String> {
    match action {
        ConfigAction::Show => {
            let cfg = load_config(path);
            println!("config file: {}", config::default_path().display());
            println!("{:#?}", cfg);
            Ok(())
        }
        ConfigAction::Init => {
            let target = path.cloned().unwrap_or_else(config::default_path);
            if target.exists() {
                return Err(format!("'{}' already exists", target.display()));
            }
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
            }
            std::fs::write(&target, config::DEFAULT_CONFIG_TOML).map_err(|e| e.to_string())?;
            println!("Wrote {}", target.display());
            Ok(())
        }
    }
}

fn run_overlay(args: Args) -> Result<(), String> {
    let cfg = load_config(args.config.as_ref());

    let width = args.width.unwrap_or(cfg.source.width);
    let height = args.height.unwrap_or(cfg.source.height);
    let fps = args.fps.unwrap_or(cfg.source.fps).max(1);
    if width % 2 != 0 || height % 2 != 0 {
        return Err(format!(
            "frame dimensions must be even for 4:2:0 frames, got {}x{}",
            width, height
        ));
    }

    let effect: ColorEffect = match args.effect {
        Some(e) => e.into(),
        None => cfg
            .source
            .effect
            .as_deref()
            .and_then(Effect::from_config_str)
            .map(ColorEffect::from)
            .unwrap_or_default(),
    };

    setup_ctrlc_handler().map_err(|e| e.to_string())?;

    let source = SyntheticSource::new(width, height);
    let mut session =
        PipelineSession::start(source, effect, fps).map_err(|e| e.to_string())?;
    let overlay = session.overlay();

    let layout = ChartLayout {
        columns: cfg.overlay.columns,
        rows: cfg.overlay.rows,
    };
    let stdout = std::io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock(), layout);

    // Render loop: pull the latest snapshot on our own schedule; the
    // session overwrites unrendered frames rather than queueing them
    let mut last_sequence = 0;
    while !CTRLC_RECEIVED.load(Ordering::SeqCst) {
        if let Some(snapshot) = overlay.latest() {
            if snapshot.sequence != last_sequence {
                last_sequence = snapshot.sequence;
                if cfg.overlay.readout {
                    renderer.render(&snapshot).map_err(|e| e.to_string())?;
                }
            }
            if args.frames.is_some_and(|n| snapshot.sequence >= n) {
                break;
            }
        }
        if !session.is_running() {
            break;
        }
        std::thread::sleep(Duration::from_millis(1000 / fps.max(1) as u64));
    }

    session.stop();
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = Args::parse();

    let result = match args.command.take() {
        Some(Command::Config { action }) => run_config_action(action, args.config.as_ref()),
        None => run_overlay(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
