//! Pongout entry point
//!
//! Parses the command line, sets up logging and runs the game loop.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use pongout::game::Game;
use pongout::{Settings, Variant};

#[derive(Debug, Parser)]
#[command(name = "pongout", version, about = "Terminal Pong/Breakout with multi-ball")]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Gameplay preset: classic, obstacle or arcade
    #[arg(short, long)]
    variant: Option<String>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Disable sound effects
    #[arg(short, long)]
    mute: bool,

    /// Directory holding audio.wav, missed.wav and newball.wav
    #[arg(long)]
    sound_dir: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(name) = &args.variant {
        settings.variant =
            Variant::from_str(name).ok_or_else(|| anyhow!("unknown variant '{}'", name))?;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(dir) = &args.sound_dir {
        settings.sound_dir = dir.clone();
    }
    settings.mute |= args.mute;

    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;
    log::info!("Pongout starting...");

    let settings = resolve_settings(&args)?;
    log::debug!("Settings: {:?}", settings);

    let score = {
        let mut game = Game::new(&settings)?;
        game.run()?
    };

    // Terminal is restored once the game is dropped
    println!("Final score: {}", score);
    Ok(())
}
