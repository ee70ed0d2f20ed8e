use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use engine::app::{AppConfig, run_app};
use pushfight::session::Session;
use pushfight::settings::{MAX_CELL_SIZE, MIN_CELL_SIZE, SettingsStore};
use pushfight::universe::{SandboxBoard, Universe};

#[derive(Debug, Parser)]
#[command(name = "pushfight")]
#[command(about = "Drag pieces around a Pushfight board")]
struct Cli {
    /// Square size in pixels (overrides settings).
    #[arg(long)]
    cell_size: Option<u32>,
    /// Board file in two-character notation; defaults to the opening position.
    #[arg(long)]
    board: Option<PathBuf>,
    /// Settings file; defaults to $PUSHFIGHT_SETTINGS_PATH or the user config dir.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Write the effective settings back before starting.
    #[arg(long, default_value_t = false)]
    save_settings: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = match cli.settings {
        Some(path) => SettingsStore::at(path),
        None => SettingsStore::from_env(),
    };
    let mut settings = store.load();
    if let Some(cell_size) = cli.cell_size {
        settings.board.cell_size = cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
    }
    if cli.save_settings {
        store
            .save(&settings)
            .with_context(|| format!("saving settings to {}", store.path().display()))?;
    }

    let board = match &cli.board {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading board {}", path.display()))?;
            SandboxBoard::from_notation(&text)
                .with_context(|| format!("parsing board {}", path.display()))?
        }
        None => SandboxBoard::starting_layout(),
    };
    log::debug!("starting board:\n{}", board.snapshot()?);

    let session = Session::new(board, &settings);
    let config = AppConfig {
        title: "Pushfight".to_string(),
        surface_size: session.geometry().surface_size(),
        vsync: Some(settings.video.vsync),
    };
    run_app(config, session).map_err(|err| anyhow!("window host failed: {err}"))?;
    Ok(())
}
