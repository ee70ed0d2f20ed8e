use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::appearance::Palette;

pub const MIN_CELL_SIZE: u32 = 4;
pub const MAX_CELL_SIZE: u32 = 256;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSettings {
    /// Side of one square in surface pixels, excluding grid lines.
    pub cell_size: u32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self { cell_size: 100 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputSettings {
    pub cancel_drag_on_focus_loss: bool,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            cancel_drag_on_focus_loss: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSettings {
    pub vsync: bool,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self { vsync: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub board: BoardSettings,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub video: VideoSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            board: BoardSettings::default(),
            palette: Palette::default(),
            input: InputSettings::default(),
            video: VideoSettings::default(),
        }
    }
}

impl Settings {
    pub fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.board.cell_size = self.board.cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        self
    }
}

fn default_version() -> u32 {
    1
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("PUSHFIGHT_SETTINGS_PATH") {
            return Self::at(explicit);
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("pushfight");
        path.push("settings.json");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing files give defaults quietly; unreadable or malformed ones give defaults with a
    /// warning.
    pub fn load(&self) -> Settings {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Settings::default(),
            Err(err) => {
                log::warn!("cannot read {}: {err}; using defaults", self.path.display());
                return Settings::default();
            }
        };
        match serde_json::from_slice::<Settings>(&bytes) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                log::warn!("ignoring malformed {}: {err}", self.path.display());
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}
