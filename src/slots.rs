//! Directory-backed save slots.
//!
//! `SaveSlots` binds the three codecs to fixed file names inside one save
//! directory. It holds no state besides its configuration; every call goes
//! straight to the file.

use crate::error::{Error, Result};
use questsave_codec::{csv_triple, line_record, single_string};
use questsave_core::{PlayerRecord, StatusTriple};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default save directory.
pub const DEFAULT_DIR: &str = "data";
/// Default file name for the line-record slot.
pub const DEFAULT_PLAYER_FILE: &str = "save_data.txt";
/// Default file name for the CSV status slot.
pub const DEFAULT_STATUS_FILE: &str = "status.txt";
/// Default file name for the name slot.
pub const DEFAULT_NAME_FILE: &str = "player_name.txt";

/// One of the files managed by [`SaveSlots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Full player record (line-record format)
    Player,
    /// HP/MP/level triple (CSV format)
    Status,
    /// Player name (single-string format)
    Name,
}

/// Save slot configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveConfig {
    /// Directory holding the save files
    pub dir: PathBuf,
    /// File name for [`Slot::Player`]
    pub player_file: String,
    /// File name for [`Slot::Status`]
    pub status_file: String,
    /// File name for [`Slot::Name`]
    pub name_file: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        SaveConfig {
            dir: PathBuf::from(DEFAULT_DIR),
            player_file: DEFAULT_PLAYER_FILE.to_string(),
            status_file: DEFAULT_STATUS_FILE.to_string(),
            name_file: DEFAULT_NAME_FILE.to_string(),
        }
    }
}

/// Save files for one player, kept in one directory.
///
/// # Example
///
/// ```no_run
/// use questsave::prelude::*;
///
/// let slots = SaveSlots::open("data")?;
///
/// let mut hero = PlayerRecord::new("勇者", 100, 5);
/// hero.set_hp(80);
/// slots.save_player(&hero)?;
///
/// let loaded = slots.load_player()?;
/// assert_eq!(loaded, Some(hero));
/// # Ok::<(), questsave::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SaveSlots {
    config: SaveConfig,
}

impl SaveSlots {
    /// Open save slots in `dir` with the default file names.
    ///
    /// Creates the directory if it does not exist.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Self::builder().dir(dir).open()
    }

    /// Create a builder for slot configuration.
    pub fn builder() -> SaveSlotsBuilder {
        SaveSlotsBuilder::new()
    }

    /// Get the save directory.
    pub fn dir(&self) -> &Path {
        &self.config.dir
    }

    /// Get the active configuration.
    pub fn config(&self) -> &SaveConfig {
        &self.config
    }

    /// Resolve the file path of `slot`.
    pub fn path_of(&self, slot: Slot) -> PathBuf {
        let name = match slot {
            Slot::Player => &self.config.player_file,
            Slot::Status => &self.config.status_file,
            Slot::Name => &self.config.name_file,
        };
        self.config.dir.join(name)
    }

    /// Check if `slot` has a file on disk.
    pub fn exists(&self, slot: Slot) -> bool {
        self.path_of(slot).is_file()
    }

    /// Save the full player record.
    pub fn save_player(&self, record: &PlayerRecord) -> Result<()> {
        line_record::encode(record, self.path_of(Slot::Player)).map_err(Error::from)
    }

    /// Load the full player record.
    ///
    /// `Ok(None)` if the file cannot be read. A malformed hp, max hp, or
    /// level is returned as an error.
    pub fn load_player(&self) -> Result<Option<PlayerRecord>> {
        line_record::decode(self.path_of(Slot::Player)).map_err(Error::from)
    }

    /// Save the HP/MP/level triple.
    pub fn save_status(&self, hp: i32, mp: i32, level: i32) -> Result<()> {
        csv_triple::encode(hp, mp, level, self.path_of(Slot::Status)).map_err(Error::from)
    }

    /// Load the HP/MP/level triple, or `None` on any failure.
    pub fn load_status(&self) -> Option<StatusTriple> {
        csv_triple::decode(self.path_of(Slot::Status))
    }

    /// Save the player name.
    pub fn save_name(&self, name: &str) -> Result<()> {
        single_string::encode(name, self.path_of(Slot::Name)).map_err(Error::from)
    }

    /// Load the player name, or `None` on any failure.
    pub fn load_name(&self) -> Option<String> {
        single_string::decode(self.path_of(Slot::Name))
    }
}

/// Builder for [`SaveSlots`].
///
/// # Example
///
/// ```no_run
/// use questsave::SaveSlots;
///
/// let slots = SaveSlots::builder()
///     .dir("saves/slot1")
///     .player_file("hero.txt")
///     .open()?;
/// # Ok::<(), questsave::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SaveSlotsBuilder {
    config: SaveConfig,
}

impl SaveSlotsBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: SaveConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the save directory.
    pub fn dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the file name of the player record slot.
    pub fn player_file(mut self, name: impl Into<String>) -> Self {
        self.config.player_file = name.into();
        self
    }

    /// Set the file name of the status slot.
    pub fn status_file(mut self, name: impl Into<String>) -> Self {
        self.config.status_file = name.into();
        self
    }

    /// Set the file name of the name slot.
    pub fn name_file(mut self, name: impl Into<String>) -> Self {
        self.config.name_file = name.into();
        self
    }

    /// Create the save directory (if needed) and open the slots.
    pub fn open(self) -> Result<SaveSlots> {
        let dir = &self.config.dir;
        std::fs::create_dir_all(dir).map_err(|source| Error::Directory {
            path: dir.clone(),
            source,
        })?;
        info!("セーブディレクトリ準備完了: {}", dir.display());
        Ok(SaveSlots {
            config: self.config,
        })
    }
}
