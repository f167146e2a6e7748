//! Save-file I/O: a single JSON snapshot of the game state in a caller
//! supplied directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::GameState;

pub const SAVE_FILE_NAME: &str = "market_maker_save.json";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("save file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub struct SaveManager {
    path: PathBuf,
}

impl SaveManager {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SAVE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, state: &GameState) -> Result<(), SaveError> {
        let json = serde_json::to_string(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// `Ok(None)` when no save file exists; a file that fails to parse is
    /// reported as `SaveError::Corrupt`.
    pub fn load(&self) -> Result<Option<GameState>, SaveError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
