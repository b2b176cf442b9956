//! Storage backends for the settings blob.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;

/// Host storage for the serialized settings.
pub trait SettingsStore {
    /// The stored blob, or `None` if nothing was ever saved.
    fn load_data(&self) -> Result<Option<String>, SettingsError>;

    fn save_data(&mut self, data: &str) -> Result<(), SettingsError>;
}

/// Settings kept in a TOML file on disk.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for FileStore {
    fn load_data(&self) -> Result<Option<String>, SettingsError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn save_data(&mut self, data: &str) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|err| self.io_error(err))?;
        }
        fs::write(&self.path, data).map_err(|err| self.io_error(err))
    }
}

/// In-memory store, for hosts that persist the blob themselves.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    data: Option<String>,
}

impl MemoryStore {
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl SettingsStore for MemoryStore {
    fn load_data(&self) -> Result<Option<String>, SettingsError> {
        Ok(self.data.clone())
    }

    fn save_data(&mut self, data: &str) -> Result<(), SettingsError> {
        self.data = Some(data.to_string());
        Ok(())
    }
}
