//! JSON file store with atomic replace.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, info};
use tutor_core::{Error, Result, StateStore, StorageErrorCode, TutorState};

use crate::config::StorageConfig;

/// Keeps the whole [`TutorState`] in one JSON file.
///
/// Saves go to a sibling temp file that is synced and then renamed over the
/// target, so a crash leaves either the old record or the new one.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(config: &StorageConfig) -> Self {
        info!(path = %config.path.display(), pretty = config.pretty, "Using JSON state file");
        Self {
            path: config.path.clone(),
            pretty: config.pretty,
            write_lock: Mutex::new(()),
        }
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(&StorageConfig {
            path: path.into(),
            ..Default::default()
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and confirms a file can be written there.
    pub fn check_writable(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        let probe = self.sibling(".probe").map_err(save_error)?;
        ensure_parent(&self.path).map_err(save_error)?;
        File::create(&probe).map_err(save_error)?;
        fs::remove_file(&probe).map_err(save_error)?;
        Ok(())
    }

    fn sibling(&self, suffix: &str) -> io::Result<PathBuf> {
        let file_name = self.path.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "state path has no file name")
        })?;
        let name = format!(".{}{}", file_name.to_string_lossy(), suffix);
        Ok(match self.path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        })
    }

    fn encode(&self, state: &TutorState) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(state)?
        } else {
            serde_json::to_vec(state)?
        };
        Ok(bytes)
    }

    fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        ensure_parent(&self.path)?;
        let tmp_path = self.sibling(".tmp")?;

        let mut tmp = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;
        tmp.write_all(bytes)?;
        tmp.sync_all()?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path)
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<TutorState>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No state file yet");
                return Ok(None);
            }
            Err(e) => {
                return Err(Error::storage(
                    StorageErrorCode::LoadFailed,
                    format!("Failed to read {}: {}", self.path.display(), e),
                ))
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content).map(Some).map_err(|e| {
            Error::storage(
                StorageErrorCode::LoadFailed,
                format!("Malformed state file {}: {}", self.path.display(), e),
            )
        })
    }

    fn save(&self, state: &TutorState) -> Result<()> {
        let bytes = self.encode(state)?;
        let _guard = self.write_lock.lock();
        self.write_atomic(&bytes).map_err(save_error)?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "State saved");
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn save_error(e: io::Error) -> Error {
    Error::storage(StorageErrorCode::SaveFailed, e.to_string())
}
