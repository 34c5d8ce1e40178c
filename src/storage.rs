use crate::errors::Result;
use crate::models::JournalData;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};
use tracing::{error, info};

pub const STORAGE_KEY: &str = "gesture_journal_v1";

/// Durable home of the journal. Reads never fail: anything unreadable is
/// reported as absent.
pub trait StoragePort: Send {
    fn load(&self) -> Option<JournalData>;
    fn save(&self, data: &JournalData) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data").join(format!("{STORAGE_KEY}.json"))
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoragePort for FileStorage {
    fn load(&self) -> Option<JournalData> {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(data) => Some(data),
                Err(err) => {
                    error!("failed to parse journal file {}: {err}", self.path.display());
                    None
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read journal file {}: {err}", self.path.display());
                None
            }
        }
    }

    fn save(&self, data: &JournalData) -> Result<()> {
        let payload = serde_json::to_vec_pretty(data)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("removed journal file {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Keeps the serialized journal in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self) -> Option<JournalData> {
        let raw = self.raw()?;
        match serde_json::from_str(&raw) {
            Ok(data) => Some(data),
            Err(err) => {
                error!("failed to parse stored journal: {err}");
                None
            }
        }
    }

    fn save(&self, data: &JournalData) -> Result<()> {
        let raw = serde_json::to_string(data)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
