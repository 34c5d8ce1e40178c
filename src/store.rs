use crate::errors::Result;
use crate::models::{DayRecord, JournalData};
use crate::storage::StoragePort;
use tracing::info;

/// Per-day gesture marks, written through to storage on every change.
///
/// A day whose last gesture is toggled off is removed, so the store only
/// creates non-empty records. Empty records coming from older files are kept
/// as loaded and count as unmarked.
pub struct DayRecordStore {
    data: JournalData,
    storage: Box<dyn StoragePort>,
}

impl DayRecordStore {
    pub fn load(storage: Box<dyn StoragePort>) -> Self {
        let data = storage.load().unwrap_or_default();
        info!("loaded journal with {} recorded days", data.days.len());
        Self { data, storage }
    }

    pub fn data(&self) -> &JournalData {
        &self.data
    }

    pub fn get(&self, key: &str) -> Option<&DayRecord> {
        self.data.days.get(key)
    }

    pub fn gestures(&self, key: &str) -> &[String] {
        self.get(key)
            .map(|record| record.gestures.as_slice())
            .unwrap_or_default()
    }

    /// Flips `gesture_id` for the day and returns whether it is now marked.
    pub fn toggle(&mut self, key: &str, gesture_id: &str) -> Result<bool> {
        let record = self.data.days.entry(key.to_string()).or_default();
        let now_set = if record.contains(gesture_id) {
            record.gestures.retain(|id| id != gesture_id);
            false
        } else {
            record.gestures.push(gesture_id.to_string());
            true
        };
        if !record.is_marked() {
            self.data.days.remove(key);
        }

        self.storage.save(&self.data)?;
        Ok(now_set)
    }

    /// Returns whether the day had a record.
    pub fn clear_day(&mut self, key: &str) -> Result<bool> {
        if self.data.days.remove(key).is_none() {
            return Ok(false);
        }
        self.storage.save(&self.data)?;
        Ok(true)
    }

    pub fn clear_all(&mut self) -> Result<()> {
        self.data.days.clear();
        self.storage.clear()
    }
}
