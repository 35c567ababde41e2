use crate::domain::model::{InventoryRecord, RecordId};
use crate::domain::ports::RecordStore;
use crate::utils::error::{ImportError, Result};
use async_trait::async_trait;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// File-backed record store: one JSON line per record, appended in order.
/// Record ids are 1-based line numbers, so they are stable across restarts.
#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn count_existing(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().filter(|l| !l.trim().is_empty()).count())
    }

    /// Reads all persisted records back, in creation order.
    pub fn load_all(&self) -> Result<Vec<InventoryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let mut records = Vec::new();
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            let record = serde_json::from_str(line).map_err(|e| ImportError::StorageError {
                message: format!("Corrupt record line in {}: {}", self.path.display(), e),
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

#[async_trait]
impl RecordStore for JsonlStore {
    async fn create(&self, record: InventoryRecord) -> Result<RecordId> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let id = self.count_existing()? as RecordId + 1;
        let line = serde_json::to_string(&record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;

        Ok(id)
    }
}
