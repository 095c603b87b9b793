use crate::model::{GameRecord, Summary};
use log::warn;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STATS_FILE: &str = "game_statistics.json";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The file parses as JSON but at least one record lacks a required
    /// field. Distinct from "no history": the data exists but cannot be
    /// summarized.
    #[error("statistics file is corrupted")]
    Corrupted,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Append-only JSON log of completed games. Reads the whole file on every
/// operation and rewrites it on every append; histories stay small (one
/// record per won game) so the simplicity wins.
#[derive(Debug)]
pub struct StatisticsStore {
    path: PathBuf,
}

impl Default for StatisticsStore {
    fn default() -> Self {
        Self::new(STATS_FILE)
    }
}

impl StatisticsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in chronological order. A missing file and a file that
    /// does not parse as a record array both yield an empty history.
    pub fn load(&self) -> Vec<GameRecord> {
        if let Ok(contents) = fs::read_to_string(&self.path) {
            match serde_json::from_str(&contents) {
                Ok(records) => return records,
                Err(e) => {
                    warn!(target: "stats", "unreadable statistics file {:?}: {}", self.path, e);
                }
            }
        }
        Vec::new()
    }

    /// Raw JSON entries, shape unchecked. Appending through this keeps
    /// entries a newer or older writer produced that we cannot type.
    fn read_entries(&self) -> Vec<Value> {
        if let Ok(contents) = fs::read_to_string(&self.path) {
            match serde_json::from_str(&contents) {
                Ok(entries) => return entries,
                Err(e) => {
                    warn!(target: "stats", "unreadable statistics file {:?}: {}", self.path, e);
                }
            }
        }
        Vec::new()
    }

    /// Read-modify-write of the whole log. The rewrite goes through a temp
    /// file in the same directory so a reader never sees a partial file.
    pub fn append(&self, record: &GameRecord) -> Result<(), StoreError> {
        let mut entries = self.read_entries();
        entries.push(serde_json::to_value(record)?);

        let contents = serde_json::to_string_pretty(&entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// `Ok(None)` when there is no history; `Err(Corrupted)` when a record
    /// is present but malformed. Never skips a record silently.
    pub fn summarize(&self) -> Result<Option<Summary>, StoreError> {
        let entries = self.read_entries();
        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            let record: GameRecord =
                serde_json::from_value(entry).map_err(|_| StoreError::Corrupted)?;
            records.push(record);
        }
        Ok(Summary::from_records(&records))
    }
}
