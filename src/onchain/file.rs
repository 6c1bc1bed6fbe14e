use super::{MemoryStorage, StorageReader, StorageWriter};
use crate::registry::RegistryError;
use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the storage snapshot inside the data directory.
pub const STORAGE_FILE_NAME: &str = "signer_slots.json";

/// One stored word as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredWord {
    address: Address,
    slot: U256,
    value: B256,
}

/// Contract storage backed by a JSON file.
///
/// Writes land in memory and reach disk on [`StorageWriter::commit`]. The
/// file is replaced through a temporary sibling, so a crash mid-commit leaves
/// the previous snapshot intact.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    words: MemoryStorage,
}

impl FileStorage {
    /// Open the snapshot at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let path = path.into();
        let mut words = MemoryStorage::new();

        if path.exists() {
            let data = fs::read_to_string(&path).map_err(|e| {
                RegistryError::Storage(format!("failed to read {}: {e}", path.display()))
            })?;
            let stored: Vec<StoredWord> = serde_json::from_str(&data).map_err(|e| {
                RegistryError::Storage(format!("failed to parse {}: {e}", path.display()))
            })?;
            for word in stored {
                words.write_storage(word.address, word.slot, word.value);
            }
        }

        Ok(Self { path, words })
    }

    /// Open `signer_slots.json` inside `datadir`.
    pub fn open_in(datadir: &Path) -> Result<Self, RegistryError> {
        Self::open(datadir.join(STORAGE_FILE_NAME))
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageReader for FileStorage {
    fn read_storage(&self, address: Address, slot: U256) -> Option<B256> {
        self.words.read_storage(address, slot)
    }
}

impl StorageWriter for FileStorage {
    fn write_storage(&mut self, address: Address, slot: U256, value: B256) {
        self.words.write_storage(address, slot, value);
    }

    fn commit(&mut self) -> Result<(), RegistryError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                RegistryError::Storage(format!("failed to create {}: {e}", dir.display()))
            })?;
        }

        let stored: Vec<StoredWord> = self
            .words
            .storage
            .iter()
            .map(|(&(address, slot), &value)| StoredWord {
                address,
                slot,
                value,
            })
            .collect();
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| RegistryError::Storage(format!("failed to serialize storage: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| {
            RegistryError::Storage(format!("failed to write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            RegistryError::Storage(format!("failed to replace {}: {e}", self.path.display()))
        })?;

        Ok(())
    }
}

/// Scratch directory removed on drop.
#[cfg(test)]
pub(crate) struct TempDir {
    path: PathBuf,
}

#[cfg(test)]
impl TempDir {
    pub(crate) fn new(label: &str) -> Result<Self, std::io::Error> {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static NEXT: AtomicUsize = AtomicUsize::new(0);

        let mut path = std::env::temp_dir();
        path.push(format!(
            "signer-slots-{label}-{}-{}",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
