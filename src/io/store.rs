use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::common::error::AppError;
use crate::domain::{entry::Entry, party::Party};

/// Slot key for the entries collection.
pub const ENTRIES_KEY: &str = "entries";
/// Slot key for the parties collection.
pub const PARTIES_KEY: &str = "parties";

/// Both collections as read from disk.
#[derive(Debug, Default)]
pub struct Loaded {
    pub entries: Vec<Entry>,
    pub parties: Vec<Party>,
}

/// File-backed key-value store: slot `k` lives at `<dir>/k.json` and holds
/// one JSON array. Every save rewrites the whole slot; the two slots are
/// independent, with no transaction spanning them.
///
/// # Examples
///
/// ```
/// use party_ledger::io::store::Store;
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = Store::open(dir.path()).unwrap();
///
/// assert!(store.get("entries").unwrap().is_none());
/// store.put("entries", "[]").unwrap();
/// assert_eq!(store.get("entries").unwrap().as_deref(), Some("[]"));
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The platform-default store location: the user data directory (falling
    /// back to the current directory) joined with `party-ledger`.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("party-ledger")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Raw read of one slot. A missing slot is `Ok(None)`, not an error.
    pub fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Raw overwrite of one slot: written to a temp file first, then renamed
    /// over the final path, so a crash mid-write cannot leave a truncated
    /// slot behind.
    pub fn put(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Reads both collections in one shot.
    ///
    /// Never fails: a missing slot loads as an empty collection, and an
    /// unreadable or unparsable slot is discarded with a warning instead of
    /// taking the app down. The slots are independent, so a damaged
    /// `entries` slot does not cost the parties, and vice versa.
    ///
    /// # Examples
    ///
    /// ```
    /// use party_ledger::io::store::Store;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let store = Store::open(dir.path()).unwrap();
    ///
    /// let loaded = store.load();
    /// assert!(loaded.entries.is_empty());
    /// assert!(loaded.parties.is_empty());
    /// ```
    pub fn load(&self) -> Loaded {
        Loaded {
            entries: self.read_slot(ENTRIES_KEY),
            parties: self.read_slot(PARTIES_KEY),
        }
    }

    fn read_slot<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "failed to read slot, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key, error = %e, "discarding unparsable slot");
                Vec::new()
            }
        }
    }

    /// Writes the full entries collection into its slot.
    pub fn save_entries(&self, entries: &[Entry]) -> Result<(), AppError> {
        self.write_slot(ENTRIES_KEY, entries)
    }

    /// Writes the full parties collection into its slot.
    pub fn save_parties(&self, parties: &[Party]) -> Result<(), AppError> {
        self.write_slot(PARTIES_KEY, parties)
    }

    fn write_slot<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), AppError> {
        let raw = serde_json::to_string(items)?;
        self.put(key, &raw)?;
        debug!(key, bytes = raw.len(), "slot written");
        Ok(())
    }
}
