//! Atomic JSON file operations.
//!
//! The saved-item store writes its full sequence on every mutation; this
//! layer guarantees an interrupted write leaves either the old or the new
//! complete file on disk, never a torn one.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use unistudy_core::error::{Result, StudyError};

/// A handle to a JSON file with atomic replace semantics.
///
/// - **Atomicity**: updates go through a temp file + rename
/// - **Durability**: explicit fsync before the rename
/// - **Isolation**: an advisory lock file serializes writers on Unix
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// Returns `Ok(None)` if the file doesn't exist or is empty. A parse
    /// failure is an error here; callers that want the "malformed means
    /// empty" policy apply it themselves.
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Serializes `data` and atomically replaces the file with it.
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let _lock = FileLock::acquire(&self.path)?;

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;

        // Data must hit the disk before the rename makes it visible
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| StudyError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| StudyError::io("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Advisory lock guard, released on drop.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| StudyError::data_access(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock happens when the handle closes; removing the lock file is
        // best effort
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Vec<Record>>::new(temp_dir.path().join("items.json"));

        let records = vec![
            Record {
                name: "a".to_string(),
                count: 1,
            },
            Record {
                name: "b".to_string(),
                count: 2,
            },
        ];

        file.save(&records).unwrap();
        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_nonexistent_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Vec<Record>>::new(temp_dir.path().join("missing.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let file = AtomicJsonFile::<Vec<Record>>::new(path);
        assert!(file.load().unwrap_err().is_serialization());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        let file = AtomicJsonFile::<Vec<Record>>::new(path.clone());

        file.save(&vec![Record {
            name: "a".to_string(),
            count: 1,
        }])
        .unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".items.json.tmp").exists());
    }
}
