//! JSON persistence helpers
//!
//! Data files are replaced whole: the new contents go to a sibling `.tmp`
//! file that is synced and then renamed over the target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> FinError {
    FinError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Load a JSON document; a missing file yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, FinError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_error("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Replace `path` with the pretty-printed JSON of `data`
///
/// On error the previous file, if any, is left as it was.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create", dir, e))?;
    }

    let staged = path.with_extension("json.tmp");
    let result = write_staged(&staged, data).and_then(|()| {
        fs::rename(&staged, path).map_err(|e| storage_error("replace", path, e))
    });

    if result.is_err() {
        let _ = fs::remove_file(&staged);
    }
    result
}

fn write_staged<T: Serialize>(staged: &Path, data: &T) -> Result<(), FinError> {
    let file = File::create(staged).map_err(|e| storage_error("create", staged, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| storage_error("write", staged, e))?;
    writer.flush().map_err(|e| storage_error("write", staged, e))?;
    writer.get_ref().sync_all().map_err(|e| storage_error("sync", staged, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Default)]
    struct Ledger {
        owner: String,
        entries: Vec<i64>,
    }

    fn ledger() -> Ledger {
        Ledger {
            owner: "alice".into(),
            entries: vec![2500, -400],
        }
    }

    #[test]
    fn test_missing_file_reads_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: Ledger = read_json(temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Ledger::default());
    }

    #[test]
    fn test_write_creates_parent_and_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("ledger.json");

        write_json_atomic(&path, &ledger()).unwrap();

        assert!(!temp_dir.path().join("data").join("ledger.json.tmp").exists());
        assert_eq!(read_json::<Ledger, _>(&path).unwrap(), ledger());
    }

    #[test]
    fn test_failed_replace_keeps_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::create_dir(&path).unwrap();

        assert!(matches!(write_json_atomic(&path, &ledger()), Err(FinError::Storage(_))));
        assert!(!temp_dir.path().join("ledger.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Ledger, _>(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
