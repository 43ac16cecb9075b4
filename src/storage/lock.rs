//! Cross-process lock on the data directory
//!
//! Each run loads the whole transaction file and rewrites it, so two runs
//! must not overlap. The lock is a marker file created with `create_new`
//! and removed when the guard is dropped.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::FinError;

const RETRY_INTERVAL: Duration = Duration::from_millis(50);

/// Held for as long as this process may read or write the data files
#[derive(Debug)]
pub struct DataLock {
    path: PathBuf,
}

impl DataLock {
    /// Take the lock, polling for up to `wait` while another run holds it
    pub fn acquire(path: impl Into<PathBuf>, wait: Duration) -> Result<Self, FinError> {
        let path = path.into();
        let deadline = Instant::now() + wait;

        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    let _ = writeln!(file, "{}", std::process::id());
                    debug!(path = %path.display(), "acquired data lock");
                    return Ok(Self { path });
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    if Instant::now() >= deadline {
                        return Err(FinError::Storage(format!(
                            "Data directory is in use by another fintooz process \
                             (delete {} if none is running)",
                            path.display()
                        )));
                    }
                    thread::sleep(RETRY_INTERVAL);
                }
                Err(e) => {
                    return Err(FinError::Storage(format!(
                        "Failed to create lock file {}: {}",
                        path.display(),
                        e
                    )))
                }
            }
        }
    }
}

impl Drop for DataLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
