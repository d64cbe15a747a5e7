//! JSON file store with atomic, durable writes.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use stockledger_inventory::StockSnapshot;

use super::{StockStore, StoreError, parse_snapshot, render_snapshot};

/// File name used when no store path is configured.
pub const DEFAULT_STORE_FILE: &str = "inventory.json";

/// Stores the ledger as one JSON object in a single file:
/// ```text
/// {
///   "apple": 7,
///   "banana": 5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            location: self.location(),
            source,
        }
    }

    /// Write to a temp file in the target directory, then rename over the target.
    ///
    /// The target is either the previous content or the new content, never a
    /// partial write. An existing target keeps its permissions; a new one gets
    /// the process umask default, as a plain create would.
    fn atomic_write(&self, data: &[u8]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let existing = match fs::metadata(&self.path) {
            Ok(meta) => Some(meta.permissions()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(self.io_error(e)),
        };

        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        if existing.is_none() {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }

        let mut temp_file = builder.tempfile_in(dir).map_err(|e| self.io_error(e))?;
        if let Some(permissions) = existing {
            temp_file
                .as_file()
                .set_permissions(permissions)
                .map_err(|e| self.io_error(e))?;
        }
        temp_file.write_all(data).map_err(|e| self.io_error(e))?;
        temp_file.flush().map_err(|e| self.io_error(e))?;
        temp_file.as_file().sync_all().map_err(|e| self.io_error(e))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl StockStore for JsonFileStore {
    fn read(&self) -> Result<StockSnapshot, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    location: self.location(),
                });
            }
            Err(e) => return Err(self.io_error(e)),
        };
        parse_snapshot(&data, &self.location())
    }

    fn write(&self, snapshot: &StockSnapshot) -> Result<(), StoreError> {
        let json = render_snapshot(snapshot).map_err(|e| self.io_error(e.into()))?;
        self.atomic_write(json.as_bytes())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
