//! In-memory stock store for tests/dev.

use std::sync::RwLock;

use stockledger_inventory::StockSnapshot;

use super::{StockStore, StoreError};

/// In-memory store.
///
/// Starts empty (reads report `NotFound` until the first write). Can be
/// switched to an unavailable state to exercise IO-fault handling.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    inner: RwLock<Option<StockSnapshot>>,
    unavailable: RwLock<bool>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: StockSnapshot) -> Self {
        Self {
            inner: RwLock::new(Some(snapshot)),
            unavailable: RwLock::new(false),
        }
    }

    /// Make every subsequent read/write fail with an IO error (or stop doing so).
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut flag) = self.unavailable.write() {
            *flag = unavailable;
        }
    }

    /// Current stored snapshot, if anything was written.
    pub fn snapshot(&self) -> Option<StockSnapshot> {
        self.inner.read().ok()?.clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        let unavailable = self.unavailable.read().map(|f| *f).unwrap_or(true);
        if unavailable {
            return Err(StoreError::Io {
                location: self.location(),
                source: std::io::Error::other("store unavailable"),
            });
        }
        Ok(())
    }
}

impl StockStore for InMemoryStockStore {
    fn read(&self) -> Result<StockSnapshot, StoreError> {
        self.check_available()?;
        self.snapshot().ok_or_else(|| StoreError::NotFound {
            location: self.location(),
        })
    }

    fn write(&self, snapshot: &StockSnapshot) -> Result<(), StoreError> {
        self.check_available()?;
        let mut inner = self.inner.write().map_err(|_| StoreError::Io {
            location: self.location(),
            source: std::io::Error::other("store lock poisoned"),
        })?;
        *inner = Some(snapshot.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
