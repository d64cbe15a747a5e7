//! Stock store abstraction and its implementations.

use thiserror::Error;

use stockledger_core::DomainError;
use stockledger_inventory::StockSnapshot;

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryStockStore;
pub use json_file::{DEFAULT_STORE_FILE, JsonFileStore};

/// Backing store for ledger snapshots.
pub trait StockStore {
    /// Read the full snapshot.
    fn read(&self) -> Result<StockSnapshot, StoreError>;

    /// Replace the stored snapshot.
    fn write(&self, snapshot: &StockSnapshot) -> Result<(), StoreError>;

    /// Human-readable location used in logs and errors.
    fn location(&self) -> String;
}

impl<S> StockStore for &S
where
    S: StockStore + ?Sized,
{
    fn read(&self) -> Result<StockSnapshot, StoreError> {
        (**self).read()
    }

    fn write(&self, snapshot: &StockSnapshot) -> Result<(), StoreError> {
        (**self).write(snapshot)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Persistence error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing has been stored at this location yet.
    #[error("store not found: {location}")]
    NotFound { location: String },

    /// The stored content is not a JSON object.
    #[error("malformed data in {location}: {source}")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// Read/write fault (permissions, disk, rename).
    #[error("io error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// Well-formed JSON holding an entry a ledger cannot contain.
    #[error("invalid entry {item:?}: {reason}")]
    InvalidEntry { item: String, reason: String },

    /// The ledger refused the stored snapshot as a whole.
    #[error("ledger rejected data from {location}: {source}")]
    Rejected {
        location: String,
        #[source]
        source: DomainError,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Parse stored JSON text into a validated snapshot.
///
/// The root must be an object; every key must be non-empty and every value a
/// non-negative integer.
pub(crate) fn parse_snapshot(data: &str, location: &str) -> Result<StockSnapshot, StoreError> {
    let raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(data).map_err(|source| StoreError::Malformed {
            location: location.to_string(),
            source,
        })?;

    let mut snapshot = StockSnapshot::new();
    for (item, value) in raw {
        if item.is_empty() {
            return Err(StoreError::InvalidEntry {
                item,
                reason: "item name cannot be empty".to_string(),
            });
        }
        let Some(qty) = value.as_u64() else {
            return Err(StoreError::InvalidEntry {
                item,
                reason: format!("quantity must be a non-negative integer (got {value})"),
            });
        };
        snapshot.insert(item, qty);
    }
    Ok(snapshot)
}

/// Render a snapshot as pretty JSON (2-space indentation).
pub(crate) fn render_snapshot(snapshot: &StockSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}
