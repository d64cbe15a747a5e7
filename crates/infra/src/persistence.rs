//! Load/save contract between a ledger and its store.
//!
//! Failures never leave the ledger half-replaced:
//! - missing store: ledger reset to empty, reported as a warning
//! - malformed or invalid data, IO fault: ledger left as it was, reported as an error

use std::path::Path;

use stockledger_core::DomainError;
use stockledger_inventory::StockLedger;
use stockledger_observability::{Diagnostic, DiagnosticLog};

use crate::store::{JsonFileStore, StockStore, StoreError};

/// Replace `ledger` with the contents of `store`.
///
/// Returns the number of items loaded.
pub fn load<L, S>(ledger: &mut StockLedger<L>, store: &S) -> Result<usize, StoreError>
where
    L: DiagnosticLog,
    S: StockStore + ?Sized,
{
    let location = store.location();

    let snapshot = match store.read() {
        Ok(snapshot) => snapshot,
        Err(err @ StoreError::NotFound { .. }) => {
            ledger.clear();
            ledger.log().warning(Diagnostic::new(
                "load",
                format!("{location} not found, starting with empty inventory"),
            ));
            return Err(err);
        }
        Err(err) => {
            ledger.log().error(Diagnostic::new("load", err.to_string()));
            return Err(err);
        }
    };

    let count = ledger.restore(snapshot).map_err(|e| {
        let err = match e {
            DomainError::InvalidEntry { item, reason } => StoreError::InvalidEntry { item, reason },
            other => StoreError::Rejected {
                location: location.clone(),
                source: other,
            },
        };
        ledger.log().error(Diagnostic::new("load", err.to_string()));
        err
    })?;

    ledger
        .log()
        .info(Diagnostic::new("load", format!("loaded {count} items from {location}")));
    Ok(count)
}

/// Write the full contents of `ledger` to `store`. The ledger is not modified.
pub fn save<L, S>(ledger: &StockLedger<L>, store: &S) -> Result<(), StoreError>
where
    L: DiagnosticLog,
    S: StockStore + ?Sized,
{
    let location = store.location();

    match store.write(&ledger.snapshot()) {
        Ok(()) => {
            ledger.log().info(Diagnostic::new(
                "save",
                format!("saved {} items to {location}", ledger.len()),
            ));
            Ok(())
        }
        Err(err) => {
            ledger.log().error(Diagnostic::new("save", err.to_string()));
            Err(err)
        }
    }
}

/// [`load`] from a JSON file.
pub fn load_path<L: DiagnosticLog>(
    ledger: &mut StockLedger<L>,
    path: impl AsRef<Path>,
) -> Result<usize, StoreError> {
    load(ledger, &JsonFileStore::new(path.as_ref()))
}

/// [`save`] to a JSON file.
pub fn save_path<L: DiagnosticLog>(
    ledger: &StockLedger<L>,
    path: impl AsRef<Path>,
) -> Result<(), StoreError> {
    save(ledger, &JsonFileStore::new(path.as_ref()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::InMemoryStockStore;
    use stockledger_inventory::StockSnapshot;
    use stockledger_observability::{MemoryLog, Severity};

    fn new_ledger() -> (StockLedger<Arc<MemoryLog>>, Arc<MemoryLog>) {
        let log = Arc::new(MemoryLog::new());
        (StockLedger::with_log(log.clone()), log)
    }

    #[test]
    fn load_missing_store_resets_ledger() {
        let (mut ledger, log) = new_ledger();
        ledger.add("apple", 3).unwrap();

        let err = load(&mut ledger, &InMemoryStockStore::new()).unwrap_err();

        assert!(err.is_not_found());
        assert!(ledger.is_empty());
        assert!(log.contains(Severity::Warning, "load"));
    }

    #[test]
    fn load_io_fault_keeps_prior_state() {
        let (mut ledger, log) = new_ledger();
        ledger.add("apple", 3).unwrap();
        let store = InMemoryStockStore::with_snapshot(StockSnapshot::new());
        store.set_unavailable(true);

        assert!(matches!(load(&mut ledger, &store), Err(StoreError::Io { .. })));
        assert_eq!(ledger.get_qty("apple"), 3);
        assert!(log.contains(Severity::Error, "load"));
    }

    #[test]
    fn load_replaces_wholesale() {
        let (mut ledger, log) = new_ledger();
        ledger.add("old", 1).unwrap();
        let store = InMemoryStockStore::with_snapshot(StockSnapshot::from([
            ("apple".to_string(), 7),
            ("banana".to_string(), 5),
        ]));

        assert_eq!(load(&mut ledger, &store).unwrap(), 2);
        assert!(!ledger.contains("old"));
        assert_eq!(ledger.get_qty("banana"), 5);
        assert!(log.contains(Severity::Info, "load"));
    }

    #[test]
    fn load_names_the_entry_the_ledger_refuses() {
        let (mut ledger, log) = new_ledger();
        ledger.add("apple", 3).unwrap();
        let store = InMemoryStockStore::with_snapshot(StockSnapshot::from([
            ("banana".to_string(), 2),
            (String::new(), 4),
        ]));

        let err = load(&mut ledger, &store).unwrap_err();

        match &err {
            StoreError::InvalidEntry { item, reason } => {
                assert_eq!(item, "");
                assert!(reason.contains("item name cannot be empty"), "{reason}");
            }
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
        assert_eq!(ledger.snapshot(), StockSnapshot::from([("apple".to_string(), 3)]));
        assert!(log.contains(Severity::Error, "load"));
    }

    #[test]
    fn save_failure_is_reported_and_ledger_untouched() {
        let (mut ledger, log) = new_ledger();
        ledger.add("apple", 3).unwrap();
        let store = InMemoryStockStore::new();
        store.set_unavailable(true);

        assert!(save(&ledger, &store).is_err());
        assert_eq!(ledger.get_qty("apple"), 3);
        assert!(log.contains(Severity::Error, "save"));
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn save_writes_snapshot() {
        let (mut ledger, log) = new_ledger();
        ledger.add("apple", 3).unwrap();
        let store = InMemoryStockStore::new();

        save(&ledger, &store).unwrap();

        assert_eq!(store.snapshot(), Some(StockSnapshot::from([("apple".to_string(), 3)])));
        assert!(log.contains(Severity::Info, "save"));
    }
}
