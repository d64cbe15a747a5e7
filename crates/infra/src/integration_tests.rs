//! Integration tests for the full ledger + file store pipeline.
//!
//! Tests: mutation → save → load → query
//!
//! Verifies:
//! - Saved files reload into an equal ledger
//! - Failed loads never leave the ledger half-replaced
//! - The sample session produces the expected stock

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use proptest::prelude::*;
    use tempfile::tempdir;

    use stockledger_inventory::{StockLedger, StockSnapshot};
    use stockledger_observability::{MemoryLog, Severity};

    use crate::persistence::{load_path, save_path};
    use crate::store::StoreError;

    fn new_ledger() -> (StockLedger<Arc<MemoryLog>>, Arc<MemoryLog>) {
        let log = Arc::new(MemoryLog::new());
        (StockLedger::with_log(log.clone()), log)
    }

    #[test]
    fn sample_session_survives_a_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let (mut ledger, _) = new_ledger();

        ledger.add("apple", 10).unwrap();
        ledger.add("banana", 5).unwrap();
        assert!(ledger.add("banana", -2).is_err());
        ledger.remove("apple", 3).unwrap();
        assert!(ledger.remove("orange", 1).is_err());

        save_path(&ledger, &path).unwrap();

        let (mut reloaded, _) = new_ledger();
        assert_eq!(load_path(&mut reloaded, &path).unwrap(), 2);
        assert_eq!(reloaded.get_qty("apple"), 7);
        assert_eq!(reloaded.get_qty("banana"), 5);
        assert!(reloaded.list_low(5).is_empty());
    }

    #[test]
    fn load_nonexistent_path_fails_and_empties_ledger() {
        let dir = tempdir().unwrap();
        let (mut ledger, log) = new_ledger();
        ledger.add("apple", 1).unwrap();

        let err = load_path(&mut ledger, dir.path().join("nope.json")).unwrap_err();

        assert!(err.is_not_found());
        assert!(ledger.is_empty());
        assert_eq!(log.count(Severity::Warning), 1);
    }

    #[test]
    fn malformed_file_leaves_ledger_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "this is not json").unwrap();
        let (mut ledger, log) = new_ledger();
        ledger.add("apple", 4).unwrap();

        let err = load_path(&mut ledger, &path).unwrap_err();

        assert!(matches!(err, StoreError::Malformed { .. }));
        assert_eq!(ledger.snapshot(), StockSnapshot::from([("apple".to_string(), 4)]));
        assert!(log.contains(Severity::Error, "load"));
    }

    #[test]
    fn wrongly_shaped_values_are_rejected_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"apple": 3, "banana": "lots"}"#).unwrap();
        let (mut ledger, _) = new_ledger();
        ledger.add("kiwi", 2).unwrap();

        let err = load_path(&mut ledger, &path).unwrap_err();

        match err {
            StoreError::InvalidEntry { item, .. } => assert_eq!(item, "banana"),
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
        assert_eq!(ledger.get_qty("kiwi"), 2);
        assert!(!ledger.contains("apple"));
    }

    #[test]
    fn zero_quantities_in_file_are_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"apple": 3, "pear": 0}"#).unwrap();
        let (mut ledger, _) = new_ledger();

        assert_eq!(load_path(&mut ledger, &path).unwrap(), 1);
        assert!(!ledger.contains("pear"));
    }

    #[test]
    fn save_failure_keeps_previous_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let (mut ledger, _) = new_ledger();
        ledger.add("apple", 1).unwrap();
        save_path(&ledger, &path).unwrap();

        // A plain file where the parent directory should be makes the write fail.
        let blocked = dir.path().join("blocked");
        fs::write(&blocked, "file, not a dir").unwrap();
        assert!(save_path(&ledger, blocked.join("inventory.json")).is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"apple\": 1\n}");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: save followed by a fresh load reproduces the same mapping.
        #[test]
        fn save_then_load_round_trips(
            entries in prop::collection::btree_map("[A-Za-z0-9 _-]{1,16}", 1u64..1_000_000, 0..20)
        ) {
            let dir = tempdir().unwrap();
            let path = dir.path().join("inventory.json");
            let (mut ledger, _) = new_ledger();
            for (item, qty) in &entries {
                ledger.add(item, *qty as i64).unwrap();
            }

            save_path(&ledger, &path).unwrap();
            let (mut reloaded, _) = new_ledger();
            load_path(&mut reloaded, &path).unwrap();

            prop_assert_eq!(reloaded.snapshot(), entries);
        }
    }
}
