//! Infrastructure layer: durable storage for the stock ledger.

pub mod persistence;
pub mod store;

mod integration_tests;

pub use persistence::{load, load_path, save, save_path};
pub use store::{DEFAULT_STORE_FILE, InMemoryStockStore, JsonFileStore, StockStore, StoreError};
