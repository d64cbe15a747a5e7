//! Inventory domain module: the stock ledger.
//!
//! This crate contains the business rules for stock quantities, implemented
//! as in-memory domain logic (no file IO; persistence lives in infra).

pub mod event;
pub mod ledger;
pub mod report;

pub use event::{ItemAdded, ItemDepleted, ItemRemoved, StockEvent};
pub use ledger::{DEFAULT_LOW_STOCK_THRESHOLD, StockLedger, StockSnapshot};
pub use report::StockReport;
