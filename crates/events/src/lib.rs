//! Event primitives shared by the ledger and its callers.

pub mod event;
pub mod journal;

pub use event::Event;
pub use journal::EventJournal;
