//! `stockledger-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model and the validated values every ledger operation accepts.

pub mod error;
pub mod name;
pub mod quantity;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use name::ItemName;
pub use quantity::Quantity;
pub use value_object::ValueObject;
