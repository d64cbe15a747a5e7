//! Stock quantities.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A validated, non-negative stock quantity.
///
/// Callers hand the ledger signed integers; the constructors below decide which
/// of those are acceptable for a given operation. Adding accepts zero, removing
/// does not.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Quantity for an `add`: any integer >= 0.
    pub fn non_negative(value: i64) -> DomainResult<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("quantity must be >= 0 (got {value})")))
    }

    /// Quantity for a `remove`: any integer > 0.
    pub fn positive(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::validation(format!("quantity must be > 0 (got {value})")));
        }
        Ok(Self(value as u64))
    }

    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

/// Parses textual input (CLI arguments, form fields) into a non-negative quantity.
impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("quantity must be an integer (got {s:?})")))?;
        Self::non_negative(value)
    }
}
