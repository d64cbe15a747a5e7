//! Item names: the key of every ledger entry.

use core::borrow::Borrow;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Name of a stock keeping unit.
///
/// Any non-empty text is accepted verbatim: names are case-sensitive and are
/// never trimmed or folded, so `"Apple"` and `"apple"` are distinct items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ItemName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let err = ItemName::new("").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn names_are_kept_verbatim() {
        let name = ItemName::new("  Apple ").unwrap();
        assert_eq!(name.as_str(), "  Apple ");
        assert_ne!(ItemName::new("Apple").unwrap(), ItemName::new("apple").unwrap());
    }

    #[test]
    fn deserialize_validates() {
        let ok: ItemName = serde_json::from_str("\"banana\"").unwrap();
        assert_eq!(ok.as_str(), "banana");
        assert!(serde_json::from_str::<ItemName>("\"\"").is_err());
    }
}
