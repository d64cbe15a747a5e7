use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{ItemName, Quantity};
use stockledger_events::Event;

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item: ItemName,
    pub quantity: Quantity,
    /// Stock on hand after the addition.
    pub on_hand: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved (stock left over).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub item: ItemName,
    pub quantity: Quantity,
    pub remaining: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemDepleted (entry deleted from the ledger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDepleted {
    pub item: ItemName,
    pub quantity: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Record of one successful ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    ItemDepleted(ItemDepleted),
}

impl StockEvent {
    pub fn item(&self) -> &ItemName {
        match self {
            StockEvent::ItemAdded(e) => &e.item,
            StockEvent::ItemRemoved(e) => &e.item,
            StockEvent::ItemDepleted(e) => &e.item,
        }
    }

    /// Quantity requested by the mutation (not the resulting stock).
    pub fn quantity(&self) -> Quantity {
        match self {
            StockEvent::ItemAdded(e) => e.quantity,
            StockEvent::ItemRemoved(e) => e.quantity,
            StockEvent::ItemDepleted(e) => e.quantity,
        }
    }
}

impl Event for StockEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StockEvent::ItemAdded(_) => "inventory.item.added",
            StockEvent::ItemRemoved(_) => "inventory.item.removed",
            StockEvent::ItemDepleted(_) => "inventory.item.depleted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StockEvent::ItemAdded(e) => e.occurred_at,
            StockEvent::ItemRemoved(e) => e.occurred_at,
            StockEvent::ItemDepleted(e) => e.occurred_at,
        }
    }
}

/// Human-readable log line, e.g. `2026-10-19 12:00:00 UTC: Added 10 of apple`.
impl core::fmt::Display for StockEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: ", self.occurred_at().format("%Y-%m-%d %H:%M:%S%.3f UTC"))?;
        match self {
            StockEvent::ItemAdded(e) => write!(f, "Added {} of {}", e.quantity, e.item),
            StockEvent::ItemRemoved(e) => {
                write!(f, "Removed {} of {} ({} left)", e.quantity, e.item, e.remaining)
            }
            StockEvent::ItemDepleted(e) => write!(
                f,
                "Removed {} of {}; item removed from inventory (quantity reached 0)",
                e.quantity, e.item
            ),
        }
    }
}
