use std::collections::BTreeMap;

use chrono::Utc;

use stockledger_core::{DomainError, DomainResult, ItemName, Quantity};
use stockledger_events::EventJournal;
use stockledger_observability::{Diagnostic, DiagnosticLog, TracingLog};

use crate::event::{ItemAdded, ItemDepleted, ItemRemoved, StockEvent};
use crate::report::StockReport;

/// Threshold used by [`StockLedger::list_low`] when the caller passes a negative one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Persisted shape of a ledger: item name -> quantity.
pub type StockSnapshot = BTreeMap<String, u64>;

/// In-memory item -> quantity ledger.
///
/// Invariant: every stored quantity is > 0. A mutation that would leave an
/// item at zero or below deletes the entry instead.
///
/// All operations are synchronous and need exclusive access for mutation
/// (`&mut self`). Callers sharing a ledger across threads wrap it themselves.
#[derive(Debug)]
pub struct StockLedger<L = TracingLog> {
    stock: BTreeMap<ItemName, Quantity>,
    log: L,
}

impl StockLedger<TracingLog> {
    /// Empty ledger reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_log(TracingLog)
    }
}

impl Default for StockLedger<TracingLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: DiagnosticLog> StockLedger<L> {
    /// Empty ledger reporting through the given diagnostic log.
    pub fn with_log(log: L) -> Self {
        Self {
            stock: BTreeMap::new(),
            log,
        }
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Add `qty` units of `item`, creating the entry if absent.
    ///
    /// `qty` must be >= 0. Adding zero to an absent item succeeds without
    /// creating an entry.
    pub fn add(&mut self, item: &str, qty: i64) -> DomainResult<StockEvent> {
        let (name, quantity) = self.validate("add", item, qty, Quantity::non_negative)?;

        let current = self.stock.get(item).copied().unwrap_or(Quantity::ZERO);
        let Some(on_hand) = current.get().checked_add(quantity.get()) else {
            self.log.warning(
                Diagnostic::new("add", "quantity overflow")
                    .with_item(item)
                    .with_quantity(qty),
            );
            return Err(DomainError::invariant(format!("quantity overflow for {item}")));
        };
        let on_hand = Quantity::from_u64(on_hand);

        if !on_hand.is_zero() {
            self.stock.insert(name.clone(), on_hand);
        }

        let event = StockEvent::ItemAdded(ItemAdded {
            item: name,
            quantity,
            on_hand,
            occurred_at: Utc::now(),
        });
        self.log.info(
            Diagnostic::new("add", event.to_string())
                .with_item(item)
                .with_quantity(qty),
        );
        Ok(event)
    }

    /// [`add`](Self::add), also appending the mutation record to `journal` on success.
    pub fn add_journaled(
        &mut self,
        item: &str,
        qty: i64,
        journal: &mut EventJournal<StockEvent>,
    ) -> DomainResult<StockEvent> {
        let event = self.add(item, qty)?;
        journal.record(event.clone());
        Ok(event)
    }

    /// Remove `qty` units of `item`.
    ///
    /// `qty` must be > 0 and the item must be present; otherwise the ledger is
    /// left untouched. Removing as much or more than is on hand deletes the entry.
    pub fn remove(&mut self, item: &str, qty: i64) -> DomainResult<StockEvent> {
        let (name, quantity) = self.validate("remove", item, qty, Quantity::positive)?;

        let Some(current) = self.stock.get(item).copied() else {
            self.log.warning(
                Diagnostic::new("remove", "item not found in inventory")
                    .with_item(item)
                    .with_quantity(qty),
            );
            return Err(DomainError::not_found(item));
        };

        let occurred_at = Utc::now();
        let event = match current.get().checked_sub(quantity.get()) {
            Some(remaining) if remaining > 0 => {
                let remaining = Quantity::from_u64(remaining);
                self.stock.insert(name.clone(), remaining);
                StockEvent::ItemRemoved(ItemRemoved {
                    item: name,
                    quantity,
                    remaining,
                    occurred_at,
                })
            }
            _ => {
                self.stock.remove(item);
                StockEvent::ItemDepleted(ItemDepleted {
                    item: name,
                    quantity,
                    occurred_at,
                })
            }
        };

        self.log.info(
            Diagnostic::new("remove", event.to_string())
                .with_item(item)
                .with_quantity(qty),
        );
        Ok(event)
    }

    /// Quantity on hand, or 0 when the item is absent or the name is invalid.
    ///
    /// Use [`contains`](Self::contains) to tell absence apart from a zero answer.
    pub fn get_qty(&self, item: &str) -> u64 {
        if item.is_empty() {
            self.log.warning(Diagnostic::new("get_qty", "invalid item name").with_item(item));
            return 0;
        }
        self.stock.get(item).map(|q| q.get()).unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    /// Items whose quantity is strictly below `threshold`.
    ///
    /// A negative threshold is replaced by [`DEFAULT_LOW_STOCK_THRESHOLD`].
    /// Order of the result is unspecified.
    pub fn list_low(&self, threshold: i64) -> Vec<String> {
        let threshold = match u64::try_from(threshold) {
            Ok(t) => t,
            Err(_) => {
                self.log.warning(
                    Diagnostic::new(
                        "list_low",
                        format!("invalid threshold, using default of {DEFAULT_LOW_STOCK_THRESHOLD}"),
                    )
                    .with_quantity(threshold),
                );
                DEFAULT_LOW_STOCK_THRESHOLD
            }
        };

        self.stock
            .iter()
            .filter(|(_, qty)| qty.get() < threshold)
            .map(|(item, _)| item.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.stock.iter().map(|(item, qty)| (item.as_str(), qty.get()))
    }

    pub fn clear(&mut self) {
        self.stock.clear();
    }

    /// Copy of the current contents in persisted shape.
    pub fn snapshot(&self) -> StockSnapshot {
        self.iter().map(|(item, qty)| (item.to_string(), qty)).collect()
    }

    /// Replace the ledger wholesale with `snapshot`.
    ///
    /// Every key must be a valid item name; the ledger is left unchanged
    /// otherwise. Zero quantities are dropped. Returns the number of entries kept.
    pub fn restore(&mut self, snapshot: StockSnapshot) -> DomainResult<usize> {
        let mut stock = BTreeMap::new();
        for (item, qty) in snapshot {
            let name = match ItemName::new(item.as_str()) {
                Ok(name) => name,
                Err(e) => return Err(DomainError::invalid_entry(item, e.to_string())),
            };
            if qty == 0 {
                self.log.warning(
                    Diagnostic::new("restore", "dropping entry with zero quantity")
                        .with_item(name.as_str()),
                );
                continue;
            }
            stock.insert(name, Quantity::from_u64(qty));
        }

        self.stock = stock;
        Ok(self.stock.len())
    }

    /// Lazy, human-readable rendering of the ledger.
    pub fn report(&self) -> StockReport<'_> {
        StockReport::new(&self.stock)
    }

    /// Print [`report`](Self::report) to stdout.
    pub fn print_report(&self) {
        println!("{}", self.report());
    }

    fn validate(
        &self,
        operation: &'static str,
        item: &str,
        qty: i64,
        quantity: fn(i64) -> DomainResult<Quantity>,
    ) -> DomainResult<(ItemName, Quantity)> {
        let name = ItemName::new(item).inspect_err(|_| {
            self.log.warning(
                Diagnostic::new(operation, "invalid item name")
                    .with_item(item)
                    .with_quantity(qty),
            );
        })?;
        let quantity = quantity(qty).inspect_err(|_| {
            self.log.warning(
                Diagnostic::new(operation, "invalid quantity")
                    .with_item(item)
                    .with_quantity(qty),
            );
        })?;
        Ok((name, quantity))
    }
}
