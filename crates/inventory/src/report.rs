//! Console stock report.

use std::collections::BTreeMap;

use stockledger_core::{ItemName, Quantity};

const TITLE: &str = "Items Report";
const RULE_WIDTH: usize = 30;
const EMPTY_NOTICE: &str = "No items in inventory";

/// Borrowed view over a ledger that renders lazily.
///
/// Nothing is formatted until the report is displayed or its lines iterated.
#[derive(Debug, Copy, Clone)]
pub struct StockReport<'a> {
    stock: &'a BTreeMap<ItemName, Quantity>,
}

impl<'a> StockReport<'a> {
    pub(crate) fn new(stock: &'a BTreeMap<ItemName, Quantity>) -> Self {
        Self { stock }
    }

    /// Report lines: title, rule, then `item -> qty` rows (or the empty notice).
    pub fn lines(self) -> impl Iterator<Item = String> + 'a {
        let stock = self.stock;
        let header = [TITLE.to_string(), "-".repeat(RULE_WIDTH)];
        let empty = stock.is_empty().then(|| EMPTY_NOTICE.to_string());
        let rows = stock.iter().map(|(item, qty)| format!("{item} -> {qty}"));

        header.into_iter().chain(empty).chain(rows)
    }
}

impl core::fmt::Display for StockReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}
