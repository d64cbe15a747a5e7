//! Command handlers for CLI subcommands.
//!
//! One-shot commands load the inventory file, apply a single operation and
//! save again if the ledger changed. Output goes to the given writer so the
//! binary can pass stdout and tests a buffer.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use stockledger_infra::{load_path, save_path};
use stockledger_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, StockLedger};
use tracing::info;

use crate::cli::Commands;

/// Execute a CLI command against the inventory file at `file`.
pub fn execute<W: Write>(command: Commands, file: &Path, out: &mut W) -> anyhow::Result<()> {
    match command {
        Commands::Demo => cmd_demo(file, out),
        Commands::Add { item, qty } => cmd_add(file, &item, qty, out),
        Commands::Remove { item, qty } => cmd_remove(file, &item, qty, out),
        Commands::Qty { item } => cmd_qty(file, &item, out),
        Commands::Low { threshold } => cmd_low(file, threshold, out),
        Commands::Report => cmd_report(file, out),
    }
}

/// Load the ledger from `file`; a missing file means an empty inventory.
fn open_ledger(file: &Path) -> anyhow::Result<StockLedger> {
    let mut ledger = StockLedger::new();
    match load_path(&mut ledger, file) {
        Ok(_) => Ok(ledger),
        Err(e) if e.is_not_found() => Ok(ledger),
        Err(e) => Err(e).with_context(|| format!("failed to load {}", file.display())),
    }
}

fn persist(ledger: &StockLedger, file: &Path) -> anyhow::Result<()> {
    save_path(ledger, file).with_context(|| format!("failed to save {}", file.display()))
}

fn cmd_add<W: Write>(file: &Path, item: &str, qty: i64, out: &mut W) -> anyhow::Result<()> {
    let mut ledger = open_ledger(file)?;
    ledger
        .add(item, qty)
        .with_context(|| format!("cannot add {qty} of {item:?}"))?;
    persist(&ledger, file)?;
    writeln!(out, "{item}: {}", ledger.get_qty(item))?;
    Ok(())
}

fn cmd_remove<W: Write>(file: &Path, item: &str, qty: i64, out: &mut W) -> anyhow::Result<()> {
    let mut ledger = open_ledger(file)?;
    ledger
        .remove(item, qty)
        .with_context(|| format!("cannot remove {qty} of {item:?}"))?;
    persist(&ledger, file)?;
    writeln!(out, "{item}: {}", ledger.get_qty(item))?;
    Ok(())
}

fn cmd_qty<W: Write>(file: &Path, item: &str, out: &mut W) -> anyhow::Result<()> {
    let ledger = open_ledger(file)?;
    writeln!(out, "{item}: {}", ledger.get_qty(item))?;
    Ok(())
}

fn cmd_low<W: Write>(file: &Path, threshold: i64, out: &mut W) -> anyhow::Result<()> {
    let ledger = open_ledger(file)?;
    let low = ledger.list_low(threshold);
    if low.is_empty() {
        writeln!(out, "No low-stock items")?;
    }
    for item in low {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

fn cmd_report<W: Write>(file: &Path, out: &mut W) -> anyhow::Result<()> {
    let ledger = open_ledger(file)?;
    writeln!(out, "{}", ledger.report())?;
    Ok(())
}

/// Sample session with fixed data. Rejected operations are expected here:
/// they show up as warnings in the log and do not stop the run.
fn cmd_demo<W: Write>(file: &Path, out: &mut W) -> anyhow::Result<()> {
    info!("starting inventory demo");

    let mut ledger = StockLedger::new();

    ledger.add("apple", 10)?;
    ledger.add("banana", 5)?;

    let _ = ledger.add("banana", -2);
    let _ = ledger.add("", 10);

    ledger.remove("apple", 3)?;
    let _ = ledger.remove("orange", 1);

    writeln!(out, "Apple stock: {}", ledger.get_qty("apple"))?;
    writeln!(
        out,
        "Low items: {:?}",
        ledger.list_low(DEFAULT_LOW_STOCK_THRESHOLD as i64)
    )?;

    persist(&ledger, file)?;
    load_path(&mut ledger, file)
        .with_context(|| format!("failed to reload {}", file.display()))?;
    writeln!(out, "{}", ledger.report())?;

    info!("inventory demo completed");
    Ok(())
}
