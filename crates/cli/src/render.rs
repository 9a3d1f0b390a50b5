//! Rendering inventory state for the terminal.

use std::io::Write;

use serde::Serialize;

use mochila_inventory::{Inventory, Item};

use crate::config::OutputMode;
use crate::error::CliResult;

const RULE_HEAVY: &str = "=================================================================";
const RULE_LIGHT: &str = "-----------------------------------------------------------------";

/// Print the whole backpack as a bordered table (or JSON array).
pub fn inventory<W: Write>(w: &mut W, inv: &Inventory, mode: OutputMode) -> CliResult<()> {
    match mode {
        OutputMode::Table => inventory_table(w, inv),
        OutputMode::Json => {
            writeln!(w, "{}", serde_json::to_string_pretty(inv)?)?;
            Ok(())
        }
    }
}

fn inventory_table<W: Write>(w: &mut W, inv: &Inventory) -> CliResult<()> {
    writeln!(w)?;
    writeln!(w, "{RULE_HEAVY}")?;
    writeln!(w, "{:^65}", "BACKPACK INVENTORY")?;
    writeln!(w, "{RULE_HEAVY}")?;

    if inv.is_empty() {
        writeln!(w, "|{:^63}|", "THE BACKPACK IS EMPTY!")?;
    } else {
        writeln!(
            w,
            "| {:<5} | {:<20} | {:<10} | {:<5} | {:<8} |",
            "ID", "NAME", "CATEGORY", "QTY", "WEIGHT (kg)"
        )?;
        writeln!(w, "{RULE_LIGHT}")?;
        for (position, item) in inv.iter_positions() {
            writeln!(
                w,
                "| {:<5} | {:<20} | {:<10} | {:<5} | {:<8.2} |",
                position,
                item.name(),
                item.category(),
                item.quantity(),
                item.weight()
            )?;
        }
    }

    writeln!(w, "{RULE_HEAVY}")?;
    Ok(())
}

#[derive(Serialize)]
struct Found<'a> {
    position: usize,
    item: &'a Item,
}

/// Print a search hit.
pub fn found<W: Write>(w: &mut W, position: usize, item: &Item, mode: OutputMode) -> CliResult<()> {
    match mode {
        OutputMode::Table => writeln!(
            w,
            "\n[FOUND] Item '{}' at position {} (Category: {}, Qty: {}, Weight: {:.2}).",
            item.name(),
            position,
            item.category(),
            item.quantity(),
            item.weight()
        )?,
        OutputMode::Json => writeln!(
            w,
            "{}",
            serde_json::to_string_pretty(&Found { position, item })?
        )?,
    }
    Ok(())
}
