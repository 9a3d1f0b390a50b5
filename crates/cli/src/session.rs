//! The interactive menu loop.

use std::io::{BufRead, Write};

use mochila_core::{InventoryError, MAX_CATEGORY_LEN, MAX_NAME_LEN};
use mochila_inventory::{Inventory, Item};

use crate::config::SessionConfig;
use crate::error::{CliError, CliResult};
use crate::menu::{MenuOption, ParseMenuError};
use crate::prompt::Prompter;
use crate::render;

const BANNER_RULE: &str = "====================================================";

/// One run of the menu against a single backpack.
///
/// The session owns the inventory for its whole lifetime; nothing else can
/// reach it while the loop runs.
pub struct Session<R, W> {
    inventory: Inventory,
    io: Prompter<R, W>,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, config: SessionConfig) -> Self {
        Self {
            inventory: Inventory::new(),
            io: Prompter::new(reader, writer),
            config,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Tear the session down, handing back the final backpack and the writer.
    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.io.into_writer())
    }

    /// Run the menu until the player quits or input runs out.
    pub fn run(&mut self) -> CliResult<()> {
        if self.config.show_banner {
            self.banner()?;
        }

        loop {
            self.print_menu()?;

            let line = match self.io.read_line() {
                Ok(line) => line,
                Err(CliError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let option = match line.parse::<MenuOption>() {
                Ok(option) => option,
                Err(ParseMenuError::NotANumber) => {
                    writeln!(self.io.writer(), "\n[ERROR] Invalid option. Enter a number.")?;
                    continue;
                }
                Err(ParseMenuError::Unknown(code)) => {
                    tracing::debug!(code, "unknown menu option");
                    writeln!(self.io.writer(), "\n[WARNING] Unrecognized option. Try again.")?;
                    continue;
                }
            };

            if option == MenuOption::Quit {
                break;
            }

            match self.dispatch(option) {
                Ok(()) => {}
                Err(CliError::EndOfInput) => break,
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }

        writeln!(
            self.io.writer(),
            "\nLeaving the game... Good luck on your next mission!"
        )?;
        self.io.writer().flush()?;
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> CliResult<()> {
        match option {
            MenuOption::Collect => self.collect(),
            MenuOption::Discard => self.discard(),
            MenuOption::Inspect => self.inspect(),
            MenuOption::Search => self.search(),
            MenuOption::Quit => Ok(()),
        }
    }

    fn banner(&mut self) -> CliResult<()> {
        let w = self.io.writer();
        writeln!(w, "{BANNER_RULE}")?;
        writeln!(w, "{:^52}", "WELCOME TO THE INVENTORY SIMULATION")?;
        writeln!(w, "{BANNER_RULE}")?;
        Ok(())
    }

    fn print_menu(&mut self) -> CliResult<()> {
        let (len, capacity) = (self.inventory.len(), self.inventory.capacity());
        let w = self.io.writer();
        writeln!(w, "\n[BACKPACK] Items: {len}/{capacity}")?;
        writeln!(w, "--- ACTION MENU ---")?;
        for option in MenuOption::ALL {
            writeln!(w, "{}. {}", option.code(), option.label())?;
        }
        write!(w, "Choose an option: ")?;
        w.flush()?;
        Ok(())
    }

    /// Print a recoverable failure in the player's terms.
    fn report(&mut self, err: &CliError) -> CliResult<()> {
        let w = self.io.writer();
        match err {
            CliError::Inventory(InventoryError::IndexOutOfRange { .. }) => {
                writeln!(w, "\n[ERROR] Invalid position. Try again.")?;
            }
            CliError::Inventory(InventoryError::Validation(msg)) => {
                writeln!(w, "\n[ERROR] {msg}. Item not added.")?;
            }
            CliError::InvalidNumber { input } => {
                writeln!(w, "\n[ERROR] '{input}' is not a valid number.")?;
            }
            other => writeln!(w, "\n[ERROR] {other}.")?,
        }
        Ok(())
    }

    fn collect(&mut self) -> CliResult<()> {
        if self.inventory.is_full() {
            writeln!(
                self.io.writer(),
                "\n[BACKPACK FULL] Maximum capacity ({}) reached. Remove an item first.",
                self.inventory.capacity()
            )?;
            return Ok(());
        }

        writeln!(self.io.writer(), "\n--- Register New Item ---")?;
        let name = self
            .io
            .ask(&format!("Item name (max {MAX_NAME_LEN} characters): "))?;
        let category = self.io.ask_word(&format!(
            "Category, e.g. Weapon, Medical, Tool (max {MAX_CATEGORY_LEN} characters): "
        ))?;
        let weight: f32 = self.io.ask_number("Weight (kg, use . for decimals): ")?;
        let quantity: i32 = self.io.ask_number("Quantity: ")?;

        let item = Item::new(name, category, weight, quantity)?;
        let (name, category) = (item.name().to_string(), item.category().to_string());
        self.inventory.insert(item)?;

        writeln!(
            self.io.writer(),
            "\n[SUCCESS] '{name}' ({category}) added to the backpack. Space remaining: {}.",
            self.inventory.remaining()
        )?;
        Ok(())
    }

    fn discard(&mut self) -> CliResult<()> {
        if self.inventory.is_empty() {
            writeln!(
                self.io.writer(),
                "\n[WARNING] The backpack is empty. Nothing to remove."
            )?;
            return Ok(());
        }

        self.inspect()?;
        writeln!(self.io.writer(), "\n--- Remove Item ---")?;
        let raw: i64 = self.io.ask_number(&format!(
            "Enter the number of the item to remove (1 to {}): ",
            self.inventory.len()
        ))?;

        // Zero and negatives are both "before the first slot".
        let position = usize::try_from(raw).unwrap_or(0);
        let removed = self.inventory.remove_at(position)?;

        writeln!(
            self.io.writer(),
            "\n[SUCCESS] Item '{}' removed from the backpack.",
            removed.name()
        )?;
        Ok(())
    }

    fn inspect(&mut self) -> CliResult<()> {
        render::inventory(self.io.writer(), &self.inventory, self.config.output)
    }

    fn search(&mut self) -> CliResult<()> {
        if self.inventory.is_empty() {
            writeln!(
                self.io.writer(),
                "\n[WARNING] The backpack is empty. No items to search."
            )?;
            return Ok(());
        }

        writeln!(self.io.writer(), "\n--- Search Item by Name ---")?;
        let name = self.io.ask("Enter the name of the item to search for: ")?;

        match self.inventory.search(&name) {
            Ok((position, item)) => {
                render::found(self.io.writer(), position, item, self.config.output)
            }
            Err(InventoryError::NotFound { name }) => {
                writeln!(
                    self.io.writer(),
                    "\n[NOT FOUND] Item '{name}' is not in the backpack."
                )?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
