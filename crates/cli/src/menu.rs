//! Main menu loop.

use std::io::{BufRead, Write};

use bakery_inventory::InventoryStore;
use thiserror::Error;

use crate::console::{Console, ConsoleError};
use crate::operations;

pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const GOODBYE: &str = "Closing The Bakery Inventory System. Goodbye!";
pub const INTERRUPTED: &str = "Program interrupted. Exiting...";

const MENU: &str = "\nBakery Inventory Menu:
1. Add ingredient
2. List ingredients
3. Update quantity
4. Search ingredient
5. Delete ingredient
0. Exit
";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    Search,
    Delete,
    Exit,
}

/// Menu input that is not one of the listed digits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{INVALID_CHOICE}")]
pub struct InvalidChoice(pub String);

impl core::str::FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::List),
            "3" => Ok(Self::Update),
            "4" => Ok(Self::Search),
            "5" => Ok(Self::Delete),
            "0" => Ok(Self::Exit),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}

/// Display the menu and read one choice.
pub fn show_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Result<MenuChoice, InvalidChoice>, ConsoleError> {
    console.write(MENU)?;
    let raw = console.prompt("Enter your choice: ")?;
    Ok(raw.parse())
}

/// Run the menu until the operator picks Exit.
///
/// Returns `ConsoleError::Closed` if input ends first.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut InventoryStore,
) -> Result<(), ConsoleError> {
    loop {
        let choice = match show_menu(console)? {
            Ok(choice) => choice,
            Err(err) => {
                tracing::debug!(input = %err.0, "rejected menu input");
                console.error_banner(&err.to_string())?;
                continue;
            }
        };
        tracing::debug!(?choice, records = store.len(), "dispatching menu choice");

        match choice {
            MenuChoice::Add => operations::add_ingredient(console, store)?,
            MenuChoice::List => operations::list_ingredients(console, store)?,
            MenuChoice::Update => operations::update_quantity(console, store)?,
            MenuChoice::Search => operations::search_ingredients(console, store)?,
            MenuChoice::Delete => operations::delete_ingredient(console, store)?,
            MenuChoice::Exit => {
                console.say(GOODBYE)?;
                return Ok(());
            }
        }
    }
}
