//! Interactive flows for each menu entry.
//!
//! Every flow takes the console and the store explicitly. Input errors are
//! shown as a banner and either re-prompt or return to the main menu; only
//! console failures propagate.

use std::io::{BufRead, Write};

use bakery_inventory::validation::{normalize_name, validate_name};
use bakery_inventory::{render_table, InventoryStore, StockAdjusted};

use crate::console::{Console, ConsoleError};

pub const NO_INGREDIENTS: &str = "No ingredients in inventory.";
pub const ACTION_CANCELLED: &str = "Action cancelled.";
pub const INVALID_ACTION: &str = "Invalid choice. Action cancelled.";

/// Add new ingredients, or increase/replace existing ones.
pub fn add_ingredient<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut InventoryStore,
) -> Result<(), ConsoleError> {
    loop {
        let name = console.prompt("Enter ingredient name: ")?;
        if let Err(err) = validate_name(&name) {
            console.error_banner(err.message())?;
            continue;
        }
        let shown = name.trim();

        if store.contains(&name) {
            let action = console.prompt(&format!(
                "{shown} already exists. Do you want to (I)ncrease, (R)eplace, or (C)ancel? "
            ))?;
            match action.trim().to_uppercase().as_str() {
                "I" => {
                    if let Some(adjusted) = adjust_one(console, store, &name)? {
                        console.say(format!(
                            "Increased {shown} by {:.2}. New quantity: {:.2} {}",
                            adjusted.delta, adjusted.quantity, adjusted.unit
                        ))?;
                    }
                }
                "R" => {
                    let quantity = console.read_number("Enter new quantity: ", false)?;
                    let unit = console.prompt("Enter unit: ")?;
                    match store.replace(&name, quantity, &unit) {
                        Ok(record) => console.say(format!(
                            "Replaced {shown} with new quantity: {:.2} {}",
                            record.quantity(),
                            record.unit()
                        ))?,
                        Err(err) => return console.error_banner(err.message()),
                    }
                }
                "C" => console.error_banner(ACTION_CANCELLED)?,
                _ => console.error_banner(INVALID_ACTION)?,
            }
        } else {
            let quantity = console.read_number("Enter quantity: ", false)?;
            let unit = console.prompt("Enter unit: ")?;
            match store.create(&name, quantity, &unit) {
                Ok(record) => console.say(format!(
                    "Added {shown} with quantity: {:.2} {}",
                    record.quantity(),
                    record.unit()
                ))?,
                Err(err) => return console.error_banner(err.message()),
            }
        }

        if console.exit_or_continue(
            "\nPress 'c' to add a new ingredient or type 'exit' to return to the main menu: ",
        )? {
            return Ok(());
        }
    }
}

/// Show the whole inventory until the operator leaves.
pub fn list_ingredients<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &InventoryStore,
) -> Result<(), ConsoleError> {
    loop {
        if store.is_empty() {
            console.error_banner(NO_INGREDIENTS)?;
        } else {
            console.write(&render_table(store.list()))?;
        }

        if console.exit_or_continue("\nType 'exit' to return to the main menu: ")? {
            return Ok(());
        }
    }
}

/// Apply signed deltas to existing ingredients.
pub fn update_quantity<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut InventoryStore,
) -> Result<(), ConsoleError> {
    loop {
        let name = console.prompt("Enter ingredient name to update: ")?;
        let Some(adjusted) = adjust_one(console, store, &name)? else {
            return Ok(());
        };
        console.say(format!(
            "Updated {}. New quantity: {:.2} {}",
            name.trim(),
            adjusted.quantity,
            adjusted.unit
        ))?;

        if console.exit_or_continue(
            "\nType 'c' to continue or type 'exit' to return to the main menu: ",
        )? {
            return Ok(());
        }
    }
}

/// One update step for `name`: look it up, ask for a delta, apply it once.
///
/// Returns `None` after reporting an input error.
fn adjust_one<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut InventoryStore,
    name: &str,
) -> Result<Option<StockAdjusted>, ConsoleError> {
    if let Err(err) = store.lookup(name) {
        console.error_banner(err.message())?;
        return Ok(None);
    }

    let delta = console.read_number("Enter quantity change (can be negative): ", true)?;
    match store.adjust(name, delta) {
        Ok(adjusted) => Ok(Some(adjusted)),
        Err(err) => {
            console.error_banner(err.message())?;
            Ok(None)
        }
    }
}

/// Case-insensitive substring search over ingredient names.
pub fn search_ingredients<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &InventoryStore,
) -> Result<(), ConsoleError> {
    loop {
        let query = console.prompt("Enter ingredient name to search: ")?;
        let matches = match store.search(&query) {
            Ok(matches) => matches,
            Err(err) => return console.error_banner(err.message()),
        };

        if matches.is_empty() {
            let needle = normalize_name(&query).unwrap_or_default();
            return console.error_banner(&format!("No ingredients found matching '{needle}'."));
        }
        tracing::debug!(query = %query.trim(), hits = matches.len(), "search matched");
        console.write(&render_table(matches))?;

        if console.exit_or_continue(
            "\nPress 'c' to search again or type 'exit' to return to the main menu: ",
        )? {
            return Ok(());
        }
    }
}

/// Remove ingredients by name.
pub fn delete_ingredient<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut InventoryStore,
) -> Result<(), ConsoleError> {
    loop {
        let name = console.prompt("Enter ingredient name to delete: ")?;
        if let Err(err) = store.remove(&name) {
            return console.error_banner(err.message());
        }
        console.say(format!("Deleted {} from inventory.", name.trim()))?;

        if console.exit_or_continue(
            "\nPress 'c' to delete another ingredient or type 'exit' to return to the main menu: ",
        )? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(script: &str) -> TestConsole {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn written(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn store_with(items: &[(&str, f64, &str)]) -> InventoryStore {
        let mut store = InventoryStore::new();
        for (name, quantity, unit) in items {
            store.create(name, *quantity, unit).unwrap();
        }
        store
    }

    #[test]
    fn add_creates_record_and_reports_it() {
        let mut store = InventoryStore::new();
        let mut console = console("Sugar\n5\nkg\nexit\n");

        add_ingredient(&mut console, &mut store).unwrap();

        assert_eq!(store.get("sugar").unwrap().quantity(), 5.0);
        assert!(written(console).contains("Added Sugar with quantity: 5.00 kg"));
    }

    #[test]
    fn add_increase_applies_delta_exactly_once() {
        let mut store = store_with(&[("Flour", 10.0, "kg")]);
        let mut console = console(" flour \nI\n2.5\nexit\n");

        add_ingredient(&mut console, &mut store).unwrap();

        assert_eq!(store.get("flour").unwrap().quantity(), 12.5);
        assert!(written(console).contains("Increased flour by 2.50. New quantity: 12.50 kg"));
    }

    #[test]
    fn add_replace_overwrites_record() {
        let mut store = store_with(&[("Milk", 1.0, "l")]);
        let mut console = console("MILK\nr\n4\nL\nexit\n");

        add_ingredient(&mut console, &mut store).unwrap();

        let record = store.get("milk").unwrap();
        assert_eq!(record.display_name(), "MILK");
        assert_eq!(record.quantity(), 4.0);
        assert_eq!(record.unit().as_str(), "L");
    }

    #[test]
    fn add_cancel_and_unknown_action_leave_record() {
        let mut store = store_with(&[("Milk", 1.0, "l")]);
        let mut console = console("milk\nC\nc\nmilk\nX\nexit\n");

        add_ingredient(&mut console, &mut store).unwrap();

        assert_eq!(store.get("milk").unwrap().quantity(), 1.0);
        let out = written(console);
        assert!(out.contains(ACTION_CANCELLED));
        assert!(out.contains(INVALID_ACTION));
    }

    #[test]
    fn add_reprompts_on_invalid_name() {
        let mut store = InventoryStore::new();
        let mut console = console("\nrye flour\nRye\n1\nkg\nexit\n");

        add_ingredient(&mut console, &mut store).unwrap();

        assert!(store.contains("rye"));
        let out = written(console);
        assert!(out.contains("Ingredient name cannot be empty. Please try again"));
        assert!(out.contains("Invalid ingredient name. Please use alphabetic characters only."));
    }

    #[test]
    fn add_with_invalid_unit_returns_to_menu() {
        let mut store = InventoryStore::new();
        let mut console = console("Rye\n1\nk9\n");

        add_ingredient(&mut console, &mut store).unwrap();

        assert!(store.is_empty());
        assert!(written(console).contains("Invalid unit. Please use alphabetic characters only."));
    }

    #[test]
    fn replace_with_invalid_unit_keeps_original_record() {
        let mut store = store_with(&[("Milk", 1.0, "l")]);
        let mut console = console("MILK\nR\n4\nk9\n");

        add_ingredient(&mut console, &mut store).unwrap();

        let record = store.get("milk").unwrap();
        assert_eq!(record.display_name(), "Milk");
        assert_eq!(record.quantity(), 1.0);
        assert_eq!(record.unit().as_str(), "l");
        assert!(written(console).contains("Invalid unit. Please use alphabetic characters only."));
    }

    #[test]
    fn update_rejects_negative_result() {
        let mut store = store_with(&[("Flour", 1.0, "kg")]);
        let mut console = console("flour\n-5\n");

        update_quantity(&mut console, &mut store).unwrap();

        assert_eq!(store.get("flour").unwrap().quantity(), 1.0);
        assert!(written(console).contains("Resulting quantity cannot be negative. Update cancelled."));
    }

    #[test]
    fn update_continues_with_another_item() {
        let mut store = store_with(&[("Flour", 1.0, "kg"), ("Sugar", 2.0, "kg")]);
        let mut console = console("flour\n4\nc\nsugar\n-1\nexit\n");

        update_quantity(&mut console, &mut store).unwrap();

        assert_eq!(store.get("flour").unwrap().quantity(), 5.0);
        assert_eq!(store.get("sugar").unwrap().quantity(), 1.0);
        let out = written(console);
        assert!(out.contains("Updated flour. New quantity: 5.00 kg"));
        assert!(out.contains("Updated sugar. New quantity: 1.00 kg"));
    }

    #[test]
    fn update_missing_reports_and_returns() {
        let mut store = InventoryStore::new();
        let mut console = console("Yeast\n");

        update_quantity(&mut console, &mut store).unwrap();

        assert!(written(console).contains("Yeast does not exist in inventory."));
    }

    #[test]
    fn list_empty_reports_no_ingredients() {
        let store = InventoryStore::new();
        let mut console = console("exit\n");

        list_ingredients(&mut console, &store).unwrap();

        assert!(written(console).contains(NO_INGREDIENTS));
    }

    #[test]
    fn search_shows_matches_or_not_found() {
        let store = store_with(&[("Flour", 1.0, "kg"), ("Cornflour", 2.0, "kg")]);

        let mut hit = console("FLOUR\nexit\n");
        search_ingredients(&mut hit, &store).unwrap();
        let out = written(hit);
        assert!(out.contains("Cornflour"));
        assert!(out.contains("Flour "));

        let mut miss = console(" Salt \n");
        search_ingredients(&mut miss, &store).unwrap();
        assert!(written(miss).contains("No ingredients found matching 'salt'."));
    }

    #[test]
    fn delete_removes_record() {
        let mut store = store_with(&[("Butter", 2.0, "kg")]);
        let mut console = console("butter\nexit\n");

        delete_ingredient(&mut console, &mut store).unwrap();

        assert!(!store.contains("Butter"));
        assert!(written(console).contains("Deleted butter from inventory."));
    }

    #[test]
    fn search_continues_with_another_query() {
        let store = store_with(&[("Flour", 1.0, "kg"), ("Sugar", 2.0, "kg")]);
        let mut console = console("flour\nc\nsugar\nexit\n");

        search_ingredients(&mut console, &store).unwrap();

        let out = written(console);
        assert_eq!(out.matches("Current Inventory:").count(), 2);
        assert_eq!(out.matches("Enter ingredient name to search: ").count(), 2);
        assert!(out.contains("Flour "));
        assert!(out.contains("Sugar "));
    }

    #[test]
    fn delete_continues_with_another_item() {
        let mut store = store_with(&[("Butter", 2.0, "kg"), ("Eggs", 12.0, "units")]);
        let mut console = console("butter\nc\neggs\nexit\n");

        delete_ingredient(&mut console, &mut store).unwrap();

        assert!(!store.contains("Butter"));
        assert!(!store.contains("Eggs"));
        assert!(store.is_empty());
        let out = written(console);
        assert!(out.contains("Deleted butter from inventory."));
        assert!(out.contains("Deleted eggs from inventory."));
    }

    #[test]
    fn delete_missing_reports_does_not_exist() {
        let mut store = InventoryStore::new();
        let mut console = console("Butter\n");

        delete_ingredient(&mut console, &mut store).unwrap();

        assert!(written(console).contains("Butter does not exist in inventory."));
    }
}
