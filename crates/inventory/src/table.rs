//! Fixed-width inventory table.

use core::fmt::Write as _;

use crate::record::IngredientRecord;

const RULE_WIDTH: usize = 40;

/// Render records as the "Current Inventory" table, in the order given.
pub fn render_table<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a IngredientRecord>,
{
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\nCurrent Inventory:");
    let _ = writeln!(out, "{:<20} {:<10} {:<10}", "Name", "Quantity", "Unit");
    let _ = writeln!(out, "{rule}");
    for record in records {
        let _ = writeln!(
            out,
            "{:<20} {:<10} {:<10}",
            record.display_name(),
            format!("{:.2}", record.quantity()),
            record.unit(),
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}
