//! Bakery inventory domain module.
//!
//! This crate contains the business rules for the ingredient inventory,
//! implemented purely as deterministic domain logic (no terminal IO).

pub mod record;
pub mod store;
pub mod table;
pub mod validation;

pub use record::{IngredientKey, IngredientRecord, StockAdjusted, Unit};
pub use store::InventoryStore;
pub use table::render_table;
