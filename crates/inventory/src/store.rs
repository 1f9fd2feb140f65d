//! In-memory inventory store.
//!
//! The store owns every [`IngredientRecord`], keyed by normalized name. All
//! operations take the name as typed by the operator and normalize it here, so
//! `" Flour "` and `"flour"` always address the same record.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use bakery_core::{DomainError, DomainResult, Entity};

use crate::record::{IngredientKey, IngredientRecord, StockAdjusted};
use crate::validation::{validate_name, validate_unit, INVALID_NUMBER, NEGATIVE_QUANTITY};

pub const NEGATIVE_RESULT: &str = "Resulting quantity cannot be negative. Update cancelled.";

/// Process-lifetime mapping from [`IngredientKey`] to [`IngredientRecord`].
#[derive(Debug, Default, Clone)]
pub struct InventoryStore {
    records: HashMap<IngredientKey, IngredientRecord>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a record exists for `name`. Invalid names never exist.
    pub fn contains(&self, name: &str) -> bool {
        validate_name(name)
            .map(|key| self.records.contains_key(&key))
            .unwrap_or(false)
    }

    pub fn get(&self, name: &str) -> Option<&IngredientRecord> {
        self.lookup(name).ok()
    }

    /// Like [`Self::get`], but reports why the lookup failed.
    pub fn lookup(&self, name: &str) -> DomainResult<&IngredientRecord> {
        let key = validate_name(name)?;
        self.records.get(&key).ok_or_else(|| missing(name))
    }

    /// Create a new record. Fails with `Conflict` if the name is taken.
    pub fn create(&mut self, name: &str, quantity: f64, unit: &str) -> DomainResult<&IngredientRecord> {
        let key = validate_name(name)?;
        if self.records.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "{} already exists.",
                name.trim()
            )));
        }
        self.write(key, name, quantity, unit)
    }

    /// Overwrite an existing record, display name included. Fails with `NotFound` if absent.
    pub fn replace(&mut self, name: &str, quantity: f64, unit: &str) -> DomainResult<&IngredientRecord> {
        let key = validate_name(name)?;
        if !self.records.contains_key(&key) {
            return Err(missing(name));
        }
        self.write(key, name, quantity, unit)
    }

    fn write(
        &mut self,
        key: IngredientKey,
        name: &str,
        quantity: f64,
        unit: &str,
    ) -> DomainResult<&IngredientRecord> {
        let unit = validate_unit(unit)?;
        if !quantity.is_finite() {
            return Err(DomainError::validation(INVALID_NUMBER));
        }
        if quantity < 0.0 {
            return Err(DomainError::validation(NEGATIVE_QUANTITY));
        }

        tracing::debug!(key = %key, quantity, unit = %unit, "writing ingredient record");

        let record = IngredientRecord::new(key.clone(), name.trim().to_string(), quantity, unit);
        match self.records.entry(key) {
            Entry::Occupied(mut slot) => {
                slot.insert(record);
                Ok(slot.into_mut())
            }
            Entry::Vacant(slot) => Ok(slot.insert(record)),
        }
    }

    /// Apply a signed delta to the quantity of `name`.
    ///
    /// The record is left untouched when the result would be negative or non-finite.
    pub fn adjust(&mut self, name: &str, delta: f64) -> DomainResult<StockAdjusted> {
        let key = validate_name(name)?;
        let record = self.records.get_mut(&key).ok_or_else(|| missing(name))?;

        if !delta.is_finite() {
            return Err(DomainError::validation(INVALID_NUMBER));
        }

        let previous = record.quantity();
        let quantity = previous + delta;
        if !quantity.is_finite() {
            tracing::debug!(key = %key, previous, delta, "rejected overflowing adjustment");
            return Err(DomainError::validation(INVALID_NUMBER));
        }
        if quantity < 0.0 {
            tracing::debug!(key = %key, previous, delta, "rejected negative adjustment");
            return Err(DomainError::invariant(NEGATIVE_RESULT));
        }

        record.set_quantity(quantity);
        tracing::debug!(key = %key, previous, delta, quantity, "adjusted ingredient quantity");

        Ok(StockAdjusted {
            delta,
            quantity,
            unit: record.unit().clone(),
        })
    }

    /// Remove and return the record for `name`.
    pub fn remove(&mut self, name: &str) -> DomainResult<IngredientRecord> {
        let key = validate_name(name)?;
        let record = self.records.remove(&key).ok_or_else(|| missing(name))?;
        tracing::debug!(key = %key, "removed ingredient record");
        Ok(record)
    }

    /// Records whose key contains the normalized `fragment`, in list order.
    pub fn search(&self, fragment: &str) -> DomainResult<Vec<&IngredientRecord>> {
        let needle = validate_name(fragment)?;
        let mut matches: Vec<_> = self
            .records
            .values()
            .filter(|record| record.id().as_str().contains(needle.as_str()))
            .collect();
        sort_for_display(&mut matches);
        Ok(matches)
    }

    /// All records, sorted case-insensitively by display name.
    pub fn list(&self) -> Vec<&IngredientRecord> {
        let mut all: Vec<_> = self.records.values().collect();
        sort_for_display(&mut all);
        all
    }
}

fn sort_for_display(records: &mut [&IngredientRecord]) {
    records.sort_by_cached_key(|record| (record.display_name().to_lowercase(), record.id().clone()));
}

fn missing(name: &str) -> DomainError {
    DomainError::not_found(format!("{} does not exist in inventory.", name.trim()))
}
