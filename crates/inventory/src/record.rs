use bakery_core::Entity;

/// Normalized ingredient name: trimmed, lowercased, alphabetic.
///
/// This is the unique lookup key of the inventory. Construct it through
/// [`crate::validation::validate_name`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IngredientKey(String);

impl IngredientKey {
    pub(crate) fn from_normalized(normalized: String) -> Self {
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for IngredientKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.0)
    }
}

/// Unit of measure as entered (alphabetic, case preserved).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit(String);

impl Unit {
    pub(crate) fn from_validated(unit: String) -> Self {
        Self(unit)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.0)
    }
}

/// One inventory entry: display name, quantity on hand and unit.
///
/// Identified by its [`IngredientKey`] through [`Entity::id`].
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRecord {
    key: IngredientKey,
    display_name: String,
    quantity: f64,
    unit: Unit,
}

impl IngredientRecord {
    pub(crate) fn new(key: IngredientKey, display_name: String, quantity: f64, unit: Unit) -> Self {
        Self {
            key,
            display_name,
            quantity,
            unit,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub(crate) fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }
}

impl Entity for IngredientRecord {
    type Id = IngredientKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

/// Outcome of a successful quantity adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAdjusted {
    pub delta: f64,
    pub quantity: f64,
    pub unit: Unit,
}
