//! Food Reference model
//!
//! A reusable food profile holding nutritional values per 100 units.

use serde::{Deserialize, Serialize};

use super::{ids, Nutrition};

/// Measurement unit family for a food reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Unit {
    /// Solids, per 100 g
    #[default]
    #[serde(rename = "g")]
    Grams,
    /// Liquids, per 100 ml
    #[serde(rename = "ml")]
    Milliliters,
    /// Discrete items (eggs, slices), per 100 pieces
    #[serde(rename = "unit")]
    Piece,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Milliliters => "ml",
            Unit::Piece => "unit",
        }
    }
}

/// A food reference: nutritional values per 100 reference-units
///
/// References are immutable snapshots. Editing one replaces the list entry
/// wholesale; scaled copies taken from an earlier version keep their amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodReference {
    pub id: String,
    pub name: String,
    /// Values per 100 units of `unit`
    pub nutrition: Nutrition,
    pub unit: Unit,
}

impl FoodReference {
    pub fn new(name: impl Into<String>, nutrition: Nutrition, unit: Unit) -> Self {
        Self {
            id: ids::next_id(),
            name: name.into(),
            nutrition,
            unit,
        }
    }

    /// A manually entered reference: raw values typed by the user, unit
    /// defaulting to grams. Distinct entries with the same name are allowed;
    /// each manual add is an independent snapshot.
    pub fn manual(name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self::new(name, nutrition, Unit::Grams)
    }
}
