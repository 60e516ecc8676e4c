//! Scaled Food model
//!
//! A food reference resolved to a concrete consumed quantity, with the
//! absolute nutrient amounts snapshotted at scale time.

use serde::{Deserialize, Serialize};

use crate::nutrition::scale_per_100;

use super::{ids, FoodReference, Nutrition};

/// A food as logged in a meal: reference identity plus absolute amounts
///
/// The amounts are computed once from the reference and never recomputed,
/// so past meals survive later edits or deletion of the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledFood {
    pub id: String,
    pub reference_id: String,
    pub name: String,
    /// Consumed quantity, in the reference's unit family
    pub quantity: f64,
    /// Absolute amounts for `quantity`, rounded per display policy
    pub nutrition: Nutrition,
}

impl ScaledFood {
    /// Scale a reference to a concrete quantity
    pub fn from_reference(reference: &FoodReference, quantity: f64) -> Self {
        Self {
            id: ids::next_id(),
            reference_id: reference.id.clone(),
            name: reference.name.clone(),
            quantity,
            nutrition: scale_per_100(&reference.nutrition, quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    #[test]
    fn test_snapshot_decoupled_from_reference() {
        let mut reference =
            FoodReference::new("Poulet (blanc)", Nutrition::new(165.0, 31.0, 0.0, 3.6), Unit::Grams);
        let food = ScaledFood::from_reference(&reference, 150.0);

        // Editing the reference afterwards must not affect the snapshot
        reference.nutrition = Nutrition::new(200.0, 40.0, 0.0, 5.0);
        assert_eq!(food.nutrition, Nutrition::new(248.0, 46.5, 0.0, 5.4));
        assert_eq!(food.reference_id, reference.id);
        assert_eq!(food.name, "Poulet (blanc)");
    }
}
