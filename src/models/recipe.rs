//! Recipe model
//!
//! A reusable named list of ingredients with derivable total nutrition.

use serde::{Deserialize, Serialize};

use crate::nutrition::scale_per_100;

use super::{FoodReference, Nutrition};

/// One ingredient: a food reference paired with a quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub reference: FoodReference,
    /// Quantity in the reference's unit family
    pub quantity: f64,
}

impl RecipeIngredient {
    /// Absolute nutrient amounts for this ingredient's quantity
    pub fn scaled(&self) -> Nutrition {
        scale_per_100(&self.reference.nutrition, self.quantity)
    }
}

/// A recipe
///
/// Totals are derived on demand from the ingredient list, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Total nutrition across all ingredients
    pub fn nutrition(&self) -> Nutrition {
        self.ingredients.iter().map(|i| i.scaled()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ids, Unit};

    fn reference(name: &str, n: Nutrition) -> FoodReference {
        FoodReference::new(name, n, Unit::Grams)
    }

    #[test]
    fn test_recipe_nutrition_on_demand() {
        let recipe = Recipe {
            id: ids::next_id(),
            name: "Poulet riz".to_string(),
            description: None,
            ingredients: vec![
                RecipeIngredient {
                    reference: reference("Poulet (blanc)", Nutrition::new(165.0, 31.0, 0.0, 3.6)),
                    quantity: 150.0,
                },
                RecipeIngredient {
                    reference: reference("Riz blanc cuit", Nutrition::new(130.0, 2.7, 28.0, 0.3)),
                    quantity: 200.0,
                },
            ],
        };

        let total = recipe.nutrition();
        // 248 + 260 kcal, 46.5 + 5.4 g protein
        assert_eq!(total.calories, 508.0);
        assert!((total.proteins - 51.9).abs() < 1e-9);
        assert!((total.carbs - 56.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_recipe_is_zero() {
        let recipe = Recipe {
            id: ids::next_id(),
            name: "Vide".to_string(),
            description: Some("placeholder".to_string()),
            ingredients: Vec::new(),
        };
        assert_eq!(recipe.nutrition(), Nutrition::zero());
    }
}
