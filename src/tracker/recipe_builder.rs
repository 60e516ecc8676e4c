//! In-progress recipe construction

use crate::models::{ids, FoodReference, Nutrition, Recipe, RecipeIngredient};

/// Builder for a recipe being composed
#[derive(Debug, Default)]
pub struct RecipeBuilder {
    name: String,
    description: String,
    ingredients: Vec<RecipeIngredient>,
}

impl RecipeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn ingredients(&self) -> &[RecipeIngredient] {
        &self.ingredients
    }

    /// Running total of the ingredients added so far
    pub fn nutrition(&self) -> Nutrition {
        self.ingredients.iter().map(|i| i.scaled()).sum()
    }

    /// Pair a reference with a quantity and append it
    ///
    /// Returns false without touching the recipe when the quantity is not a
    /// positive finite number.
    pub fn add_ingredient(&mut self, reference: &FoodReference, quantity: f64) -> bool {
        if !quantity.is_finite() || quantity <= 0.0 {
            return false;
        }
        self.ingredients.push(RecipeIngredient {
            reference: reference.clone(),
            quantity,
        });
        true
    }

    /// Finalize into a recipe
    ///
    /// Requires a non-empty trimmed name and at least one ingredient;
    /// otherwise returns the builder unchanged.
    pub fn finalize(self) -> Result<Recipe, RecipeBuilder> {
        let name = self.name.trim();
        if name.is_empty() || self.ingredients.is_empty() {
            return Err(self);
        }

        let description = self.description.trim();
        let recipe = Recipe {
            id: ids::next_id(),
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            ingredients: self.ingredients,
        };
        tracing::debug!(recipe = %recipe.name, ingredients = recipe.ingredients.len(), "recipe finalized");
        Ok(recipe)
    }
}
