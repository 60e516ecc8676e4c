//! Typed repository over a storage backend
//!
//! One method pair per persisted collection. Reads fall back to the
//! documented default when the key is absent or its blob no longer parses;
//! writes replace the whole collection (single local writer).

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    FoodReference, Meal, Menu, Nutrition, NutritionGoals, Recipe, Unit, UserPreferences,
};

use super::backend::{StorageBackend, StoreResult};
use super::keys;

/// Starter food references seeded on first run
fn default_food_references() -> Vec<FoodReference> {
    vec![
        FoodReference::new(
            "Poulet (blanc)",
            Nutrition::new(165.0, 31.0, 0.0, 3.6),
            Unit::Grams,
        ),
        FoodReference::new(
            "Riz blanc cuit",
            Nutrition::new(130.0, 2.7, 28.0, 0.3),
            Unit::Grams,
        ),
        FoodReference::new(
            "Œuf entier",
            Nutrition::new(155.0, 12.6, 0.6, 11.3),
            Unit::Piece,
        ),
    ]
}

/// Typed access to the persisted collections
pub struct Repository<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Repository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn load_or<T, F>(&self, key: &str, default: F) -> StoreResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.backend.get_raw(key)? {
            None => Ok(default()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(err) => {
                    // Corrupt blob: keep the session alive with the default
                    tracing::warn!(key, %err, "unparseable stored value, using default");
                    Ok(default())
                }
            },
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_raw(key, &raw)
    }

    // Meals

    pub fn load_meals(&self) -> StoreResult<Vec<Meal>> {
        self.load_or(keys::MEALS, Vec::new)
    }

    pub fn save_meals(&mut self, meals: &[Meal]) -> StoreResult<()> {
        self.save(keys::MEALS, &meals)
    }

    /// Append a finalized meal to the journal
    pub fn add_meal(&mut self, meal: Meal) -> StoreResult<()> {
        let mut meals = self.load_meals()?;
        tracing::info!(meal = %meal.name, date = %meal.date, "logging meal");
        meals.push(meal);
        self.save_meals(&meals)
    }

    /// Delete a meal by id. Returns false when no meal matched.
    pub fn delete_meal(&mut self, id: &str) -> StoreResult<bool> {
        let mut meals = self.load_meals()?;
        let before = meals.len();
        meals.retain(|m| m.id != id);
        let removed = meals.len() != before;
        if removed {
            self.save_meals(&meals)?;
        }
        Ok(removed)
    }

    // Goals

    pub fn load_goals(&self) -> StoreResult<NutritionGoals> {
        self.load_or(keys::GOALS, NutritionGoals::default)
    }

    pub fn save_goals(&mut self, goals: &NutritionGoals) -> StoreResult<()> {
        self.save(keys::GOALS, goals)
    }

    // Food references

    pub fn load_food_references(&self) -> StoreResult<Vec<FoodReference>> {
        self.load_or(keys::FOOD_REFERENCES, default_food_references)
    }

    pub fn save_food_references(&mut self, references: &[FoodReference]) -> StoreResult<()> {
        self.save(keys::FOOD_REFERENCES, &references)
    }

    /// Append a reference to the canonical list
    ///
    /// The sole append point: lookup results and manual entries are returned
    /// to the caller, which adds them here exactly once.
    pub fn add_food_reference(&mut self, reference: FoodReference) -> StoreResult<()> {
        let mut references = self.load_food_references()?;
        references.push(reference);
        self.save_food_references(&references)
    }

    /// Replace the reference with the same id. Returns false when absent.
    ///
    /// Past meals keep the scaled snapshots they were logged with; edits
    /// only affect foods added afterwards.
    pub fn update_food_reference(&mut self, reference: FoodReference) -> StoreResult<bool> {
        let mut references = self.load_food_references()?;
        let Some(slot) = references.iter_mut().find(|r| r.id == reference.id) else {
            return Ok(false);
        };
        *slot = reference;
        self.save_food_references(&references)?;
        Ok(true)
    }

    /// Delete a reference by id. Returns false when absent.
    pub fn delete_food_reference(&mut self, id: &str) -> StoreResult<bool> {
        let mut references = self.load_food_references()?;
        let before = references.len();
        references.retain(|r| r.id != id);
        let removed = references.len() != before;
        if removed {
            self.save_food_references(&references)?;
        }
        Ok(removed)
    }

    // Recipes

    pub fn load_recipes(&self) -> StoreResult<Vec<Recipe>> {
        self.load_or(keys::RECIPES, Vec::new)
    }

    pub fn save_recipes(&mut self, recipes: &[Recipe]) -> StoreResult<()> {
        self.save(keys::RECIPES, &recipes)
    }

    pub fn add_recipe(&mut self, recipe: Recipe) -> StoreResult<()> {
        let mut recipes = self.load_recipes()?;
        recipes.push(recipe);
        self.save_recipes(&recipes)
    }

    pub fn delete_recipe(&mut self, id: &str) -> StoreResult<bool> {
        let mut recipes = self.load_recipes()?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        let removed = recipes.len() != before;
        if removed {
            self.save_recipes(&recipes)?;
        }
        Ok(removed)
    }

    // Menus

    pub fn load_menus(&self) -> StoreResult<Vec<Menu>> {
        self.load_or(keys::MENUS, Vec::new)
    }

    pub fn save_menus(&mut self, menus: &[Menu]) -> StoreResult<()> {
        self.save(keys::MENUS, &menus)
    }

    pub fn add_menu(&mut self, menu: Menu) -> StoreResult<()> {
        let mut menus = self.load_menus()?;
        menus.push(menu);
        self.save_menus(&menus)
    }

    pub fn delete_menu(&mut self, id: &str) -> StoreResult<bool> {
        let mut menus = self.load_menus()?;
        let before = menus.len();
        menus.retain(|m| m.id != id);
        let removed = menus.len() != before;
        if removed {
            self.save_menus(&menus)?;
        }
        Ok(removed)
    }

    // Preferences

    pub fn load_preferences(&self) -> StoreResult<UserPreferences> {
        self.load_or(keys::PREFERENCES, UserPreferences::default)
    }

    pub fn save_preferences(&mut self, preferences: &UserPreferences) -> StoreResult<()> {
        self.save(keys::PREFERENCES, preferences)
    }
}
