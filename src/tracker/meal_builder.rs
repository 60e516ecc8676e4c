//! In-progress meal construction
//!
//! Collects scaled foods and finalizes them into an immutable meal.
//! Invalid input is a silent no-op: the UI disables the action, the builder
//! just refuses it.

use chrono::{DateTime, Local};

use crate::models::{ids, FoodReference, Meal, Nutrition, ScaledFood};

/// Builder for a meal being composed
#[derive(Debug, Default)]
pub struct MealBuilder {
    name: String,
    foods: Vec<ScaledFood>,
}

impl MealBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn foods(&self) -> &[ScaledFood] {
        &self.foods
    }

    /// Running total of the foods added so far
    pub fn nutrition(&self) -> Nutrition {
        self.foods.iter().map(|f| &f.nutrition).sum()
    }

    /// Scale a reference and append it to the meal
    ///
    /// Returns false without touching the meal when the quantity is not a
    /// positive finite number.
    pub fn add_food(&mut self, reference: &FoodReference, quantity: f64) -> bool {
        if !quantity.is_finite() || quantity <= 0.0 {
            return false;
        }
        self.foods.push(ScaledFood::from_reference(reference, quantity));
        true
    }

    /// Remove a previously added food by id. Returns false when absent.
    pub fn remove_food(&mut self, food_id: &str) -> bool {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != food_id);
        self.foods.len() != before
    }

    /// Finalize into a logged meal
    ///
    /// Requires a non-empty trimmed name and at least one food; otherwise
    /// returns None and leaves the builder untouched.
    pub fn finalize(self, now: DateTime<Local>) -> Result<Meal, MealBuilder> {
        let name = self.name.trim();
        if name.is_empty() || self.foods.is_empty() {
            return Err(self);
        }

        let meal = Meal {
            id: ids::next_id(),
            name: name.to_string(),
            foods: self.foods,
            date: now,
        };
        tracing::debug!(meal = %meal.name, foods = meal.foods.len(), "meal finalized");
        Ok(meal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    fn chicken() -> FoodReference {
        FoodReference::new(
            "Poulet (blanc)",
            Nutrition::new(165.0, 31.0, 0.0, 3.6),
            Unit::Grams,
        )
    }

    #[test]
    fn test_add_food_rejects_bad_quantity() {
        let mut builder = MealBuilder::new();
        let reference = chicken();
        assert!(!builder.add_food(&reference, 0.0));
        assert!(!builder.add_food(&reference, -50.0));
        assert!(!builder.add_food(&reference, f64::NAN));
        assert!(!builder.add_food(&reference, f64::INFINITY));
        assert!(builder.foods().is_empty());
    }

    #[test]
    fn test_finalize_requires_name_and_food() {
        let builder = MealBuilder::new();
        let builder = builder.finalize(Local::now()).unwrap_err();

        let mut builder = builder;
        builder.set_name("   ");
        builder.add_food(&chicken(), 150.0);
        // Whitespace-only name still rejects
        let mut builder = builder.finalize(Local::now()).unwrap_err();

        builder.set_name("Déjeuner");
        let meal = builder.finalize(Local::now()).unwrap();
        assert_eq!(meal.name, "Déjeuner");
        assert_eq!(meal.foods.len(), 1);
        assert_eq!(meal.nutrition(), Nutrition::new(248.0, 46.5, 0.0, 5.4));
    }

    #[test]
    fn test_rejection_keeps_in_progress_foods() {
        let mut builder = MealBuilder::new();
        builder.add_food(&chicken(), 150.0);
        // No name yet: finalize fails but the added food survives
        let builder = builder.finalize(Local::now()).unwrap_err();
        assert_eq!(builder.foods().len(), 1);
    }

    #[test]
    fn test_remove_food() {
        let mut builder = MealBuilder::new();
        builder.add_food(&chicken(), 150.0);
        builder.add_food(&chicken(), 80.0);
        let id = builder.foods()[0].id.clone();
        assert!(builder.remove_food(&id));
        assert!(!builder.remove_food(&id));
        assert_eq!(builder.foods().len(), 1);
        assert_eq!(builder.foods()[0].quantity, 80.0);
    }

    #[test]
    fn test_entry_order_preserved() {
        let mut builder = MealBuilder::new();
        let rice = FoodReference::new(
            "Riz blanc cuit",
            Nutrition::new(130.0, 2.7, 28.0, 0.3),
            Unit::Grams,
        );
        builder.set_name("Dîner");
        builder.add_food(&chicken(), 150.0);
        builder.add_food(&rice, 200.0);
        let meal = builder.finalize(Local::now()).unwrap();
        assert_eq!(meal.foods[0].name, "Poulet (blanc)");
        assert_eq!(meal.foods[1].name, "Riz blanc cuit");
    }
}
