//! Storage keys
//!
//! One key per persisted collection, all under a single prefix.

pub const MEALS: &str = "nutritri_meals";
pub const GOALS: &str = "nutritri_goals";
pub const FOOD_REFERENCES: &str = "nutritri_food_references";
pub const RECIPES: &str = "nutritri_recipes";
pub const MENUS: &str = "nutritri_menus";
pub const PREFERENCES: &str = "nutritri_preferences";
