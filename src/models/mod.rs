//! Data models
//!
//! Rust structs representing the tracked entities.

mod food_reference;
mod goals;
mod meal;
mod menu;
mod nutrition;
mod preferences;
mod recipe;
mod scaled_food;

pub use food_reference::{FoodReference, Unit};
pub use goals::{MacroSplit, NutritionGoals};
pub use meal::{DailyNutrition, Meal};
pub use menu::{Menu, MenuDay};
pub use nutrition::Nutrition;
pub use preferences::{PreferenceList, UserPreferences};
pub use recipe::{Recipe, RecipeIngredient};
pub use scaled_food::ScaledFood;

pub(crate) mod ids;
