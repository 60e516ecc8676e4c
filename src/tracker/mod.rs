//! Tracking workflows
//!
//! Builders for in-progress meals, recipes and menus, and the derived
//! daily/weekly reports.

mod meal_builder;
mod menu_builder;
mod recipe_builder;
mod report;

pub use meal_builder::MealBuilder;
pub use menu_builder::MenuBuilder;
pub use recipe_builder::RecipeBuilder;
pub use report::{daily_totals, nutrition_history, HISTORY_MONTH_DAYS, HISTORY_WEEK_DAYS};
