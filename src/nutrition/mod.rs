//! Nutrition computation
//!
//! Quantity scaling and goal comparison.

mod progress;
mod scaler;

pub use progress::{bar_width, goal_percentage, CalorieStatus, GoalProgress};
pub use scaler::scale_per_100;
