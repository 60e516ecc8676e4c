//! Goal comparison
//!
//! Percentages against targets, progress-bar clamping and the qualitative
//! calorie status indicator.

use serde::{Deserialize, Serialize};

use crate::models::{Nutrition, NutritionGoals};

/// Percentage of a goal reached, rounded, uncapped
///
/// A zero or negative goal yields 0 rather than a division error.
pub fn goal_percentage(current: f64, goal: f64) -> i64 {
    if goal <= 0.0 {
        return 0;
    }
    (current / goal * 100.0).round() as i64
}

/// Progress-bar width for a raw percentage, clamped to 0..=100
///
/// Only the rendered bar is capped; the numeric percentage shown next to it
/// stays uncapped.
pub fn bar_width(percentage: i64) -> u8 {
    percentage.clamp(0, 100) as u8
}

/// Qualitative indicator derived from the calories percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalorieStatus {
    /// At most 80% of target
    Under,
    /// Between 80% and 95%, exclusive
    Near,
    /// 95% to 105%, inclusive
    OnTarget,
    /// Above 105%
    Over,
}

impl CalorieStatus {
    pub fn from_percentage(percentage: i64) -> Self {
        if percentage > 105 {
            CalorieStatus::Over
        } else if percentage >= 95 {
            CalorieStatus::OnTarget
        } else if percentage > 80 {
            CalorieStatus::Near
        } else {
            CalorieStatus::Under
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalorieStatus::Under => "under",
            CalorieStatus::Near => "near",
            CalorieStatus::OnTarget => "on-target",
            CalorieStatus::Over => "over",
        }
    }
}

/// Per-nutrient progress of a day's totals against the active goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub calories: i64,
    pub proteins: i64,
    pub carbs: i64,
    pub fats: i64,
    pub status: CalorieStatus,
}

impl GoalProgress {
    pub fn compute(current: &Nutrition, goals: &NutritionGoals) -> Self {
        let calories = goal_percentage(current.calories, goals.calories);
        Self {
            calories,
            proteins: goal_percentage(current.proteins, goals.proteins),
            carbs: goal_percentage(current.carbs, goals.carbs),
            fats: goal_percentage(current.fats, goals.fats),
            status: CalorieStatus::from_percentage(calories),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_percentage() {
        assert_eq!(goal_percentage(0.0, 2000.0), 0);
        assert_eq!(goal_percentage(2000.0, 2000.0), 100);
        assert_eq!(goal_percentage(2100.0, 2000.0), 105);
        assert_eq!(goal_percentage(248.0, 2000.0), 12);
    }

    #[test]
    fn test_zero_goal_fallback() {
        assert_eq!(goal_percentage(100.0, 0.0), 0);
        assert_eq!(goal_percentage(100.0, -5.0), 0);
    }

    #[test]
    fn test_percentage_uncapped_bar_clamped() {
        let pct = goal_percentage(2500.0, 2000.0);
        assert_eq!(pct, 125);
        assert_eq!(bar_width(pct), 100);
        assert_eq!(bar_width(42), 42);
        assert_eq!(bar_width(-3), 0);
    }

    #[test]
    fn test_status_buckets() {
        assert_eq!(CalorieStatus::from_percentage(12), CalorieStatus::Under);
        assert_eq!(CalorieStatus::from_percentage(80), CalorieStatus::Under);
        assert_eq!(CalorieStatus::from_percentage(81), CalorieStatus::Near);
        assert_eq!(CalorieStatus::from_percentage(94), CalorieStatus::Near);
        assert_eq!(CalorieStatus::from_percentage(95), CalorieStatus::OnTarget);
        assert_eq!(CalorieStatus::from_percentage(105), CalorieStatus::OnTarget);
        assert_eq!(CalorieStatus::from_percentage(106), CalorieStatus::Over);
    }

    #[test]
    fn test_goal_progress_compute() {
        let totals = Nutrition::new(248.0, 46.5, 0.0, 5.4);
        let progress = GoalProgress::compute(&totals, &NutritionGoals::default());
        assert_eq!(progress.calories, 12);
        assert_eq!(progress.proteins, 31);
        assert_eq!(progress.carbs, 0);
        assert_eq!(progress.fats, 8);
        assert_eq!(progress.status, CalorieStatus::Under);
    }
}
