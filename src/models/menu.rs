//! Menu model
//!
//! A day-by-day meal plan. Totals and per-day averages are derived on demand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Meal, Nutrition};

/// One planned day: a date with its planned meals
///
/// Planned meals may carry empty food lists when they are placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDay {
    pub date: NaiveDate,
    pub meals: Vec<Meal>,
}

impl MenuDay {
    /// Total nutrition planned for this day
    pub fn nutrition(&self) -> Nutrition {
        self.meals.iter().map(|m| m.nutrition()).sum()
    }
}

/// A multi-day meal plan, days kept sorted by date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    pub name: String,
    pub days: Vec<MenuDay>,
}

impl Menu {
    /// Total nutrition across all days' meals
    pub fn nutrition(&self) -> Nutrition {
        self.days.iter().map(|d| d.nutrition()).sum()
    }

    /// Average daily nutrition: total divided by the number of days in the
    /// menu, counting days whose meals are all placeholders.
    pub fn per_day_average(&self) -> Nutrition {
        if self.days.is_empty() {
            return Nutrition::zero();
        }
        self.nutrition().scale(1.0 / self.days.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ids, FoodReference, ScaledFood, Unit};
    use chrono::Local;

    fn meal_with_calories(name: &str, calories: f64) -> Meal {
        let reference = FoodReference::new(
            name,
            Nutrition::new(calories, 0.0, 0.0, 0.0),
            Unit::Grams,
        );
        Meal {
            id: ids::next_id(),
            name: name.to_string(),
            foods: vec![ScaledFood::from_reference(&reference, 100.0)],
            date: Local::now(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_per_day_average() {
        let menu = Menu {
            id: ids::next_id(),
            name: "Semaine".to_string(),
            days: vec![
                MenuDay {
                    date: date("2024-01-01"),
                    meals: vec![meal_with_calories("Déjeuner", 2000.0)],
                },
                MenuDay {
                    date: date("2024-01-02"),
                    meals: vec![meal_with_calories("Dîner", 1800.0)],
                },
            ],
        };

        assert_eq!(menu.nutrition().calories, 3800.0);
        assert_eq!(menu.per_day_average().calories, 1900.0);
    }

    #[test]
    fn test_average_counts_placeholder_days() {
        let placeholder = Meal {
            id: ids::next_id(),
            name: "Déjeuner".to_string(),
            foods: Vec::new(),
            date: Local::now(),
        };
        let menu = Menu {
            id: ids::next_id(),
            name: "Plan".to_string(),
            days: vec![
                MenuDay {
                    date: date("2024-01-01"),
                    meals: vec![meal_with_calories("Déjeuner", 1500.0)],
                },
                MenuDay {
                    date: date("2024-01-02"),
                    meals: vec![placeholder],
                },
            ],
        };

        // Divided by day count, not by count of days with logged foods
        assert_eq!(menu.per_day_average().calories, 750.0);
    }

    #[test]
    fn test_empty_menu_average_is_zero() {
        let menu = Menu {
            id: ids::next_id(),
            name: "Vide".to_string(),
            days: Vec::new(),
        };
        assert_eq!(menu.per_day_average(), Nutrition::zero());
    }
}
