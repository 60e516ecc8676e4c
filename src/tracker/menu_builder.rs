//! In-progress menu construction
//!
//! A menu is assembled one day at a time: planned meals accumulate into the
//! day under construction, days accumulate into the menu, and finalize sorts
//! the days by date.

use chrono::{Local, NaiveDate};

use crate::models::{ids, Meal, Menu, MenuDay};

/// Builder for a multi-day meal plan
#[derive(Debug, Default)]
pub struct MenuBuilder {
    name: String,
    days: Vec<MenuDay>,
    pending_meals: Vec<Meal>,
}

impl MenuBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn days(&self) -> &[MenuDay] {
        &self.days
    }

    pub fn pending_meals(&self) -> &[Meal] {
        &self.pending_meals
    }

    /// Add a named placeholder meal to the day under construction
    ///
    /// Planned meals start with an empty food list. Returns false for a
    /// blank name.
    pub fn add_planned_meal(&mut self, name: &str, date: NaiveDate) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.pending_meals.push(Meal {
            id: ids::next_id(),
            name: name.to_string(),
            foods: Vec::new(),
            date: date
                .and_hms_opt(0, 0, 0)
                .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
                .unwrap_or_else(Local::now),
        });
        true
    }

    /// Close the day under construction and add it to the menu
    ///
    /// Requires at least one pending meal; otherwise a no-op returning false.
    pub fn add_day(&mut self, date: NaiveDate) -> bool {
        if self.pending_meals.is_empty() {
            return false;
        }
        self.days.push(MenuDay {
            date,
            meals: std::mem::take(&mut self.pending_meals),
        });
        true
    }

    /// Finalize into a menu, days sorted by date
    ///
    /// Requires a non-empty trimmed name and at least one day; otherwise
    /// returns the builder unchanged. Meals still pending (never committed
    /// via `add_day`) are not part of the result.
    pub fn finalize(self) -> Result<Menu, MenuBuilder> {
        let name = self.name.trim();
        if name.is_empty() || self.days.is_empty() {
            return Err(self);
        }

        let mut days = self.days;
        days.sort_by_key(|d| d.date);

        let menu = Menu {
            id: ids::next_id(),
            name: name.to_string(),
            days,
        };
        tracing::debug!(menu = %menu.name, days = menu.days.len(), "menu finalized");
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_day_requires_a_meal() {
        let mut builder = MenuBuilder::new();
        assert!(!builder.add_day(date("2024-01-01")));
        assert!(builder.add_planned_meal("Petit-déjeuner", date("2024-01-01")));
        assert!(builder.add_day(date("2024-01-01")));
        assert!(builder.pending_meals().is_empty());
        assert_eq!(builder.days().len(), 1);
    }

    #[test]
    fn test_finalize_sorts_days_by_date() {
        let mut builder = MenuBuilder::new();
        builder.set_name("Semaine 1");
        builder.add_planned_meal("Dîner", date("2024-01-03"));
        builder.add_day(date("2024-01-03"));
        builder.add_planned_meal("Déjeuner", date("2024-01-01"));
        builder.add_day(date("2024-01-01"));
        builder.add_planned_meal("Déjeuner", date("2024-01-02"));
        builder.add_day(date("2024-01-02"));

        let menu = builder.finalize().unwrap();
        let dates: Vec<NaiveDate> = menu.days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-01-01"), date("2024-01-02"), date("2024-01-03")]
        );
    }

    #[test]
    fn test_finalize_requires_name_and_day() {
        let mut builder = MenuBuilder::new();
        builder.add_planned_meal("Déjeuner", date("2024-01-01"));
        builder.add_day(date("2024-01-01"));
        let mut builder = builder.finalize().unwrap_err();

        builder.set_name("Plan");
        assert!(builder.finalize().is_ok());
    }

    #[test]
    fn test_placeholder_meals_have_no_foods() {
        let mut builder = MenuBuilder::new();
        builder.set_name("Plan");
        builder.add_planned_meal("Déjeuner", date("2024-01-01"));
        builder.add_day(date("2024-01-01"));
        let menu = builder.finalize().unwrap();
        assert!(menu.days[0].meals[0].foods.is_empty());
        assert_eq!(menu.per_day_average().calories, 0.0);
    }
}
