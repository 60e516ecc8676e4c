//! Derived day reports
//!
//! Daily totals and day-by-day history series over the meal journal.
//! Day boundaries use the device's local time everywhere, matching the
//! timestamps meals are logged with.

use chrono::{Duration, NaiveDate};

use crate::models::{DailyNutrition, Meal, Nutrition};

/// Chart range: one week
pub const HISTORY_WEEK_DAYS: u32 = 7;
/// Chart range: one month
pub const HISTORY_MONTH_DAYS: u32 = 30;

/// Total nutrition for one local calendar date
///
/// Sums every food of every meal whose local timestamp falls on `date`;
/// meals from other dates are excluded.
pub fn daily_totals(meals: &[Meal], date: NaiveDate) -> Nutrition {
    meals
        .iter()
        .filter(|meal| meal.calendar_date() == date)
        .map(|meal| meal.nutrition())
        .sum()
}

/// Day-by-day totals for the `days_back` days ending at `today`, inclusive
///
/// Days without meals appear as zero entries so chart series stay contiguous.
pub fn nutrition_history(meals: &[Meal], today: NaiveDate, days_back: u32) -> Vec<DailyNutrition> {
    (0..days_back)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(i64::from(offset));
            DailyNutrition {
                date,
                nutrition: daily_totals(meals, date),
            }
        })
        .collect()
}
