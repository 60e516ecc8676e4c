//! Meal model
//!
//! A finalized, logged meal: named, dated, with an ordered list of foods.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Nutrition, ScaledFood};

/// A logged meal
///
/// Immutable once finalized; the only supported mutation is whole-meal
/// deletion from the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// Insertion order is entry order
    pub foods: Vec<ScaledFood>,
    /// When the meal was logged, local time
    pub date: DateTime<Local>,
}

impl Meal {
    /// Total nutrition across all foods in the meal
    pub fn nutrition(&self) -> Nutrition {
        self.foods.iter().map(|f| &f.nutrition).sum()
    }

    /// The local calendar date this meal belongs to
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// One point of a day-by-day nutrition series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrition {
    pub date: NaiveDate,
    pub nutrition: Nutrition,
}
