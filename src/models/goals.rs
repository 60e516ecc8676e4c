//! Nutrition goals model

use serde::{Deserialize, Serialize};

/// Daily nutrition targets
///
/// A single active instance per user, replaced wholesale on save.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub calories: f64, // kcal
    pub proteins: f64, // grams
    pub carbs: f64,    // grams
    pub fats: f64,     // grams
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            proteins: 150.0,
            carbs: 250.0,
            fats: 70.0,
        }
    }
}

/// Share of planned energy contributed by each macro, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub proteins: i64,
    pub carbs: i64,
    pub fats: i64,
}

impl NutritionGoals {
    /// Energy split of the macro targets, at 4/4/9 kcal per gram
    pub fn macro_split(&self) -> MacroSplit {
        let protein_cal = self.proteins * 4.0;
        let carbs_cal = self.carbs * 4.0;
        let fats_cal = self.fats * 9.0;
        let total = protein_cal + carbs_cal + fats_cal;

        if total <= 0.0 {
            return MacroSplit {
                proteins: 0,
                carbs: 0,
                fats: 0,
            };
        }

        MacroSplit {
            proteins: (protein_cal / total * 100.0).round() as i64,
            carbs: (carbs_cal / total * 100.0).round() as i64,
            fats: (fats_cal / total * 100.0).round() as i64,
        }
    }
}
