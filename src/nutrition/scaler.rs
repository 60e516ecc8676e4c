//! Quantity scaler
//!
//! Converts a per-100-unit nutrient profile into absolute amounts for an
//! actual consumed quantity.

use crate::models::Nutrition;

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale a per-100-unit profile to a concrete quantity
///
/// Each value is `per_100 * quantity / 100`. Calories round to the nearest
/// integer, macros to the nearest 0.1 g. The quantity is not clamped here;
/// callers reject non-positive or non-finite quantities before scaling.
pub fn scale_per_100(per_100: &Nutrition, quantity: f64) -> Nutrition {
    let ratio = quantity / 100.0;
    Nutrition {
        calories: (per_100.calories * ratio).round(),
        proteins: round1(per_100.proteins * ratio),
        carbs: round1(per_100.carbs * ratio),
        fats: round1(per_100.fats * ratio),
    }
}
