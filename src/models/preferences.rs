//! User dietary preferences
//!
//! Three free-text label lists: allergies, dislikes and preferred foods.

use serde::{Deserialize, Serialize};

/// Which preference list an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceList {
    Allergies,
    Dislikes,
    PreferredFoods,
}

/// The user's dietary preference labels
///
/// Each list rejects exact duplicates (case-sensitive) and preserves
/// insertion order for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    #[serde(default, rename = "preferredFoods")]
    pub preferred_foods: Vec<String>,
}

impl UserPreferences {
    fn list_mut(&mut self, list: PreferenceList) -> &mut Vec<String> {
        match list {
            PreferenceList::Allergies => &mut self.allergies,
            PreferenceList::Dislikes => &mut self.dislikes,
            PreferenceList::PreferredFoods => &mut self.preferred_foods,
        }
    }

    pub fn list(&self, list: PreferenceList) -> &[String] {
        match list {
            PreferenceList::Allergies => &self.allergies,
            PreferenceList::Dislikes => &self.dislikes,
            PreferenceList::PreferredFoods => &self.preferred_foods,
        }
    }

    /// Add a trimmed label to a list. Returns false (no-op) for blank input
    /// or an exact duplicate.
    pub fn add(&mut self, list: PreferenceList, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return false;
        }
        let entries = self.list_mut(list);
        if entries.iter().any(|e| e == trimmed) {
            return false;
        }
        entries.push(trimmed.to_string());
        true
    }

    /// Remove a label by exact value. Returns false when absent.
    pub fn remove(&mut self, list: PreferenceList, label: &str) -> bool {
        let entries = self.list_mut(list);
        let before = entries.len();
        entries.retain(|e| e != label);
        entries.len() != before
    }
}
