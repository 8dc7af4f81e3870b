//! The catalog record.

use serde::{Deserialize, Serialize};

use crate::types::{AgeRange, Price, ToyId};

/// A toy in the catalog.
///
/// Loaded once from the catalog source and never mutated afterwards. The JSON
/// form uses camelCase keys (`ageRange`, `safetyNotes`); descriptive fields
/// that a catalog entry omits default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toy {
    pub id: ToyId,
    pub name: String,
    pub price: Price,
    pub age_range: AgeRange,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_notes: Option<String>,
    /// Image URL, relative to the site root or absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Toy {
    /// Whether the toy lists `tag` among its interests (exact match).
    #[must_use]
    pub fn has_interest(&self, tag: &str) -> bool {
        self.interests.iter().any(|t| t == tag)
    }

    /// Safety notes, treating blank text as absent.
    #[must_use]
    pub fn safety_notes(&self) -> Option<&str> {
        self.safety_notes
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
