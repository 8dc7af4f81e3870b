//! Catalog filtering.
//!
//! A [`ToyFilter`] combines six independent criteria; a toy is kept only if it
//! satisfies every criterion that is set. Criteria arrive from the UI as raw
//! strings in [`FilterParams`] and are normalized once by
//! [`ToyFilter::from_params`].

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::toy::Toy;
use crate::types::{AgeBounds, Price};

/// Age codes offered by the filter panel.
pub const AGE_CODES: &[&str] = &["0-2", "3-5", "6-8", "9-12", "13+"];

/// Raw values of the six filter controls.
///
/// Empty strings mean the control is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl FilterParams {
    /// Whether no control was supplied at all.
    ///
    /// A submitted form with every control blank is *not* absent; it clears
    /// the filter.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.interest.is_none()
            && self.category.is_none()
            && self.max_price.is_none()
            && self.gender.is_none()
    }
}

/// Age criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeFilter {
    /// `"N+"`: toys whose own range is written `N+`.
    AndUp(u32),
    /// `"a-b"`: toys whose range overlaps `a..=b`.
    Overlapping(AgeBounds),
    /// A code that is neither; imposes no constraint.
    Unrecognized,
}

impl AgeFilter {
    /// Parse an age code from the filter panel.
    #[must_use]
    pub fn parse(code: &str) -> Self {
        let code = code.trim();
        if let Some(min) = code.strip_suffix('+') {
            return min
                .trim()
                .parse()
                .map_or(Self::Unrecognized, Self::AndUp);
        }
        match AgeBounds::parse(code) {
            Some(bounds @ AgeBounds::Between { .. }) => Self::Overlapping(bounds),
            _ => Self::Unrecognized,
        }
    }

    fn matches(&self, toy: &Toy) -> bool {
        match self {
            Self::AndUp(min) => toy.age_range.open_from() == Some(*min),
            Self::Overlapping(range) => toy
                .age_range
                .bounds()
                .is_none_or(|toy_range| toy_range.overlaps(range)),
            Self::Unrecognized => true,
        }
    }
}

/// Price criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCeiling {
    /// Toys priced at or below this amount.
    AtMost(Decimal),
    /// The ceiling was not a number; nothing matches.
    Invalid,
}

impl PriceCeiling {
    /// Parse the max-price control.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<Decimal>()
            .map_or(Self::Invalid, Self::AtMost)
    }

    fn admits(&self, price: Price) -> bool {
        match self {
            Self::AtMost(ceiling) => price.amount() <= *ceiling,
            Self::Invalid => false,
        }
    }
}

/// Normalized filter criteria. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToyFilter {
    /// Lowercased name fragment.
    pub name: Option<String>,
    pub age: Option<AgeFilter>,
    pub interest: Option<String>,
    pub category: Option<String>,
    pub max_price: Option<PriceCeiling>,
    pub gender: Option<String>,
}

/// Treat missing and empty controls alike.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl ToyFilter {
    /// Normalize raw control values into criteria.
    #[must_use]
    pub fn from_params(params: &FilterParams) -> Self {
        Self {
            name: params
                .name
                .as_deref()
                .map(|n| n.trim().to_lowercase())
                .filter(|n| !n.is_empty()),
            age: non_empty(params.age.as_ref()).map(AgeFilter::parse),
            interest: non_empty(params.interest.as_ref()).map(str::to_owned),
            category: non_empty(params.category.as_ref()).map(str::to_owned),
            // Only an empty control is unset; whitespace is an invalid ceiling
            max_price: non_empty(params.max_price.as_ref()).map(PriceCeiling::parse),
            gender: non_empty(params.gender.as_ref()).map(str::to_owned),
        }
    }

    /// Whether `toy` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, toy: &Toy) -> bool {
        if let Some(name) = &self.name
            && !toy.name.to_lowercase().contains(name.as_str())
        {
            return false;
        }
        if let Some(age) = &self.age
            && !age.matches(toy)
        {
            return false;
        }
        if let Some(interest) = &self.interest
            && !toy.has_interest(interest)
        {
            return false;
        }
        if let Some(category) = &self.category
            && toy.category != *category
        {
            return false;
        }
        if let Some(ceiling) = &self.max_price
            && !ceiling.admits(toy.price)
        {
            return false;
        }
        if let Some(gender) = &self.gender
            && toy.gender != *gender
        {
            return false;
        }
        true
    }
}

/// The ordered subsequence of `toys` that satisfies `filter`.
#[must_use]
pub fn filter_toys<'a>(toys: &'a [Toy], filter: &ToyFilter) -> Vec<&'a Toy> {
    toys.iter().filter(|toy| filter.matches(toy)).collect()
}

/// Choices offered by the filter panel, derived from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub ages: Vec<String>,
    pub interests: Vec<String>,
    pub categories: Vec<String>,
    pub genders: Vec<String>,
}

impl FilterOptions {
    /// Collect the distinct, sorted values present in `toys`.
    #[must_use]
    pub fn from_catalog(toys: &[Toy]) -> Self {
        fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
            values
                .filter(|v| !v.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .cloned()
                .collect()
        }

        Self {
            ages: AGE_CODES.iter().map(|&code| code.to_owned()).collect(),
            interests: distinct(toys.iter().flat_map(|t| t.interests.iter())),
            categories: distinct(toys.iter().map(|t| &t.category)),
            genders: distinct(toys.iter().map(|t| &t.gender)),
        }
    }
}
