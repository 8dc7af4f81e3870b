//! Age suitability ranges such as `"3-5"` or `"13+"`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound assumed for open-ended ranges when testing overlap.
pub const OPEN_ENDED_MAX_AGE: u32 = 99;

/// Parsed bounds of an age range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBounds {
    /// A closed range, both ends inclusive.
    Between {
        /// Youngest suitable age.
        min: u32,
        /// Oldest suitable age.
        max: u32,
    },
    /// An open-ended range (`"13+"`, or a bare `"13"`).
    From {
        /// Youngest suitable age.
        min: u32,
    },
}

impl AgeBounds {
    /// Parse bounds from an age string, returning `None` if it is not numeric.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (body, open) = s
            .strip_suffix('+')
            .map_or((s, false), |body| (body.trim_end(), true));

        match body.split_once('-') {
            Some(_) if open => None,
            Some((min, max)) => {
                let min = min.trim().parse().ok()?;
                let max = max.trim().parse().ok()?;
                Some(Self::Between { min, max })
            }
            None => body.parse().ok().map(|min| Self::From { min }),
        }
    }

    /// Youngest suitable age.
    #[must_use]
    pub const fn min(&self) -> u32 {
        match *self {
            Self::Between { min, .. } | Self::From { min } => min,
        }
    }

    /// Oldest suitable age, with open-ended ranges capped at [`OPEN_ENDED_MAX_AGE`].
    #[must_use]
    pub const fn max(&self) -> u32 {
        match *self {
            Self::Between { max, .. } => max,
            Self::From { .. } => OPEN_ENDED_MAX_AGE,
        }
    }

    /// Whether two ranges share at least one age.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.max() >= other.min() && self.min() <= other.max()
    }
}

/// A toy's age range as written in the catalog, with its parsed bounds.
///
/// The raw text is kept verbatim for display and serialization. Text that
/// does not parse still round-trips; it just has no bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AgeRange {
    raw: String,
    bounds: Option<AgeBounds>,
}

impl AgeRange {
    /// Build an age range from its text form.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let bounds = AgeBounds::parse(&raw);
        Self { raw, bounds }
    }

    /// The text as it appears in the catalog.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed bounds, if the text is numeric.
    #[must_use]
    pub const fn bounds(&self) -> Option<AgeBounds> {
        self.bounds
    }

    /// The youngest age of a range written as `"N+"`.
    ///
    /// A bare `"N"` has open-ended bounds but is not written open-ended, so it
    /// returns `None` here.
    #[must_use]
    pub fn open_from(&self) -> Option<u32> {
        match self.bounds {
            Some(AgeBounds::From { min }) if self.raw.trim_end().ends_with('+') => Some(min),
            _ => None,
        }
    }
}

impl From<String> for AgeRange {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<AgeRange> for String {
    fn from(range: AgeRange) -> Self {
        range.raw
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_closed_range() {
        assert_eq!(
            AgeBounds::parse("3-5"),
            Some(AgeBounds::Between { min: 3, max: 5 })
        );
        assert_eq!(
            AgeBounds::parse(" 9 - 12 "),
            Some(AgeBounds::Between { min: 9, max: 12 })
        );
    }

    #[test]
    fn test_parse_open_ended() {
        assert_eq!(AgeBounds::parse("13+"), Some(AgeBounds::From { min: 13 }));
        assert_eq!(AgeBounds::parse("6"), Some(AgeBounds::From { min: 6 }));
        assert_eq!(AgeBounds::parse("13+").map(|b| b.max()), Some(99));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(AgeBounds::parse("toddlers"), None);
        assert_eq!(AgeBounds::parse("3-5+"), None);
        assert_eq!(AgeBounds::parse(""), None);
    }

    #[test]
    fn test_overlap() {
        let toddler = AgeBounds::Between { min: 0, max: 2 };
        let preschool = AgeBounds::Between { min: 3, max: 5 };
        let teen = AgeBounds::From { min: 13 };
        let grade_school = AgeBounds::Between { min: 5, max: 8 };

        assert!(!toddler.overlaps(&preschool));
        assert!(preschool.overlaps(&grade_school));
        assert!(!teen.overlaps(&grade_school));
        assert!(AgeBounds::From { min: 8 }.overlaps(&AgeBounds::Between { min: 9, max: 12 }));
    }

    #[test]
    fn test_open_from_requires_plus() {
        assert_eq!(AgeRange::new("13+").open_from(), Some(13));
        assert_eq!(AgeRange::new(" 8 + ").open_from(), Some(8));
        assert_eq!(AgeRange::new("13").open_from(), None);
        assert_eq!(AgeRange::new("3-5").open_from(), None);
        assert_eq!(AgeRange::new("3-5+").open_from(), None);
    }

    #[test]
    fn test_age_range_keeps_raw_text() {
        let range = AgeRange::new("all ages");
        assert_eq!(range.as_str(), "all ages");
        assert_eq!(range.bounds(), None);
        assert_eq!(String::from(range), "all ages");
    }
}
