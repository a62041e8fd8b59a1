//! Cohort Filter - Demographic and time-window response subsetting.
//!
//! Missing data always passes: a criterion only excludes a response when the
//! response actually carries the field and the value falls outside it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Timestamp;
use crate::domain::survey::Response;

/// Wildcard value that matches every respondent.
pub const MATCH_ALL: &str = "all";

/// Matcher for a categorical demographic field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DemographicMatch {
    #[default]
    All,
    Exactly(String),
}

impl DemographicMatch {
    /// Returns true if a response with this field value passes.
    pub fn admits(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (DemographicMatch::All, _) => true,
            (DemographicMatch::Exactly(_), None) => true,
            (DemographicMatch::Exactly(wanted), Some(actual)) => wanted == actual,
        }
    }
}

impl From<String> for DemographicMatch {
    fn from(value: String) -> Self {
        if value == MATCH_ALL {
            DemographicMatch::All
        } else {
            DemographicMatch::Exactly(value)
        }
    }
}

impl From<&str> for DemographicMatch {
    fn from(value: &str) -> Self {
        DemographicMatch::from(value.to_string())
    }
}

impl From<DemographicMatch> for String {
    fn from(value: DemographicMatch) -> Self {
        match value {
            DemographicMatch::All => MATCH_ALL.to_string(),
            DemographicMatch::Exactly(v) => v,
        }
    }
}

impl fmt::Display for DemographicMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemographicMatch::All => write!(f, "{}", MATCH_ALL),
            DemographicMatch::Exactly(v) => write!(f, "{}", v),
        }
    }
}

/// Inclusive age bounds, serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    /// Creates a range; reversed bounds are swapped.
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Returns true if `age` lies within the bounds, inclusive.
    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl From<(u32, u32)> for AgeRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self::new(min, max)
    }
}

impl From<AgeRange> for (u32, u32) {
    fn from(range: AgeRange) -> Self {
        (range.min, range.max)
    }
}

/// Predicate narrowing a response set before analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    #[serde(default)]
    pub gender: DemographicMatch,
    #[serde(default)]
    pub location: DemographicMatch,
    /// Earliest accepted `createdAt`, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from: Option<Timestamp>,
    /// Latest accepted `createdAt`, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_to: Option<Timestamp>,
}

impl CohortFilter {
    /// A filter that admits every response.
    pub fn everyone() -> Self {
        Self::default()
    }

    /// Restricts to an inclusive age range.
    pub fn with_age_range(mut self, min: u32, max: u32) -> Self {
        self.age_range = Some(AgeRange::new(min, max));
        self
    }

    /// Restricts to a gender; `"all"` clears the restriction.
    pub fn with_gender(mut self, gender: impl Into<DemographicMatch>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Restricts to a location; `"all"` clears the restriction.
    pub fn with_location(mut self, location: impl Into<DemographicMatch>) -> Self {
        self.location = location.into();
        self
    }

    /// Restricts `createdAt` to an inclusive window. Either bound may be open.
    pub fn with_created_between(mut self, from: Option<Timestamp>, to: Option<Timestamp>) -> Self {
        self.created_from = from;
        self.created_to = to;
        self
    }

    /// Returns true if the response belongs to the cohort.
    pub fn admits(&self, response: &Response) -> bool {
        let age_ok = match (self.age_range, response.age()) {
            (Some(range), Some(age)) => range.contains(age),
            _ => true,
        };

        let from_ok = self
            .created_from
            .map_or(true, |from| !response.created_at.is_before(&from));
        let to_ok = self
            .created_to
            .map_or(true, |to| !response.created_at.is_after(&to));

        age_ok
            && self.gender.admits(response.gender())
            && self.location.admits(response.location())
            && from_ok
            && to_ok
    }

    /// Returns the responses that pass, preserving input order.
    pub fn apply<'a>(&self, responses: &'a [Response]) -> Vec<&'a Response> {
        responses.iter().filter(|r| self.admits(r)).collect()
    }
}
