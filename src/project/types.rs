use serde::{Deserialize, Serialize};

use super::error::ProjectError;

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// Display names of the five ratings, in the order they are asked and reported.
pub const RATING_FIELDS: [&str; 5] = ["Impact", "Confidence", "Ease", "Reach", "Effort"];

/// The five subjective 1-5 ratings a project is scored from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings {
    pub impact: i32,
    pub confidence: i32,
    pub ease: i32,
    pub reach: i32,
    pub effort: i32,
}

impl Ratings {
    /// Named components in display order.
    pub fn components(&self) -> [(&'static str, i32); 5] {
        let [impact, confidence, ease, reach, effort] = RATING_FIELDS;
        [
            (impact, self.impact),
            (confidence, self.confidence),
            (ease, self.ease),
            (reach, self.reach),
            (effort, self.effort),
        ]
    }

    /// Check every rating is within 1-5, reporting the first offender.
    pub fn validate(&self) -> Result<(), ProjectError> {
        for (field, value) in self.components() {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(ProjectError::InvalidRating {
                    field,
                    value: i64::from(value),
                });
            }
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A candidate project. Immutable once created.
///
/// Serialized flat, e.g.
/// ```json
/// { "name": "Search", "description": "Full text search", "impact": 4,
///   "confidence": 3, "ease": 2, "reach": 5, "effort": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub ratings: Ratings,
}

impl Project {
    /// Build a project, rejecting blank text fields and ratings outside 1-5.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        ratings: Ratings,
    ) -> Result<Self, ProjectError> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() {
            return Err(ProjectError::EmptyField("name"));
        }
        if description.trim().is_empty() {
            return Err(ProjectError::EmptyField("description"));
        }
        ratings.validate()?;

        Ok(Self {
            name,
            description,
            ratings,
        })
    }
}
