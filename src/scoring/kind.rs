use std::fmt;
use std::str::FromStr;

use crate::project::{Project, ProjectError};

/// Which score a ranking is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreKind {
    #[default]
    Ice,
    Rice,
}

impl ScoreKind {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreKind::Ice => "ICE",
            ScoreKind::Rice => "RICE",
        }
    }

    pub fn score(&self, project: &Project) -> f64 {
        match self {
            ScoreKind::Ice => super::ice(project),
            ScoreKind::Rice => super::rice(project),
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts "ice" or "rice" in any case.
impl FromStr for ScoreKind {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ice") {
            Ok(ScoreKind::Ice)
        } else if s.eq_ignore_ascii_case("rice") {
            Ok(ScoreKind::Rice)
        } else {
            Err(ProjectError::InvalidSortKey(s.to_string()))
        }
    }
}
