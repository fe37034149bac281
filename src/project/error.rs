use thiserror::Error;

/// Everything that can go wrong while creating, storing or reporting on projects.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("{field} must be between 1 and 5, got {value}")]
    InvalidRating { field: &'static str, value: i64 },

    #[error("All scores must be between 1 and 5.")]
    RatingsOutOfRange,

    #[error("Project {0} cannot be empty.")]
    EmptyField(&'static str),

    #[error("Invalid sort option '{0}'. Use 'ice' or 'rice'.")]
    InvalidSortKey(String),

    #[error("Project name '{0}' is already taken. Please choose a different name.")]
    NameTaken(String),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProjectError {
    /// Malformed input: bad ratings, blank fields, unknown sort keys.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProjectError::InvalidRating { .. }
                | ProjectError::RatingsOutOfRange
                | ProjectError::EmptyField(_)
                | ProjectError::InvalidSortKey(_)
        )
    }

    /// Failures reported by the persistence or report collaborators.
    pub fn is_io(&self) -> bool {
        matches!(self, ProjectError::Io(_) | ProjectError::Serialization(_))
    }
}
