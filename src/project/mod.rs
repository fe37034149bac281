pub mod error;
pub mod service;
pub mod storage;
pub mod store;
pub mod types;

pub use error::ProjectError;
pub use service::{NewProject, ProjectService};
pub use storage::{get_projects_path, JsonFileStorage, ProjectPersistence};
pub use store::ProjectStore;
pub use types::{Project, Ratings, RATING_FIELDS, RATING_MAX, RATING_MIN};
