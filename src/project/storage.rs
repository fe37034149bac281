use super::error::ProjectError;
use super::types::Project;
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where a store's projects are loaded from and written back to.
pub trait ProjectPersistence {
    /// Load every persisted project in stored order. Nothing persisted yet is an empty list.
    fn load(&self) -> Result<Vec<Project>, ProjectError>;

    /// Replace the persisted projects with `projects`.
    fn save(&self, projects: &[Project]) -> Result<(), ProjectError>;
}

/// Get the default projects file path (~/.config/parpt/projects.json)
pub fn get_projects_path() -> PathBuf {
    crate::config::get_config_dir().join("projects.json")
}

/// Projects kept as a pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectPersistence for JsonFileStorage {
    /// Missing and zero-length files both load as an empty list.
    fn load(&self) -> Result<Vec<Project>, ProjectError> {
        if !self.path.exists() || fs::metadata(&self.path)?.len() == 0 {
            debug!(path = %self.path.display(), "no persisted projects");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let projects: Vec<Project> = serde_json::from_reader(file)?;

        for project in projects.iter().filter(|p| !p.ratings.is_valid()) {
            warn!(
                name = %project.name,
                "persisted project has ratings outside 1-5"
            );
        }

        debug!(path = %self.path.display(), count = projects.len(), "loaded projects");
        Ok(projects)
    }

    /// Overwrites the file atomically so a failed write never leaves it half-written.
    fn save(&self, projects: &[Project]) -> Result<(), ProjectError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = AtomicWriteFile::open(&self.path)?;
        serde_json::to_writer_pretty(&mut file, projects)?;
        file.commit()?;

        debug!(path = %self.path.display(), count = projects.len(), "saved projects");
        Ok(())
    }
}
