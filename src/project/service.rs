use super::error::ProjectError;
use super::store::ProjectStore;
use super::types::{Project, Ratings};

/// Raw values collected for a new project, before validation.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub ratings: Ratings,
}

/// Creation and lookup entry point the commands talk to.
pub struct ProjectService {
    store: ProjectStore,
}

impl ProjectService {
    pub fn new(store: ProjectStore) -> Self {
        Self { store }
    }

    /// Validate `input` and add it to the store. Nothing is stored if any check fails.
    pub fn create_project(&mut self, input: NewProject) -> Result<Project, ProjectError> {
        let project = Project::new(input.name, input.description, input.ratings)?;
        self.store.add(project.clone())?;
        Ok(project)
    }

    pub fn get_projects(&self) -> Vec<Project> {
        self.store.find_all()
    }

    pub fn get_project(&self, name: &str) -> Result<&Project, ProjectError> {
        self.store.find_by_name(name)
    }

    pub fn clear(&mut self) -> Result<(), ProjectError> {
        self.store.clear()
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }
}
