use super::error::ProjectError;
use super::storage::ProjectPersistence;
use super::types::Project;
use tracing::debug;

/// Ordered set of projects keyed by exact, case-sensitive name.
///
/// When backed by a [`ProjectPersistence`], every mutation is written through
/// before returning. A failed write leaves the in-memory state untouched.
/// Not synchronized: wrap in a mutex before sharing between threads.
pub struct ProjectStore {
    projects: Vec<Project>,
    persistence: Option<Box<dyn ProjectPersistence>>,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl ProjectStore {
    /// Create an empty store with no persistence behind it.
    pub fn in_memory() -> Self {
        Self {
            projects: Vec::new(),
            persistence: None,
        }
    }

    /// Create a store pre-populated from `persistence`, writing through to it afterwards.
    pub fn open(persistence: Box<dyn ProjectPersistence>) -> Result<Self, ProjectError> {
        let projects = persistence.load()?;
        debug!(count = projects.len(), "opened project store");
        Ok(Self {
            projects,
            persistence: Some(persistence),
        })
    }

    /// Append a project. Fails with [`ProjectError::NameTaken`] if the name is in use.
    pub fn add(&mut self, project: Project) -> Result<(), ProjectError> {
        if self.projects.iter().any(|p| p.name == project.name) {
            return Err(ProjectError::NameTaken(project.name));
        }

        self.projects.push(project);
        if let Err(e) = self.write_through() {
            self.projects.pop();
            return Err(e);
        }

        debug!(count = self.projects.len(), "added project");
        Ok(())
    }

    /// First project whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Result<&Project, ProjectError> {
        self.projects
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ProjectError::NotFound(name.to_string()))
    }

    /// Snapshot of all projects in insertion order.
    pub fn find_all(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Remove every project.
    pub fn clear(&mut self) -> Result<(), ProjectError> {
        let previous = std::mem::take(&mut self.projects);
        if let Err(e) = self.write_through() {
            self.projects = previous;
            return Err(e);
        }

        debug!(removed = previous.len(), "cleared project store");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn write_through(&self) -> Result<(), ProjectError> {
        match &self.persistence {
            Some(persistence) => persistence.save(&self.projects),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{JsonFileStorage, Ratings};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn sample(name: &str) -> Project {
        Project::new(
            name,
            "A test project description",
            Ratings {
                impact: 4,
                confidence: 3,
                ease: 5,
                reach: 2,
                effort: 3,
            },
        )
        .unwrap()
    }

    /// Records every save and can be told to start failing.
    #[derive(Clone, Default)]
    struct RecordingPersistence {
        saves: Rc<RefCell<Vec<Vec<String>>>>,
        fail: Rc<Cell<bool>>,
    }

    impl ProjectPersistence for RecordingPersistence {
        fn load(&self) -> Result<Vec<Project>, ProjectError> {
            Ok(vec![sample("Seeded")])
        }

        fn save(&self, projects: &[Project]) -> Result<(), ProjectError> {
            if self.fail.get() {
                return Err(std::io::Error::other("disk full").into());
            }
            self.saves
                .borrow_mut()
                .push(projects.iter().map(|p| p.name.clone()).collect());
            Ok(())
        }
    }

    #[test]
    fn test_add_then_find_by_name() {
        let mut store = ProjectStore::in_memory();
        let project = sample("Alpha");
        store.add(project.clone()).unwrap();

        let found = store.find_by_name("Alpha").unwrap();
        assert_eq!(found, &project);
    }

    #[test]
    fn test_add_duplicate_name_keeps_first() {
        let mut store = ProjectStore::in_memory();
        store.add(sample("Alpha")).unwrap();

        let mut second = sample("Alpha");
        second.description = "Different".to_string();
        let err = store.add(second).unwrap_err();

        assert!(matches!(err, ProjectError::NameTaken(ref n) if n == "Alpha"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_all()[0].description, "A test project description");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut store = ProjectStore::in_memory();
        store.add(sample("Alpha")).unwrap();
        store.add(sample("alpha")).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.find_by_name("ALPHA").is_err());
    }

    #[test]
    fn test_find_by_name_missing() {
        let store = ProjectStore::in_memory();
        let err = store.find_by_name("Ghost").unwrap_err();
        assert!(matches!(err, ProjectError::NotFound(ref n) if n == "Ghost"));
    }

    #[test]
    fn test_find_all_is_a_snapshot() {
        let mut store = ProjectStore::in_memory();
        store.add(sample("Alpha")).unwrap();

        let mut snapshot = store.find_all();
        snapshot.clear();
        snapshot.push(sample("Intruder"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_all()[0].name, "Alpha");
    }

    #[test]
    fn test_find_all_preserves_insertion_order() {
        let mut store = ProjectStore::in_memory();
        for name in ["C", "A", "B"] {
            store.add(sample(name)).unwrap();
        }
        let names: Vec<_> = store.find_all().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = ProjectStore::in_memory();
        store.add(sample("Alpha")).unwrap();
        store.add(sample("Beta")).unwrap();

        store.clear().unwrap();
        assert!(store.find_all().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_loads_and_writes_through() {
        let persistence = RecordingPersistence::default();
        let saves = persistence.saves.clone();

        let mut store = ProjectStore::open(Box::new(persistence)).unwrap();
        assert_eq!(store.find_all()[0].name, "Seeded");

        store.add(sample("Alpha")).unwrap();
        store.clear().unwrap();

        let saves = saves.borrow();
        assert_eq!(saves.len(), 2);
        assert_eq!(saves[0], vec!["Seeded", "Alpha"]);
        assert!(saves[1].is_empty());
    }

    #[test]
    fn test_failed_write_rolls_back_add() {
        let persistence = RecordingPersistence::default();
        let fail = persistence.fail.clone();
        let mut store = ProjectStore::open(Box::new(persistence)).unwrap();

        fail.set(true);
        let err = store.add(sample("Alpha")).unwrap_err();

        assert!(err.is_io());
        assert_eq!(store.len(), 1);
        assert!(store.find_by_name("Alpha").is_err());
    }

    #[test]
    fn test_failed_write_rolls_back_clear() {
        let persistence = RecordingPersistence::default();
        let fail = persistence.fail.clone();
        let mut store = ProjectStore::open(Box::new(persistence)).unwrap();

        fail.set(true);
        assert!(store.clear().is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_json_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");

        let mut store = ProjectStore::open(Box::new(JsonFileStorage::new(&path))).unwrap();
        store.add(sample("Alpha")).unwrap();
        store.add(sample("Beta")).unwrap();
        drop(store);

        let reopened = ProjectStore::open(Box::new(JsonFileStorage::new(&path))).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.find_by_name("Beta").unwrap(), &sample("Beta"));
    }
}
