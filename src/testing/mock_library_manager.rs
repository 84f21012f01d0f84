use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::{LibraryDescription, LibraryType};
use crate::ports::LibraryManager;

/// Mock library manager for testing. Records every lookup.
#[derive(Default)]
pub struct MockLibraryManager {
    pub libraries: RefCell<BTreeMap<String, LibraryDescription>>,
    pub lookups: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl MockLibraryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(self, name: &str, project_file: impl Into<PathBuf>) -> Self {
        self.add(name, project_file.into(), LibraryType::Project);
        self
    }

    pub fn with_package(self, name: &str, root: impl Into<PathBuf>) -> Self {
        self.add(name, root.into(), LibraryType::Package);
        self
    }

    fn add(&self, name: &str, path: PathBuf, library_type: LibraryType) {
        self.libraries.borrow_mut().insert(
            name.to_string(),
            LibraryDescription { name: name.to_string(), path, library_type, version: None },
        );
    }
}

impl LibraryManager for MockLibraryManager {
    fn get_library(&self, name: &str) -> Option<LibraryDescription> {
        self.lookups.borrow_mut().push(name.to_string());
        self.libraries.borrow().get(name).cloned()
    }

    fn libraries(&self) -> Vec<LibraryDescription> {
        self.libraries.borrow().values().cloned().collect()
    }
}
