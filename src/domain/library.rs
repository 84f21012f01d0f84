use std::path::{Path, PathBuf};

/// How a library is materialized on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryType {
    /// A project in source form; `path` points at its project file.
    Project,
    /// An installed package; `path` points at its root directory.
    Package,
}

/// Metadata for a resolvable library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDescription {
    pub name: String,
    pub path: PathBuf,
    pub library_type: LibraryType,
    pub version: Option<String>,
}

impl LibraryDescription {
    /// Directory under which the library keeps its `Templates/` folder.
    pub fn root_folder(&self) -> Option<&Path> {
        match self.library_type {
            LibraryType::Project => self.path.parent(),
            LibraryType::Package => Some(self.path.as_path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_root_is_parent_of_project_file() {
        let lib = LibraryDescription {
            name: "Shop".into(),
            path: PathBuf::from("/src/Shop/Shop.csproj"),
            library_type: LibraryType::Project,
            version: None,
        };
        assert_eq!(lib.root_folder(), Some(Path::new("/src/Shop")));
    }

    #[test]
    fn package_root_is_path_itself() {
        let lib = LibraryDescription {
            name: "mvcgen".into(),
            path: PathBuf::from("/opt/mvcgen"),
            library_type: LibraryType::Package,
            version: Some("0.4.1".into()),
        };
        assert_eq!(lib.root_folder(), Some(Path::new("/opt/mvcgen")));
    }
}
