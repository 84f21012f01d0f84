//! Library lookup over the application project and the scaffolder package.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::project::THIS_ASSEMBLY_NAME;
use crate::domain::{LibraryDescription, LibraryType};
use crate::ports::{ApplicationEnvironment, LibraryManager};

/// Environment variable overriding `[templates] package_root`.
pub const PACKAGE_ROOT_ENV: &str = "MVCGEN_PACKAGE_ROOT";

/// In-process registry of resolvable libraries.
#[derive(Debug, Clone, Default)]
pub struct ProjectLibraryManager {
    libraries: BTreeMap<String, LibraryDescription>,
}

impl ProjectLibraryManager {
    /// Register the application as a project library and, when a package root
    /// is known, the scaffolder itself as a package library.
    pub fn new<E: ApplicationEnvironment>(
        environment: &E,
        project_file: Option<&Path>,
        package_root: Option<PathBuf>,
    ) -> Self {
        let mut manager = Self::default();

        // A project without a manifest is addressed through a file name under
        // its base path so that the project root is the base path.
        let project_path = project_file.map(Path::to_path_buf).unwrap_or_else(|| {
            environment.application_base_path().join(environment.application_name())
        });
        manager.register(LibraryDescription {
            name: environment.application_name().to_string(),
            path: project_path,
            library_type: LibraryType::Project,
            version: None,
        });

        if let Some(root) = package_root {
            if environment.application_name() == THIS_ASSEMBLY_NAME {
                warn!(
                    package_root = %root.display(),
                    "application shares the scaffolder library name; package templates ignored"
                );
                return manager;
            }
            manager.register(LibraryDescription {
                name: THIS_ASSEMBLY_NAME.to_string(),
                path: root,
                library_type: LibraryType::Package,
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            });
        }

        manager
    }

    pub fn register(&mut self, library: LibraryDescription) {
        self.libraries.insert(library.name.clone(), library);
    }
}

impl LibraryManager for ProjectLibraryManager {
    fn get_library(&self, name: &str) -> Option<LibraryDescription> {
        self.libraries.get(name).cloned()
    }

    fn libraries(&self) -> Vec<LibraryDescription> {
        self.libraries.values().cloned().collect()
    }
}

/// Resolve the scaffolder package root.
///
/// The environment override wins over the configured value. Relative paths
/// resolve against the project base path.
pub fn resolve_package_root(
    env_override: Option<OsString>,
    configured: Option<&Path>,
    base_path: &Path,
) -> Option<PathBuf> {
    let raw = env_override
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))?;
    Some(if raw.is_absolute() { raw } else { base_path.join(raw) })
}
