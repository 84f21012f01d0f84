pub mod catalogs;
pub mod filesystem;
pub mod project_environment;
pub mod project_library_manager;
pub mod template;

pub use filesystem::FilesystemCodeGeneratorActions;
pub use project_environment::ProjectEnvironment;
pub use project_library_manager::{PACKAGE_ROOT_ENV, ProjectLibraryManager, resolve_package_root};
