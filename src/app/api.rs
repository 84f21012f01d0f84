//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{
    FilesystemCodeGeneratorActions, PACKAGE_ROOT_ENV, ProjectEnvironment, ProjectLibraryManager,
    resolve_package_root,
};
use crate::app::{
    AppContext,
    commands::{controller, templates, view},
};
use crate::ports::ApplicationEnvironment;

pub use crate::app::commands::templates::TemplateScope;
pub use crate::domain::{AppError, CommandLineGeneratorModel, GeneratedFile, ViewGeneratorModel};

type ProjectContext =
    AppContext<ProjectEnvironment, ProjectLibraryManager, FilesystemCodeGeneratorActions>;

/// Create an `AppContext` for the project at `project_dir`.
fn create_context(project_dir: &Path) -> Result<ProjectContext, AppError> {
    let environment = ProjectEnvironment::discover(project_dir)?;
    let package_root = resolve_package_root(
        std::env::var_os(PACKAGE_ROOT_ENV),
        environment.config().templates.package_root.as_deref(),
        environment.application_base_path(),
    );
    let libraries =
        ProjectLibraryManager::new(&environment, environment.project_file(), package_root);
    Ok(AppContext::new(environment, libraries, FilesystemCodeGeneratorActions::new()))
}

/// Generate a controller in the current directory's project.
pub fn generate_controller(model: &CommandLineGeneratorModel) -> Result<GeneratedFile, AppError> {
    generate_controller_at(std::env::current_dir()?, model)
}

/// Generate a controller in the project at `project_dir`.
pub fn generate_controller_at(
    project_dir: impl Into<PathBuf>,
    model: &CommandLineGeneratorModel,
) -> Result<GeneratedFile, AppError> {
    let project_dir: PathBuf = project_dir.into();
    let ctx = create_context(&project_dir)?;
    controller::execute(&ctx, model)
}

/// Generate an empty view in the project at `project_dir`.
pub fn generate_view_at(
    project_dir: impl Into<PathBuf>,
    model: &ViewGeneratorModel,
) -> Result<GeneratedFile, AppError> {
    let project_dir: PathBuf = project_dir.into();
    let ctx = create_context(&project_dir)?;
    view::execute(&ctx, model)
}

/// Template folders searched for `scope` in the project at `project_dir`.
pub fn template_folders_at(
    project_dir: impl Into<PathBuf>,
    scope: TemplateScope,
) -> Result<Vec<PathBuf>, AppError> {
    let project_dir: PathBuf = project_dir.into();
    let ctx = create_context(&project_dir)?;
    Ok(templates::execute(&ctx, scope))
}
