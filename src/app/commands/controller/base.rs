//! Plumbing shared by every controller generator.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::services::template_folders;
use crate::domain::identifiers::validation::validate_relative_folder;
use crate::domain::project::{
    CODE_FILE_EXTENSION, CONTROLLER_BASE_FOLDERS, THIS_ASSEMBLY_NAME, paths,
};
use crate::domain::{
    AppError, CommandLineGeneratorModel, ControllerName, GeneratedFile, TemplateModel,
    controller_namespace,
};
use crate::ports::{ApplicationEnvironment, CodeGeneratorActions, LibraryManager};

/// Base for controller generators: template folders, namespace, output path.
pub struct ControllerGeneratorBase<'a, E, L, A>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    ctx: &'a AppContext<E, L, A>,
}

impl<'a, E, L, A> ControllerGeneratorBase<'a, E, L, A>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    pub fn new(ctx: &'a AppContext<E, L, A>) -> Self {
        Self { ctx }
    }

    /// Folders searched, in order, for controller (and view) templates.
    pub fn template_folders(&self) -> Vec<PathBuf> {
        template_folders(
            THIS_ASSEMBLY_NAME,
            self.ctx.environment().application_base_path(),
            CONTROLLER_BASE_FOLDERS,
            self.ctx.libraries(),
            self.ctx.actions(),
        )
    }

    /// `{library name of the application}.Controllers`.
    ///
    /// Command-line scaffolding has no project root-namespace setting, so the
    /// name of the library registered for the application stands in for it.
    pub fn controller_namespace(&self) -> Result<String, AppError> {
        let app_name = self.ctx.environment().application_name();
        let library = self
            .ctx
            .libraries()
            .get_library(app_name)
            .ok_or_else(|| AppError::LibraryNotFound(app_name.to_string()))?;
        Ok(controller_namespace(&library.name))
    }

    /// Compute the output file and refuse to clobber an existing one unless forced.
    pub fn validate_and_get_output_path(
        &self,
        model: &CommandLineGeneratorModel,
    ) -> Result<PathBuf, AppError> {
        let relative = model.relative_folder_path.as_deref();
        if let Some(folder) = relative
            && !validate_relative_folder(folder)
        {
            return Err(AppError::InvalidRelativeFolder(folder.to_string()));
        }

        let output_path = paths::output_file(
            self.ctx.environment().application_base_path(),
            relative,
            &model.controller_name,
            CODE_FILE_EXTENSION,
        );

        if self.ctx.actions().file_exists(&output_path) && !model.force {
            return Err(AppError::OutputExists { path: output_path });
        }

        Ok(output_path)
    }

    /// Validate, resolve, and emit `template_name` for `model`.
    pub fn emit(
        &self,
        model: &CommandLineGeneratorModel,
        template_name: &str,
    ) -> Result<GeneratedFile, AppError> {
        let class_name = ControllerName::new(&model.controller_name)?;
        let output_path = self.validate_and_get_output_path(model)?;
        let overwritten = self.ctx.actions().file_exists(&output_path);
        let namespace = self.controller_namespace()?;
        let folders = self.template_folders();
        debug!(template = template_name, folders = ?folders, "resolved template folders");

        let template_model = TemplateModel::new()
            .with("namespace", namespace)
            .with("class_name", class_name.as_str())
            .with("route_name", route_name(&class_name))
            .with("use_async", model.use_async_actions)
            .with("application_name", self.ctx.environment().application_name());

        self.ctx.actions().add_file_from_template(
            &output_path,
            template_name,
            &folders,
            &template_model,
        )?;
        info!(
            path = %output_path.display(),
            template = template_name,
            overwritten,
            "generated controller"
        );

        Ok(GeneratedFile { path: output_path, template: template_name.to_string(), overwritten })
    }
}

/// Route segment for a controller class: `ProductsController` -> `Products`.
fn route_name(class_name: &ControllerName) -> &str {
    match class_name.strip_suffix("Controller") {
        Some(stem) if !stem.is_empty() => stem,
        _ => class_name.as_str(),
    }
}
