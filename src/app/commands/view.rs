//! Empty view generation.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::app::services::template_folders;
use crate::domain::identifiers::validation::validate_relative_folder;
use crate::domain::project::{THIS_ASSEMBLY_NAME, VIEW_BASE_FOLDERS, VIEW_FILE_EXTENSION, paths};
use crate::domain::{AppError, GeneratedFile, TemplateModel, ViewGeneratorModel, ViewName};
use crate::ports::{ApplicationEnvironment, CodeGeneratorActions, LibraryManager};

const EMPTY_VIEW_TEMPLATE: &str = "EmptyView";

/// Folders searched, in order, for view templates.
pub fn view_template_folders<E, L, A>(ctx: &AppContext<E, L, A>) -> Vec<PathBuf>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    template_folders(
        THIS_ASSEMBLY_NAME,
        ctx.environment().application_base_path(),
        VIEW_BASE_FOLDERS,
        ctx.libraries(),
        ctx.actions(),
    )
}

/// Generate an empty view (`.cshtml`).
pub fn execute<E, L, A>(
    ctx: &AppContext<E, L, A>,
    model: &ViewGeneratorModel,
) -> Result<GeneratedFile, AppError>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    let view_name = ViewName::new(&model.view_name)?;
    let relative = model.relative_folder_path.as_deref();
    if let Some(folder) = relative
        && !validate_relative_folder(folder)
    {
        return Err(AppError::InvalidRelativeFolder(folder.to_string()));
    }

    let output_path = paths::output_file(
        ctx.environment().application_base_path(),
        relative,
        &view_name,
        VIEW_FILE_EXTENSION,
    );
    let overwritten = ctx.actions().file_exists(&output_path);
    if overwritten && !model.force {
        return Err(AppError::OutputExists { path: output_path });
    }

    let template_model = TemplateModel::new()
        .with("view_name", view_name.as_str())
        .with("layout_page", model.layout_page.clone())
        .with("is_partial", model.partial_view)
        .with("application_name", ctx.environment().application_name());

    ctx.actions().add_file_from_template(
        &output_path,
        EMPTY_VIEW_TEMPLATE,
        &view_template_folders(ctx),
        &template_model,
    )?;
    info!(path = %output_path.display(), overwritten, "generated view");

    Ok(GeneratedFile { path: output_path, template: EMPTY_VIEW_TEMPLATE.to_string(), overwritten })
}
