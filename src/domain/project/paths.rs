//! Type-safe path catalog for scaffolding artifacts.
//!
//! Output placement and template lookup use these accessors instead of
//! ad-hoc `.join("...")` chains.

use std::path::{Path, PathBuf};

/// Folder (and namespace suffix) controllers live in.
pub const CONTROLLERS_FOLDER_NAME: &str = "Controllers";

/// Extension of generated code files.
pub const CODE_FILE_EXTENSION: &str = ".cs";

/// Extension of generated view files.
pub const VIEW_FILE_EXTENSION: &str = ".cshtml";

/// Extension of template sources.
pub const TEMPLATE_FILE_EXTENSION: &str = ".jinja";

/// Folder under a root that holds template base folders.
pub const TEMPLATES_FOLDER_NAME: &str = "Templates";

/// Library name of the scaffolder itself, used to locate its packaged templates.
pub const THIS_ASSEMBLY_NAME: &str = "mvcgen";

/// Optional per-project configuration file.
pub const CONFIG_FILENAME: &str = "mvcgen.toml";

/// Project manifest carrying the application name.
pub const PROJECT_JSON_FILENAME: &str = "project.json";

/// Base template folders searched by controller generators.
pub const CONTROLLER_BASE_FOLDERS: &[&str] = &["ControllerGenerator", "ViewGenerator"];

/// Base template folders searched by view generators.
pub const VIEW_BASE_FOLDERS: &[&str] = &["ViewGenerator"];

/// Folder that receives generated output.
///
/// An absent or empty relative folder yields the base path unchanged.
pub fn output_folder(base_path: &Path, relative_folder_path: Option<&str>) -> PathBuf {
    match relative_folder_path {
        Some(relative) if !relative.is_empty() => base_path.join(relative),
        _ => base_path.to_path_buf(),
    }
}

/// `{output_folder}/{file_stem}{extension}`
pub fn output_file(
    base_path: &Path,
    relative_folder_path: Option<&str>,
    file_stem: &str,
    extension: &str,
) -> PathBuf {
    output_folder(base_path, relative_folder_path).join(format!("{}{}", file_stem, extension))
}

/// `{root}/Templates/{base_folder}`
pub fn template_folder(root: &Path, base_folder: &str) -> PathBuf {
    root.join(TEMPLATES_FOLDER_NAME).join(base_folder)
}

/// `{folder}/{template_name}.jinja`
pub fn template_file(folder: &Path, template_name: &str) -> PathBuf {
    folder.join(format!("{}{}", template_name, TEMPLATE_FILE_EXTENSION))
}

/// `{base_path}/mvcgen.toml`
pub fn config(base_path: &Path) -> PathBuf {
    base_path.join(CONFIG_FILENAME)
}

/// `{base_path}/project.json`
pub fn project_json(base_path: &Path) -> PathBuf {
    base_path.join(PROJECT_JSON_FILENAME)
}
