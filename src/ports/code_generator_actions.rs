//! Code-generation side effects.
//!
//! Generators decide *what* to write; this port owns *how* a template is
//! located, rendered, and persisted. Existence checks go through the same
//! port so generators never touch the filesystem directly.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, TemplateModel};

/// Port for rendering templates into output files.
pub trait CodeGeneratorActions {
    /// Render `template_name` with `model` and write the result to `output_path`.
    ///
    /// `template_folders` are searched in order; the first folder containing
    /// the template wins. Implementations may fall back to built-in templates.
    /// Parent directories of `output_path` are created as needed.
    fn add_file_from_template(
        &self,
        output_path: &Path,
        template_name: &str,
        template_folders: &[PathBuf],
        model: &TemplateModel,
    ) -> Result<(), AppError>;

    /// Check whether a file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Check whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}
