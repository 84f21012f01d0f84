//! `CodeGeneratorActions` implementation backed by the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::catalogs::embedded_templates::find_embedded_template;
use crate::adapters::template::MinijinjaTemplateRenderer;
use crate::domain::project::paths;
use crate::domain::{AppError, TemplateModel};
use crate::ports::CodeGeneratorActions;

/// Where a template source was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    Embedded(String),
}

/// Renders templates from disk (or the embedded set) and writes the output.
#[derive(Debug, Clone, Default)]
pub struct FilesystemCodeGeneratorActions {
    renderer: MinijinjaTemplateRenderer,
}

impl FilesystemCodeGeneratorActions {
    pub fn new() -> Self {
        Self { renderer: MinijinjaTemplateRenderer::new() }
    }

    /// Locate a template: first matching folder wins, embedded templates last.
    pub fn locate_template(
        &self,
        template_name: &str,
        template_folders: &[PathBuf],
    ) -> Result<(TemplateSource, String), AppError> {
        for folder in template_folders {
            let candidate = paths::template_file(folder, template_name);
            if candidate.is_file() {
                let content = fs::read_to_string(&candidate)?;
                return Ok((TemplateSource::File(candidate), content));
            }
        }

        if let Some(template) = find_embedded_template(template_name) {
            return Ok((TemplateSource::Embedded(template.path), template.content.to_string()));
        }

        let mut searched: Vec<String> =
            template_folders.iter().map(|folder| folder.display().to_string()).collect();
        searched.push("(embedded)".to_string());
        Err(AppError::TemplateNotFound {
            name: template_name.to_string(),
            searched: searched.join(", "),
        })
    }
}

impl CodeGeneratorActions for FilesystemCodeGeneratorActions {
    fn add_file_from_template(
        &self,
        output_path: &Path,
        template_name: &str,
        template_folders: &[PathBuf],
        model: &TemplateModel,
    ) -> Result<(), AppError> {
        let (source, content) = self.locate_template(template_name, template_folders)?;
        debug!(template = template_name, source = ?source, "resolved template");

        let rendered = self.renderer.render(&content, model, template_name)?;

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, rendered)?;
        debug!(path = %output_path.display(), "wrote generated file");
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
