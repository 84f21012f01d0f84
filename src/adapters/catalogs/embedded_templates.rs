use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::project::paths::TEMPLATE_FILE_EXTENSION;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// A template compiled into the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedTemplate {
    /// Path relative to the templates root, e.g. `ControllerGenerator/MvcControllerEmpty.jinja`.
    pub path: String,
    /// Template name without folder or extension.
    pub name: String,
    pub content: &'static str,
}

/// Find a built-in template by name.
pub fn find_embedded_template(template_name: &str) -> Option<EmbeddedTemplate> {
    embedded_templates().into_iter().find(|template| template.name == template_name)
}

/// All built-in templates, sorted by path.
pub fn embedded_templates() -> Vec<EmbeddedTemplate> {
    let mut templates = Vec::new();
    collect_templates(&TEMPLATES_DIR, &mut templates);
    templates.sort_by(|a, b| a.path.cmp(&b.path));
    templates
}

fn collect_templates(dir: &'static Dir<'static>, templates: &mut Vec<EmbeddedTemplate>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = file.path().to_string_lossy().to_string();
                let Some(stem) = file
                    .path()
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_suffix(TEMPLATE_FILE_EXTENSION))
                else {
                    continue;
                };
                if let Some(content) = file.contents_utf8() {
                    templates.push(EmbeddedTemplate { path, name: stem.to_string(), content });
                }
            }
            DirEntry::Dir(subdir) => collect_templates(subdir, templates),
        }
    }
}
