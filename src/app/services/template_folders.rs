//! Template search-path selection.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::domain::project::paths;
use crate::ports::{CodeGeneratorActions, LibraryManager};

/// Ordered list of existing template folders.
///
/// Roots are the application base path followed by the containing project's
/// library root (when the library resolves to an existing directory). Each
/// root contributes `{root}/Templates/{base}` for every base folder, in
/// order, if that folder exists.
pub fn template_folders<L, A>(
    containing_project: &str,
    application_base_path: &Path,
    base_folders: &[&str],
    library_manager: &L,
    actions: &A,
) -> Vec<PathBuf>
where
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    let mut roots = vec![application_base_path.to_path_buf()];

    if let Some(library) = library_manager.get_library(containing_project)
        && let Some(root) = library.root_folder()
        && actions.is_dir(root)
    {
        roots.push(root.to_path_buf());
    }

    let mut folders = Vec::new();
    for root in &roots {
        for base_folder in base_folders {
            let candidate = paths::template_folder(root, base_folder);
            if actions.is_dir(&candidate) {
                folders.push(candidate);
            } else {
                trace!(folder = %candidate.display(), "template folder absent");
            }
        }
    }
    folders
}
