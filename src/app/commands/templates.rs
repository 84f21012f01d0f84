//! Template search-path inspection.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::controller::ControllerGeneratorBase;
use crate::app::commands::view::view_template_folders;
use crate::ports::{ApplicationEnvironment, CodeGeneratorActions, LibraryManager};

/// Which generator's search path to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateScope {
    Controllers,
    Views,
}

/// Existing template folders for `scope`, in search order.
pub fn execute<E, L, A>(ctx: &AppContext<E, L, A>, scope: TemplateScope) -> Vec<PathBuf>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    match scope {
        TemplateScope::Controllers => ControllerGeneratorBase::new(ctx).template_folders(),
        TemplateScope::Views => view_template_folders(ctx),
    }
}
