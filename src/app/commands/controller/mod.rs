//! Controller generators.

mod base;

pub use base::ControllerGeneratorBase;

use crate::app::AppContext;
use crate::domain::{AppError, CommandLineGeneratorModel, GeneratedFile};
use crate::ports::{ApplicationEnvironment, CodeGeneratorActions, LibraryManager};

/// A generator that turns a [`CommandLineGeneratorModel`] into a controller file.
pub trait ControllerGenerator {
    fn generate(&self, model: &CommandLineGeneratorModel) -> Result<GeneratedFile, AppError>;
}

/// MVC controller returning views.
pub struct MvcControllerGenerator<'a, E, L, A>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    base: ControllerGeneratorBase<'a, E, L, A>,
}

impl<'a, E, L, A> MvcControllerGenerator<'a, E, L, A>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    pub fn new(ctx: &'a AppContext<E, L, A>) -> Self {
        Self { base: ControllerGeneratorBase::new(ctx) }
    }
}

impl<E, L, A> ControllerGenerator for MvcControllerGenerator<'_, E, L, A>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    fn generate(&self, model: &CommandLineGeneratorModel) -> Result<GeneratedFile, AppError> {
        let template = if model.read_write_actions {
            "MvcControllerWithActions"
        } else {
            "MvcControllerEmpty"
        };
        self.base.emit(model, template)
    }
}

/// API controller routed under `api/[controller]`.
pub struct ApiControllerGenerator<'a, E, L, A>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    base: ControllerGeneratorBase<'a, E, L, A>,
}

impl<'a, E, L, A> ApiControllerGenerator<'a, E, L, A>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    pub fn new(ctx: &'a AppContext<E, L, A>) -> Self {
        Self { base: ControllerGeneratorBase::new(ctx) }
    }
}

impl<E, L, A> ControllerGenerator for ApiControllerGenerator<'_, E, L, A>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    fn generate(&self, model: &CommandLineGeneratorModel) -> Result<GeneratedFile, AppError> {
        let template = if model.read_write_actions {
            "ApiControllerWithActions"
        } else {
            "ApiControllerEmpty"
        };
        self.base.emit(model, template)
    }
}

/// Pick the generator for `model` and run it.
pub fn execute<E, L, A>(
    ctx: &AppContext<E, L, A>,
    model: &CommandLineGeneratorModel,
) -> Result<GeneratedFile, AppError>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    if model.api {
        ApiControllerGenerator::new(ctx).generate(model)
    } else {
        MvcControllerGenerator::new(ctx).generate(model)
    }
}
