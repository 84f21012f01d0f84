//! mvcgen: scaffold MVC controllers and views from project metadata and templates.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    TemplateScope, generate_controller, generate_controller_at, generate_view_at,
    template_folders_at,
};
pub use domain::{AppError, CommandLineGeneratorModel, GeneratedFile, ViewGeneratorModel};
