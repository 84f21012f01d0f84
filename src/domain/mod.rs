pub mod config;
pub mod error;
pub mod generator_model;
pub mod identifiers;
pub mod library;
pub mod project;

pub use config::{ScaffoldConfig, TemplatesConfig};
pub use error::AppError;
pub use generator_model::{
    CommandLineGeneratorModel, GeneratedFile, TemplateModel, TemplateValue, ViewGeneratorModel,
};
pub use identifiers::{ControllerName, ViewName};
pub use library::{LibraryDescription, LibraryType};
pub use project::controller_namespace;
