//! Filesystem adapter implementations for generation ports.

mod code_generator_actions;

pub use code_generator_actions::{FilesystemCodeGeneratorActions, TemplateSource};
