mod application_environment;
mod code_generator_actions;
mod library_manager;

pub use application_environment::ApplicationEnvironment;
pub use code_generator_actions::CodeGeneratorActions;
pub use library_manager::LibraryManager;
