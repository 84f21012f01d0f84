pub mod paths;

pub use paths::{
    CODE_FILE_EXTENSION, CONTROLLER_BASE_FOLDERS, CONTROLLERS_FOLDER_NAME, THIS_ASSEMBLY_NAME,
    VIEW_BASE_FOLDERS, VIEW_FILE_EXTENSION,
};

/// Namespace for controllers of the named application: `{app}.Controllers`.
pub fn controller_namespace(application_name: &str) -> String {
    format!("{}.{}", application_name, CONTROLLERS_FOLDER_NAME)
}
