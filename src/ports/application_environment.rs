use std::path::Path;

/// Port for application environment metadata.
pub trait ApplicationEnvironment {
    /// Name of the application being scaffolded.
    fn application_name(&self) -> &str;

    /// Directory generated files are placed relative to.
    fn application_base_path(&self) -> &Path;
}
