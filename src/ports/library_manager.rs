use crate::domain::LibraryDescription;

/// Port for resolving named libraries to their metadata.
pub trait LibraryManager {
    /// Look up a library by exact name.
    fn get_library(&self, name: &str) -> Option<LibraryDescription>;

    /// All registered libraries, in name order.
    fn libraries(&self) -> Vec<LibraryDescription>;
}
