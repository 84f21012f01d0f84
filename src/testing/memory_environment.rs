use std::path::{Path, PathBuf};

use crate::ports::ApplicationEnvironment;

/// Fixed application environment for testing.
#[derive(Debug, Clone)]
pub struct MemoryEnvironment {
    pub name: String,
    pub base_path: PathBuf,
}

impl MemoryEnvironment {
    pub fn new(name: &str, base_path: impl Into<PathBuf>) -> Self {
        Self { name: name.to_string(), base_path: base_path.into() }
    }
}

impl ApplicationEnvironment for MemoryEnvironment {
    fn application_name(&self) -> &str {
        &self.name
    }

    fn application_base_path(&self) -> &Path {
        &self.base_path
    }
}
