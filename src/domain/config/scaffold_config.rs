//! Project-level scaffolding configuration models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration loaded from `mvcgen.toml` in the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Project identity overrides.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Template lookup configuration.
    #[serde(default)]
    pub templates: TemplatesConfig,
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.project.validate()
    }
}

/// Project identity overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Application name; wins over `project.json` and the project file name.
    pub name: Option<String>,
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(AppError::config_error("project.name must not be empty"));
        }
        Ok(())
    }
}

/// Template lookup configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Root of the scaffolder package (the directory holding its `Templates/`).
    /// Relative paths resolve against the project directory.
    pub package_root: Option<PathBuf>,
}
