//! Pure parse/validate for project configuration.

use serde::Deserialize;

use crate::domain::{AppError, ScaffoldConfig};

/// Parse and validate scaffolding configuration from `mvcgen.toml` content.
pub fn parse_config_content(content: &str) -> Result<ScaffoldConfig, AppError> {
    let config: ScaffoldConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[derive(Debug, Deserialize)]
struct ProjectJson {
    name: Option<String>,
}

/// Extract the `name` field from `project.json` content, if present and non-empty.
pub fn parse_project_json_name(content: &str) -> Result<Option<String>, AppError> {
    let project: ProjectJson = serde_json::from_str(content)?;
    Ok(project.name.filter(|name| !name.trim().is_empty()))
}
