//! Per-invocation option bags and generation results.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Options for a controller generation, consumed once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineGeneratorModel {
    pub controller_name: String,
    /// Folder relative to the application base path. `None` and `""` both
    /// place the file directly in the base path.
    pub relative_folder_path: Option<String>,
    pub force: bool,
    pub read_write_actions: bool,
    pub use_async_actions: bool,
    pub api: bool,
}

impl CommandLineGeneratorModel {
    pub fn new(controller_name: impl Into<String>) -> Self {
        Self { controller_name: controller_name.into(), ..Self::default() }
    }
}

/// Options for an empty view generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewGeneratorModel {
    pub view_name: String,
    pub relative_folder_path: Option<String>,
    pub force: bool,
    pub layout_page: Option<String>,
    pub partial_view: bool,
}

impl ViewGeneratorModel {
    pub fn new(view_name: impl Into<String>) -> Self {
        Self { view_name: view_name.into(), ..Self::default() }
    }
}

/// A file written by a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub template: String,
    pub overwritten: bool,
}

/// Scalar value exposed to a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateValue {
    Str(String),
    Bool(bool),
    Null,
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Str(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Str(value)
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        TemplateValue::Bool(value)
    }
}

impl From<Option<String>> for TemplateValue {
    fn from(value: Option<String>) -> Self {
        value.map(TemplateValue::Str).unwrap_or(TemplateValue::Null)
    }
}

/// Variables handed to a template at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateModel {
    values: BTreeMap<String, TemplateValue>,
}

impl TemplateModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<TemplateValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.values.get(key)
    }
}
