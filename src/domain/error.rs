use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mvcgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Project directory does not exist.
    #[error("Project directory not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// Output file already exists and overwriting was not requested.
    #[error("The file {} exists, use -f option to overwrite", .path.display())]
    OutputExists { path: PathBuf },

    /// Controller or view name is not a valid type identifier.
    #[error(
        "Invalid name '{0}': must start with a letter or underscore and contain only letters, digits, or underscores"
    )]
    InvalidName(String),

    /// Relative folder escapes the project or is otherwise unusable.
    #[error("Invalid relative folder path '{0}'")]
    InvalidRelativeFolder(String),

    /// Library lookup failed.
    #[error("Library '{0}' could not be resolved")]
    LibraryNotFound(String),

    /// No template folder (nor the embedded set) provides the template.
    #[error("Template '{name}' not found. Searched: {searched}")]
    TemplateNotFound { name: String, searched: String },

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidName(_)
            | AppError::InvalidRelativeFolder(_)
            | AppError::TemplateRender { .. }
            | AppError::TomlParse(_)
            | AppError::JsonParse(_) => io::ErrorKind::InvalidInput,
            AppError::ProjectNotFound(_)
            | AppError::LibraryNotFound(_)
            | AppError::TemplateNotFound { .. } => io::ErrorKind::NotFound,
            AppError::OutputExists { .. } => io::ErrorKind::AlreadyExists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_exists_message_names_path_and_flag() {
        let err =
            AppError::OutputExists { path: PathBuf::from("/app/Controllers/HomeController.cs") };
        assert_eq!(
            err.to_string(),
            "The file /app/Controllers/HomeController.cs exists, use -f option to overwrite"
        );
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn template_not_found_is_not_found_kind() {
        let err = AppError::TemplateNotFound {
            name: "MvcControllerEmpty".into(),
            searched: "(embedded)".into(),
        };
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
