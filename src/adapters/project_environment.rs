//! Application environment discovered from a project directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::config::{parse_config_content, parse_project_json_name};
use crate::domain::project::paths;
use crate::domain::{AppError, ScaffoldConfig};
use crate::ports::ApplicationEnvironment;

/// Environment backed by a project directory on disk.
///
/// The application name is resolved in order from `mvcgen.toml`
/// (`[project] name`), `project.json` (`name`), the stem of the single
/// `*.csproj` file, and finally the directory name.
#[derive(Debug, Clone)]
pub struct ProjectEnvironment {
    application_name: String,
    base_path: PathBuf,
    project_file: Option<PathBuf>,
    config: ScaffoldConfig,
}

impl ProjectEnvironment {
    /// Discover the environment rooted at `project_dir`.
    pub fn discover(project_dir: &Path) -> Result<Self, AppError> {
        if !project_dir.is_dir() {
            return Err(AppError::ProjectNotFound(project_dir.to_path_buf()));
        }

        let config = load_config(project_dir)?;
        let project_json = paths::project_json(project_dir);
        let csproj = find_csproj(project_dir)?;

        let json_name = if project_json.is_file() {
            parse_project_json_name(&fs::read_to_string(&project_json)?)?
        } else {
            None
        };

        let application_name = config
            .project
            .name
            .clone()
            .or(json_name)
            .or_else(|| file_stem(csproj.as_deref()))
            .or_else(|| directory_name(project_dir))
            .ok_or_else(|| {
                AppError::config_error(format!(
                    "Cannot determine application name for {}",
                    project_dir.display()
                ))
            })?;

        let project_file = if project_json.is_file() { Some(project_json) } else { csproj };

        debug!(
            application = %application_name,
            base_path = %project_dir.display(),
            "discovered project environment"
        );

        Ok(Self { application_name, base_path: project_dir.to_path_buf(), project_file, config })
    }

    /// Project manifest (`project.json` or `*.csproj`), if any.
    pub fn project_file(&self) -> Option<&Path> {
        self.project_file.as_deref()
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }
}

impl ApplicationEnvironment for ProjectEnvironment {
    fn application_name(&self) -> &str {
        &self.application_name
    }

    fn application_base_path(&self) -> &Path {
        &self.base_path
    }
}

fn load_config(project_dir: &Path) -> Result<ScaffoldConfig, AppError> {
    let config_path = paths::config(project_dir);
    if !config_path.is_file() {
        return Ok(ScaffoldConfig::default());
    }
    parse_config_content(&fs::read_to_string(config_path)?)
}

fn find_csproj(project_dir: &Path) -> Result<Option<PathBuf>, AppError> {
    let mut found = Vec::new();
    for entry in fs::read_dir(project_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csproj") {
            found.push(path);
        }
    }
    found.sort();
    match found.len() {
        0 => Ok(None),
        1 => Ok(found.pop()),
        _ => Err(AppError::config_error(format!(
            "Multiple project files found in {}; set [project] name in {}",
            project_dir.display(),
            paths::CONFIG_FILENAME
        ))),
    }
}

fn file_stem(path: Option<&Path>) -> Option<String> {
    path.and_then(|p| p.file_stem()).and_then(|s| s.to_str()).map(str::to_string)
}

fn directory_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project_dir(name: &str) -> (TempDir, PathBuf) {
        let root = TempDir::new().unwrap();
        let dir = root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        (root, dir)
    }

    #[test]
    fn falls_back_to_directory_name() {
        let (_root, dir) = project_dir("Shop");
        let env = ProjectEnvironment::discover(&dir).unwrap();
        assert_eq!(env.application_name(), "Shop");
        assert_eq!(env.application_base_path(), dir.as_path());
        assert!(env.project_file().is_none());
    }

    #[test]
    fn csproj_stem_wins_over_directory() {
        let (_root, dir) = project_dir("src");
        fs::write(dir.join("Shop.Web.csproj"), "<Project />").unwrap();
        let env = ProjectEnvironment::discover(&dir).unwrap();
        assert_eq!(env.application_name(), "Shop.Web");
        assert_eq!(env.project_file(), Some(dir.join("Shop.Web.csproj").as_path()));
    }

    #[test]
    fn project_json_name_wins_over_csproj() {
        let (_root, dir) = project_dir("src");
        fs::write(dir.join("Other.csproj"), "<Project />").unwrap();
        fs::write(dir.join("project.json"), r#"{ "name": "FromJson" }"#).unwrap();
        let env = ProjectEnvironment::discover(&dir).unwrap();
        assert_eq!(env.application_name(), "FromJson");
        assert_eq!(env.project_file(), Some(dir.join("project.json").as_path()));
    }

    #[test]
    fn config_name_wins_over_everything() {
        let (_root, dir) = project_dir("src");
        fs::write(dir.join("project.json"), r#"{ "name": "FromJson" }"#).unwrap();
        fs::write(dir.join("mvcgen.toml"), "[project]\nname = \"FromConfig\"\n").unwrap();
        let env = ProjectEnvironment::discover(&dir).unwrap();
        assert_eq!(env.application_name(), "FromConfig");
    }

    #[test]
    fn multiple_csproj_files_are_ambiguous() {
        let (_root, dir) = project_dir("src");
        fs::write(dir.join("A.csproj"), "").unwrap();
        fs::write(dir.join("B.csproj"), "").unwrap();
        let err = ProjectEnvironment::discover(&dir).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn missing_directory_is_project_not_found() {
        let (root, _) = project_dir("Shop");
        let err = ProjectEnvironment::discover(&root.path().join("absent")).unwrap_err();
        assert!(matches!(err, AppError::ProjectNotFound(_)));
    }
}
