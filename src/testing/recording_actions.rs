use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, TemplateModel};
use crate::ports::CodeGeneratorActions;

/// A single `add_file_from_template` call.
#[derive(Debug, Clone)]
pub struct RecordedWrite {
    pub output_path: PathBuf,
    pub template_name: String,
    pub template_folders: Vec<PathBuf>,
    pub model: TemplateModel,
}

/// Code-generation actions that record writes instead of touching disk.
#[derive(Default)]
pub struct RecordingActions {
    pub existing_files: RefCell<BTreeSet<PathBuf>>,
    pub existing_dirs: RefCell<BTreeSet<PathBuf>>,
    pub writes: RefCell<Vec<RecordedWrite>>,
}

#[allow(dead_code)]
impl RecordingActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.existing_files.borrow_mut().insert(path.into());
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.existing_dirs.borrow_mut().insert(path.into());
        self
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn last_write(&self) -> Option<RecordedWrite> {
        self.writes.borrow().last().cloned()
    }
}

impl CodeGeneratorActions for RecordingActions {
    fn add_file_from_template(
        &self,
        output_path: &Path,
        template_name: &str,
        template_folders: &[PathBuf],
        model: &TemplateModel,
    ) -> Result<(), AppError> {
        self.writes.borrow_mut().push(RecordedWrite {
            output_path: output_path.to_path_buf(),
            template_name: template_name.to_string(),
            template_folders: template_folders.to_vec(),
            model: model.clone(),
        });
        self.existing_files.borrow_mut().insert(output_path.to_path_buf());
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.existing_files.borrow().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.existing_dirs.borrow().contains(path)
    }
}
