use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::PipelineFilesystem;

/// Local filesystem rooted at the pipeline directory.
#[derive(Debug, Clone)]
pub struct LocalPipelineFilesystem {
    root: PathBuf,
}

impl LocalPipelineFilesystem {
    /// Create a filesystem for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a filesystem for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Create a filesystem for an existing root directory.
    pub fn open(root: PathBuf) -> Result<Self, AppError> {
        if !root.is_dir() {
            return Err(AppError::config_error(format!(
                "Pipeline root is not an existing directory: {}",
                root.display()
            )));
        }
        Ok(Self::new(root))
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl PipelineFilesystem for LocalPipelineFilesystem {
    fn root(&self) -> &Path {
        &self.root
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(self.absolute(path))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.absolute(path).exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.absolute(path))?)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        let absolute = self.absolute(path);
        fs::canonicalize(&absolute).unwrap_or(absolute)
    }
}
