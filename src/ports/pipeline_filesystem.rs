use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for filesystem access scoped to the pipeline root.
///
/// Relative paths are interpreted against [`PipelineFilesystem::root`].
pub trait PipelineFilesystem {
    /// Pipeline root directory.
    fn root(&self) -> &Path;

    /// Recursively create a directory. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Absolute form of a path: canonical when it exists, root-joined otherwise.
    fn resolve(&self, path: &Path) -> PathBuf;
}
