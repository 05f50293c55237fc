//! Fixed directory layout of the profiling pipeline.
//!
//! All paths are relative to the pipeline root (the working directory
//! unless `--directory` says otherwise).

use std::path::PathBuf;

/// Raw sequencing reads. Consumed by the QC notebook, never created here.
pub const RAW_DIR: &str = "data/raw";
/// Trimmed and filtered reads.
pub const PROCESSED_DIR: &str = "data/processed";
/// Root of every pipeline output.
pub const RESULTS_DIR: &str = "results";
/// Plots written by the visualization notebook.
pub const FIGURES_DIR: &str = "results/figures";
/// Antimicrobial resistance gene annotation tables.
pub const ARG_DIR: &str = "results/ARG";
/// Location of the analysis notebooks.
pub const NOTEBOOKS_DIR: &str = "notebooks";

/// The pipeline's directory layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineLayout;

impl PipelineLayout {
    /// Output directories that must exist before the first notebook runs, in creation order.
    pub fn required_dirs(&self) -> [&'static str; 3] {
        [PROCESSED_DIR, FIGURES_DIR, ARG_DIR]
    }

    pub fn raw_dir(&self) -> PathBuf {
        PathBuf::from(RAW_DIR)
    }

    pub fn results_dir(&self) -> PathBuf {
        PathBuf::from(RESULTS_DIR)
    }

    pub fn figures_dir(&self) -> PathBuf {
        PathBuf::from(FIGURES_DIR)
    }

    pub fn notebooks_dir(&self) -> PathBuf {
        PathBuf::from(NOTEBOOKS_DIR)
    }
}
