use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// The analysis stages of the profiling pipeline, one notebook each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Read quality control and adapter trimming.
    QcTrimming,
    /// Taxonomic classification of the trimmed reads.
    Taxonomy,
    /// Antimicrobial resistance gene annotation.
    ArgAnnotation,
    /// Figures summarizing taxonomy and resistome.
    Visualization,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 4] =
        [Stage::QcTrimming, Stage::Taxonomy, Stage::ArgAnnotation, Stage::Visualization];

    /// Notebook file name for this stage.
    pub fn notebook(&self) -> &'static str {
        match self {
            Stage::QcTrimming => "01_qc_trimming.ipynb",
            Stage::Taxonomy => "02_taxonomy.ipynb",
            Stage::ArgAnnotation => "03_ARG_annotation.ipynb",
            Stage::Visualization => "04_visualization.ipynb",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Stage::QcTrimming => "Quality control and trimming",
            Stage::Taxonomy => "Taxonomic classification",
            Stage::ArgAnnotation => "ARG annotation",
            Stage::Visualization => "Visualization",
        }
    }

    /// One-based position in the pipeline.
    pub fn position(&self) -> usize {
        match self {
            Stage::QcTrimming => 1,
            Stage::Taxonomy => 2,
            Stage::ArgAnnotation => 3,
            Stage::Visualization => 4,
        }
    }

    /// Path of the notebook relative to the pipeline root.
    pub fn notebook_path(&self, notebooks_dir: &Path) -> PathBuf {
        notebooks_dir.join(self.notebook())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notebook())
    }
}
