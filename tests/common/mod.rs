//! Shared testing utilities for argprof CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::harness::FakeJupyter;

/// Notebook files in execution order.
pub const NOTEBOOKS: [&str; 4] = [
    "01_qc_trimming.ipynb",
    "02_taxonomy.ipynb",
    "03_ARG_annotation.ipynb",
    "04_visualization.ipynb",
];

/// Testing harness providing an isolated pipeline directory and a fake `jupyter`.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    jupyter: FakeJupyter,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let jupyter = FakeJupyter::install(root.path());

        Self { root, work_dir, jupyter }
    }

    /// Path to the pipeline directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn jupyter(&self) -> &FakeJupyter {
        &self.jupyter
    }

    /// Build a command for invoking the compiled `argprof` binary within the pipeline directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `argprof` binary within a custom directory.
    ///
    /// The fake `jupyter` is placed first on `PATH`.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("argprof").expect("Failed to locate argprof binary");
        cmd.current_dir(dir.as_ref())
            .env("PATH", self.path_with_fake_bin())
            .env_remove("FAKE_JUPYTER_FAIL_ON")
            .env_remove("FAKE_JUPYTER_EXIT_CODE")
            .env_remove("FAKE_JUPYTER_SIGNAL_ON")
            .env_remove("RUST_LOG");
        cmd
    }

    fn path_with_fake_bin(&self) -> OsString {
        let mut paths = vec![self.jupyter.bin_dir.clone()];
        if let Some(existing) = env::var_os("PATH") {
            paths.extend(env::split_paths(&existing));
        }
        env::join_paths(paths).expect("Failed to build PATH")
    }

    /// Create the four notebooks under `notebooks/`.
    pub fn seed_notebooks(&self) {
        let dir = self.work_dir.join("notebooks");
        fs::create_dir_all(&dir).expect("Failed to create notebooks dir");
        for notebook in NOTEBOOKS {
            fs::write(dir.join(notebook), "{\"cells\": []}").expect("Failed to write notebook");
        }
    }

    /// Write `argprof.toml` in the pipeline directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("argprof.toml"), content).expect("Failed to write config");
    }

    /// Assert that the output directories exist.
    pub fn assert_output_dirs_exist(&self) {
        for dir in ["data/processed", "results/figures", "results/ARG"] {
            assert!(self.work_dir.join(dir).is_dir(), "{} should exist", dir);
        }
    }

    /// Assert that no output directory was created.
    pub fn assert_output_dirs_absent(&self) {
        assert!(!self.work_dir.join("data").exists(), "data/ should not exist");
        assert!(!self.work_dir.join("results").exists(), "results/ should not exist");
    }

    /// Notebook paths passed to the fake executor, in call order.
    pub fn executed_notebooks(&self) -> Vec<String> {
        self.jupyter.notebooks()
    }
}

/// Expected notebook arguments for the first `count` stages.
pub fn notebook_args(count: usize) -> Vec<String> {
    NOTEBOOKS.iter().take(count).map(|notebook| format!("notebooks/{}", notebook)).collect()
}
