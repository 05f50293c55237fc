//! Run command: prepare output directories and execute every notebook in order.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, NotebookInvocation, Stage};
use crate::ports::{NotebookExecutor, PipelineFilesystem, ProgressLog};

/// Outcome of a fully successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Stages executed, in order.
    pub executed: Vec<Stage>,
    /// Absolute path of the results directory.
    pub results_dir: PathBuf,
    /// Absolute path of the figures directory.
    pub figures_dir: PathBuf,
}

/// Execute the run command.
///
/// Stops at the first notebook that exits unsuccessfully; later stages are not started.
pub fn execute<F, E, L>(ctx: &AppContext<F, E, L>) -> Result<RunResult, AppError>
where
    F: PipelineFilesystem,
    E: NotebookExecutor,
    L: ProgressLog,
{
    ensure_output_dirs(ctx)?;

    ctx.log().log("🧪 Starting Metagenomics ARG Profiling Pipeline...");

    let notebooks_dir = ctx.layout().notebooks_dir();
    let mut executed = Vec::with_capacity(Stage::ALL.len());
    for stage in Stage::ALL {
        let invocation =
            NotebookInvocation::for_stage(stage, &ctx.config().executor, &notebooks_dir);
        run_notebook(ctx, &invocation)?;
        executed.push(stage);
    }

    let results_dir = ctx.filesystem().resolve(&ctx.layout().results_dir());
    let figures_dir = ctx.filesystem().resolve(&ctx.layout().figures_dir());

    ctx.log().log("✅ Pipeline completed successfully.");
    ctx.log().log(&format!("📁 All results are in: {}", results_dir.display()));
    ctx.log().log(&format!("📊 Figures saved in: {}", figures_dir.display()));

    Ok(RunResult { executed, results_dir, figures_dir })
}

/// Create every required output directory, parents included.
pub(crate) fn ensure_output_dirs<F, E, L>(ctx: &AppContext<F, E, L>) -> Result<(), AppError>
where
    F: PipelineFilesystem,
    E: NotebookExecutor,
    L: ProgressLog,
{
    for dir in ctx.layout().required_dirs() {
        ctx.filesystem().create_dir_all(Path::new(dir))?;
    }
    Ok(())
}

fn run_notebook<F, E, L>(
    ctx: &AppContext<F, E, L>,
    invocation: &NotebookInvocation,
) -> Result<(), AppError>
where
    F: PipelineFilesystem,
    E: NotebookExecutor,
    L: ProgressLog,
{
    ctx.log().log(&format!("Running {} ...", invocation.stage.notebook()));

    let exit = ctx.executor().execute(invocation, ctx.filesystem().root())?;
    if !exit.success() {
        tracing::warn!(notebook = %invocation.stage, code = ?exit.code, "aborting pipeline");
        return Err(AppError::NotebookFailed {
            notebook: invocation.stage.notebook().to_string(),
            code: exit.code,
        });
    }
    Ok(())
}
