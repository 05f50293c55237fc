//! argprof: sequential driver for the metagenomics ARG profiling notebooks.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{PipelineOptions, PipelinePlan, PlannedStage, RunResult, plan, run, run_at};
pub use domain::{AppError, Stage};
