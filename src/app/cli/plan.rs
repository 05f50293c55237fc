//! Plan command rendering.

use clap::ValueEnum;

use crate::app::api::{self, PipelineOptions, PipelinePlan};
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    Text,
    Json,
}

pub fn run_plan(options: &PipelineOptions, format: PlanFormat) -> Result<(), AppError> {
    let plan = api::plan(options)?;
    match format {
        PlanFormat::Text => print!("{}", render_text(&plan)),
        PlanFormat::Json => {
            let json = serde_json::to_string(&plan).map_err(|e| {
                AppError::InternalError(format!("Failed to serialize plan: {}", e))
            })?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn render_text(plan: &PipelinePlan) -> String {
    let mut out = format!("Pipeline root: {}\n", plan.root.display());

    if plan.missing_dirs.is_empty() {
        out.push_str("Output directories: all present\n");
    } else {
        out.push_str(&format!(
            "Output directories to create: {}\n",
            plan.missing_dirs.join(", ")
        ));
    }

    out.push('\n');
    for stage in &plan.stages {
        let marker = if stage.present { "✅" } else { "⚠️  missing" };
        out.push_str(&format!(
            "{}. {} ({}) {}\n",
            stage.position, stage.notebook, stage.description, marker
        ));
        out.push_str(&format!("   $ {}\n", stage.command));
    }
    out
}
