//! Subcommand implementations.

use anyhow::Result;
use modsplit_core::SplitPlan;
use std::path::Path;

pub mod plan;
pub mod split;

/// Load the plan from a JSON file when one is given, the builtin otherwise.
pub(crate) fn resolve_plan(plan_file: Option<&Path>) -> Result<SplitPlan> {
    match plan_file {
        Some(path) => {
            let plan = SplitPlan::from_json_file(path)?;
            tracing::debug!(
                "loaded plan with {} groups from {}",
                plan.group_count(),
                path.display()
            );
            Ok(plan)
        }
        None => Ok(SplitPlan::builtin()),
    }
}
