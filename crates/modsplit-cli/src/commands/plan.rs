//! Plan command implementation.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Run the plan command.
pub fn run(plan_file: Option<PathBuf>, json: bool) -> Result<()> {
    let plan = super::resolve_plan(plan_file.as_deref())?;

    if json {
        // Dump-edit-rerun is the supported way to customize the builtin plan.
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{} Split Plan", "→".blue());
    println!();

    for group in &plan.groups {
        println!(
            "  {} ({} functions)",
            group.name.green(),
            group.functions.len()
        );
        for name in &group.functions {
            println!("    {name}");
        }
    }

    println!();
    println!("  Groups: {}", plan.group_count());
    println!("  Functions: {}", plan.function_count());

    Ok(())
}
