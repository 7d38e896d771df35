//! Split command implementation.

use anyhow::{bail, Result};
use colored::Colorize;
use modsplit_parser::assemble;
use std::path::PathBuf;

/// Run the split command.
pub fn run(input: PathBuf, out_dir: PathBuf, plan_file: Option<PathBuf>) -> Result<()> {
    // Nothing is written unless the input is present and the plan loads.
    if !input.is_file() {
        eprintln!("{} Input file not found: {}", "✗".red(), input.display());
        eprintln!("Copy the monolithic source there first, then rerun.");
        bail!("input file not found: {}", input.display());
    }

    let plan = super::resolve_plan(plan_file.as_deref())?;

    println!("{} Splitting {}", "→".blue(), input.display());

    let source = std::fs::read_to_string(&input)?;
    std::fs::create_dir_all(&out_dir)?;

    for group in &plan.groups {
        println!("{} Processing {}...", "→".blue(), group.name);

        let output = assemble(&source, group);
        let path = out_dir.join(&group.name);
        std::fs::write(&path, output)?;

        println!(
            "  -> {} created with {} functions",
            path.display(),
            group.functions.len()
        );
    }

    println!();
    println!("{} Extraction complete!", "✓".green());
    println!("  Groups: {}", plan.group_count());
    println!("  Functions: {}", plan.function_count());
    println!("  Output: {}", out_dir.display());
    println!();
    println!("Next steps:");
    println!("1. Review the extracted functions");
    println!("2. Replace the placeholder functions with the extracted ones");
    println!("3. Test each module individually");
    println!("4. Remove any duplicate imports or unused code");

    Ok(())
}
