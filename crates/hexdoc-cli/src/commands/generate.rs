//! Generate command implementation.

use console::style;
use hexdoc::GenerateReport;
use tracing::debug;

use crate::cli::{GenerateArgs, GlobalOptions};
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui;

/// Execute the generate command.
///
/// # Steps
///
/// 1. Load and validate the layered configuration
/// 2. Scan the inputs for vendor imports
/// 3. Resolve every package and write `<outDir>/<package>.md`
/// 4. Print a summary
pub async fn execute(args: GenerateArgs, global: &GlobalOptions) -> Result<()> {
    let (base_dir, config) = utils::load_config(global, &ConfigOverrides::from(&args))?;
    debug!(
        prefix = %config.vendor_prefix,
        inputs = config.inputs.len(),
        "generating documentation"
    );

    ui::info(&format!(
        "Scanning {} input(s) for '{}' imports",
        config.inputs.len(),
        config.vendor_prefix
    ));

    let generator = utils::build_generator(&base_dir, &config);
    let report = generator.run(&config.out_dir, &config.inputs).await?;

    print_summary(&report);
    if !report.packages.is_empty() {
        let out_dir = utils::resolve_path(&config.out_dir, &base_dir);
        ui::success(&format!("Documentation written to {}", out_dir.display()));
    }
    Ok(())
}

fn print_summary(report: &GenerateReport) {
    if report.packages.is_empty() {
        ui::warning(&format!(
            "No vendor imports found in {} source file(s); nothing written",
            report.sources
        ));
        return;
    }

    println!(
        "{} Generated {} file(s) from {} source file(s)",
        style("✔").green().bold(),
        style(report.packages.len()).cyan(),
        style(report.sources).cyan()
    );

    for package in &report.packages {
        let mut line = format!(
            "  {} {} documented",
            style(package.path.display()).bold(),
            package.entries.len()
        );
        if !package.missing.is_empty() {
            line.push_str(&format!(
                ", {} missing ({})",
                style(package.missing.len()).yellow(),
                package.missing.join(", ")
            ));
        }
        println!("{line}");
    }
}
