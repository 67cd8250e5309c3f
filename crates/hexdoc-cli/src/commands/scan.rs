//! Scan command implementation.
//!
//! Prints the vendor packages referenced by the inputs and the members imported
//! from each, without touching installed packages.

use console::style;
use hexdoc::PackageUsageMap;

use crate::cli::{GlobalOptions, ScanArgs};
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui;

pub async fn execute(args: ScanArgs, global: &GlobalOptions) -> Result<()> {
    let (base_dir, config) = utils::load_config(global, &ConfigOverrides::from(&args))?;
    let generator = utils::build_generator(&base_dir, &config);
    let map = generator.scan(&config.inputs).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    if map.is_empty() {
        ui::warning(&format!(
            "No imports from packages starting with '{}' found",
            config.vendor_prefix
        ));
        return Ok(());
    }

    print_usage(&map);
    Ok(())
}

fn print_usage(map: &PackageUsageMap) {
    for (package, names) in map.iter() {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        println!("{} {}", style(package).bold(), names.join(", "));
    }
}
