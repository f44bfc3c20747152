use anyhow::Result;
use area_kit_validator::{ValidationReport, validate_output, validate_site};
use std::path::PathBuf;

use super::load_site;

pub fn run(config: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let site = load_site(config.as_deref())?;

    match &config {
        Some(path) => println!("Validating {}", path.display()),
        None => println!("Validating built-in location list"),
    }

    let mut report = validate_site(&site);
    if let Some(output) = &output {
        println!("   Output: {}", output.display());
        report.merge(validate_output(&site, output)?);
    }
    println!();

    print_report(&report);

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!();
    println!("✓ No errors");
    Ok(())
}

fn print_report(report: &ValidationReport) {
    for line in &report.info {
        println!("  {}", line);
    }
    for line in &report.warnings {
        eprintln!("  ⚠ {}", line);
    }
    for line in &report.errors {
        eprintln!("  ✗ {}", line);
    }
}
