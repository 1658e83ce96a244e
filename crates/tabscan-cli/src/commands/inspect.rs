//! Inspect command - load a file and print its diagnostic report.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tabscan::{InspectionReport, Inspector};

pub fn run(
    file: PathBuf,
    date_column: String,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = super::load_table(&file, date_column)?;
    let report = Inspector::new().inspect(&table)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render(&file, &report);
    Ok(())
}

/// Human-readable rendering. Presentation only; the report struct is the
/// contract.
fn render(file: &Path, report: &InspectionReport) {
    println!(
        "{} {}",
        "Inspecting".cyan().bold(),
        file.display().to_string().white()
    );
    println!(
        "Dimensions (rows, columns): ({}, {})",
        report.dimensions.rows, report.dimensions.columns
    );

    println!();
    println!("{}", "Column types:".yellow().bold());
    for (name, ty) in &report.column_types {
        println!("  {:20} {:?}", name, ty);
    }

    if report.has_missing() {
        println!();
        println!("{}", "Missing values:".yellow().bold());
        for (name, &count) in &report.null_counts {
            if count > 0 {
                println!("  {:20} {}", name, count.to_string().red());
            }
        }
    } else {
        println!();
        println!("{}", "No missing values detected.".green());
    }

    println!();
    println!("{}", "Distinct values:".yellow().bold());
    for (name, count) in &report.distinct_counts {
        println!("  {:20} {}", name, count);
    }

    println!();
    println!(
        "Number of duplicate rows: {}",
        report.duplicates.count.to_string().white().bold()
    );
    for dup in &report.duplicates.rows {
        let cells: Vec<String> = dup
            .values
            .iter()
            .map(|v| v.to_json().to_string())
            .collect();
        println!("  row {:4}  {}", dup.index, cells.join(", "));
    }

    if !report.numeric_summaries.is_empty() {
        println!();
        println!("{}", "Summary statistics (numeric columns):".yellow().bold());
        for (name, s) in &report.numeric_summaries {
            println!("  {}", name.white().bold());
            println!("    count  {}", s.count);
            println!("    mean   {:.4}", s.mean);
            match s.std {
                Some(std) => println!("    std    {:.4}", std),
                None => println!("    std    n/a"),
            }
            println!("    min    {:.4}", s.min);
            println!("    25%    {:.4}", s.q1);
            println!("    50%    {:.4}", s.median);
            println!("    75%    {:.4}", s.q3);
            println!("    max    {:.4}", s.max);
        }
    }
}
