//! Merge command - fold curation files into one curation.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use curator::{PackageCurationData, merge_all};
use tracing::debug;

pub fn run(
    files: Vec<PathBuf>,
    output: Option<PathBuf>,
    compact: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut curations = Vec::with_capacity(files.len());

    for file in &files {
        if !file.exists() {
            return Err(format!("Curation file not found: {}", file.display()).into());
        }

        let json = fs::read_to_string(file)
            .map_err(|e| format!("Failed to read '{}': {}", file.display(), e))?;
        let curation = PackageCurationData::from_json(&json)
            .map_err(|e| format!("Failed to parse '{}': {}", file.display(), e))?;

        debug!(file = %file.display(), fields = curation.set_field_count(), "loaded curation");
        curations.push(curation);
    }

    let merged = merge_all(&curations);

    let json = if compact {
        merged.to_json()?
    } else {
        merged.to_json_pretty()?
    };

    match &output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?,
        None => println!("{json}"),
    }

    if verbose {
        eprintln!(
            "{} {} curations into {} set fields",
            "Merged".cyan().bold(),
            curations.len().to_string().white().bold(),
            merged.set_field_count().to_string().white().bold()
        );
        if let Some(path) = &output {
            eprintln!("Saved to {}", path.display().to_string().cyan());
        }
    }

    Ok(())
}
