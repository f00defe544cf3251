use chrono::NaiveDate;
use planpdf_core::error::PlanImportError;
use planpdf_core::extraction::TableExtractor;
use planpdf_core::ExtractOptions;
use std::path::PathBuf;

use crate::commands::ensure_pdf;
use crate::output;

pub fn run(
    pdf_file: PathBuf,
    plan_start_date: NaiveDate,
    today: Option<NaiveDate>,
    extractor: &dyn TableExtractor,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), PlanImportError> {
    ensure_pdf(&pdf_file)?;
    let pdf_bytes = std::fs::read(&pdf_file)?;
    tracing::info!(file = %pdf_file.display(), bytes = pdf_bytes.len(), "read PDF");

    let options = today
        .map(|today| ExtractOptions { today })
        .unwrap_or_default();
    let workouts =
        planpdf_core::extract_workouts(&pdf_bytes, plan_start_date, extractor, &options);

    if workouts.is_empty() {
        return Err(PlanImportError::NoWorkouts);
    }

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&workouts)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} workout(s), written to {}",
                workouts.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&workouts)?,
            _ => println!("{}", output::table::format_workouts(&workouts)),
        },
    }

    Ok(())
}
