use planpdf_core::error::PlanImportError;
use planpdf_core::extraction::TableExtractor;
use std::path::PathBuf;

use crate::commands::ensure_pdf;
use crate::output;

pub fn run(
    pdf_file: PathBuf,
    extractor: &dyn TableExtractor,
    output_format: &str,
) -> Result<(), PlanImportError> {
    ensure_pdf(&pdf_file)?;
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let pages = extractor.extract_tables(&pdf_bytes)?;

    match output_format {
        "json" => output::json::print(&pages)?,
        _ => println!("{}", output::table::format_tables(&pages)),
    }

    Ok(())
}
