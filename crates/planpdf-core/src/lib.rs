pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod plan;

use std::panic::{self, AssertUnwindSafe};

use chrono::{Local, NaiveDate};
use error::PlanImportError;
use extraction::TableExtractor;
use model::WorkoutRecord;

/// Options for a single extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Reference date for inferring the year of week tokens.
    pub today: NaiveDate,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            today: Local::now().date_naive(),
        }
    }
}

/// Main API entry point: extract scheduled workouts from a training plan PDF.
///
/// Never fails. Any error or panic while decoding or walking the document
/// is logged and yields an empty list; bad rows and cells are skipped
/// individually. `plan_start_date` is only recorded in the logs, dates come
/// from the week column of the document itself.
pub fn extract_workouts(
    pdf_bytes: &[u8],
    plan_start_date: NaiveDate,
    extractor: &dyn TableExtractor,
    options: &ExtractOptions,
) -> Vec<WorkoutRecord> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        try_extract_workouts(pdf_bytes, plan_start_date, extractor, options)
    }));

    match outcome {
        Ok(Ok(workouts)) => workouts,
        Ok(Err(e)) => {
            tracing::error!(
                error = %e,
                backend = extractor.backend_name(),
                bytes = pdf_bytes.len(),
                "failed to extract workouts from PDF"
            );
            Vec::new()
        }
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".into());
            tracing::error!(
                %reason,
                backend = extractor.backend_name(),
                bytes = pdf_bytes.len(),
                "workout extraction panicked"
            );
            Vec::new()
        }
    }
}

/// Like [`extract_workouts`], but reports document-level failures instead of
/// swallowing them.
pub fn try_extract_workouts(
    pdf_bytes: &[u8],
    plan_start_date: NaiveDate,
    extractor: &dyn TableExtractor,
    options: &ExtractOptions,
) -> Result<Vec<WorkoutRecord>, PlanImportError> {
    tracing::info!(
        backend = extractor.backend_name(),
        bytes = pdf_bytes.len(),
        %plan_start_date,
        today = %options.today,
        "processing PDF"
    );

    let pages = extractor.extract_tables(pdf_bytes)?;
    tracing::info!(pages = pages.len(), "decoded PDF tables");

    let workouts = plan::extract_from_tables(&pages, options.today);
    tracing::info!(count = workouts.len(), "extracted workouts from PDF");
    Ok(workouts)
}
