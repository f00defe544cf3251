pub mod classify;
pub mod extract;
pub mod tables;

use chrono::NaiveDate;
use planpdf_core::error::PlanImportError;
use std::path::Path;

/// Parse an ISO `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date format '{s}', use YYYY-MM-DD"))
}

/// Reject inputs that are not named like a PDF before reading them.
pub fn ensure_pdf(path: &Path) -> Result<(), PlanImportError> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(PlanImportError::InvalidInput(format!(
            "file must be a PDF: {}",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-07-21"),
            Ok(NaiveDate::from_ymd_opt(2026, 7, 21).unwrap())
        );
        assert!(parse_date("21-07-2026").is_err());
        assert!(parse_date("2026-13-01").is_err());
    }

    #[test]
    fn test_ensure_pdf() {
        assert!(ensure_pdf(Path::new("plan.pdf")).is_ok());
        assert!(ensure_pdf(Path::new("PLAN.PDF")).is_ok());
        assert!(ensure_pdf(Path::new("plan.xlsx")).is_err());
        assert!(ensure_pdf(Path::new("plan")).is_err());
    }
}
