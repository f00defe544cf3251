use planpdf_core::error::PlanImportError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), PlanImportError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
