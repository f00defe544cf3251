use chrono::Local;
use planpdf_core::error::PlanImportError;
use planpdf_core::parsing::{
    classify_workout_type, extract_distance, interpret_cell, parse_week_date,
};

pub fn run(text: &str, week: Option<&str>) -> Result<(), PlanImportError> {
    let scheduled_date = match week {
        Some(token) => parse_week_date(token).ok_or_else(|| {
            PlanImportError::InvalidInput(format!("invalid week token '{token}', use e.g. 21-Jul"))
        })?,
        None => Local::now().date_naive(),
    };

    let distance = extract_distance(text)
        .map(|miles| format!("{miles} mi"))
        .unwrap_or_else(|| "none".into());
    let workout_type = classify_workout_type(text);

    println!("  Distance: {distance}");
    println!("  Type:     {workout_type}");
    match interpret_cell(text, scheduled_date) {
        Some(workout) => println!(
            "  Result:   workout \"{}\" on {}",
            workout.name, workout.scheduled_date
        ),
        None => println!("  Result:   dropped, no workout is created for this cell"),
    }

    Ok(())
}
