use planpdf_core::model::{PageTables, WorkoutRecord};

/// Render workouts as an aligned table with a mileage summary.
pub fn format_workouts(workouts: &[WorkoutRecord]) -> String {
    let mut out = String::new();
    let type_width = workouts
        .iter()
        .map(|w| w.workout_type.as_str().len())
        .max()
        .unwrap_or(4)
        .max("Type".len());

    out.push_str(&format!(
        "  {:<10}  {:<3}  {:<type_width$}  {:>5}  Name\n",
        "Date", "Day", "Type", "Miles"
    ));
    for w in workouts {
        out.push_str(&format!(
            "  {:<10}  {:<3}  {:<type_width$}  {:>5.1}  {}\n",
            w.scheduled_date.format("%Y-%m-%d").to_string(),
            w.scheduled_date.format("%a").to_string(),
            w.workout_type.as_str(),
            w.planned_distance,
            w.name
        ));
    }

    let total: f64 = workouts.iter().map(|w| w.planned_distance).sum();
    out.push_str(&format!(
        "\n  {} workout(s), {:.1} miles planned",
        workouts.len(),
        total
    ));
    out
}

/// Render decoded tables per page, one row per line.
pub fn format_tables(pages: &[PageTables]) -> String {
    let mut out = String::new();

    for page in pages {
        out.push_str(&format!(
            "--- Page {} ({} table(s)) ---\n",
            page.page_number,
            page.tables.len()
        ));
        for (i, table) in page.tables.iter().enumerate() {
            out.push_str(&format!("  Table {}:\n", i + 1));
            for row in table {
                let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("")).collect();
                out.push_str(&format!("    {:?}\n", cells));
            }
        }
        out.push('\n');
    }

    out.trim_end().to_string()
}
