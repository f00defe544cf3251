use chrono::{Days, NaiveDate};

use crate::model::{PageTables, RawTable, Weekday, WorkoutRecord};
use crate::parsing::normalize::is_blank;
use crate::parsing::{interpret_cell, resolve_week_date};

/// Walk every page and table and collect the workouts they schedule.
///
/// Rows with an unreadable week token and cells without a distance are
/// skipped; nothing here fails the document.
pub fn extract_from_tables(pages: &[PageTables], today: NaiveDate) -> Vec<WorkoutRecord> {
    let mut workouts = Vec::new();

    for page in pages {
        tracing::info!(page = page.page_number, "processing page");
        if page.tables.is_empty() {
            tracing::warn!(page = page.page_number, "no tables found on page");
            continue;
        }

        for (table_idx, table) in page.tables.iter().enumerate() {
            tracing::info!(
                page = page.page_number,
                table = table_idx + 1,
                rows = table.len(),
                "processing table"
            );
            extract_from_table(table, today, &mut workouts);
        }
    }

    workouts
}

/// Map each weekday named in the header row to its column, in header order.
///
/// A weekday named twice keeps its first position but points at the last
/// column carrying it.
pub fn day_columns(header: &[Option<String>]) -> Vec<(Weekday, usize)> {
    let mut columns: Vec<(Weekday, usize)> = Vec::new();
    for (idx, cell) in header.iter().enumerate() {
        let Some(day) = cell.as_deref().and_then(Weekday::from_header) else {
            continue;
        };
        match columns.iter_mut().find(|(d, _)| *d == day) {
            Some(existing) => existing.1 = idx,
            None => columns.push((day, idx)),
        }
    }
    columns
}

fn extract_from_table(table: &RawTable, today: NaiveDate, workouts: &mut Vec<WorkoutRecord>) {
    // Header plus at least one week.
    if table.len() < 2 {
        return;
    }

    let days = day_columns(&table[0]);
    tracing::info!(
        found = days.len(),
        days = ?days.iter().map(|(d, _)| d.name()).collect::<Vec<_>>(),
        "found day columns"
    );

    for (row_num, row) in table.iter().enumerate().skip(1) {
        let week_cell = row.first().and_then(|c| c.as_deref());
        let Some(week_token) = week_cell.filter(|s| !is_blank(s)) else {
            continue;
        };

        let Some(week_start) = resolve_week_date(week_token, today) else {
            tracing::debug!(row = row_num, week_token, "skipping row, unreadable week date");
            continue;
        };
        tracing::debug!(row = row_num, %week_start, "processing week");

        for &(day, col) in &days {
            let cell = row.get(col).and_then(|c| c.as_deref());
            let Some(text) = cell.filter(|s| !is_blank(s)) else {
                continue;
            };
            let Some(scheduled_date) = week_start.checked_add_days(Days::new(day.offset())) else {
                continue;
            };

            if let Some(workout) = interpret_cell(text, scheduled_date) {
                tracing::debug!(
                    name = %workout.name,
                    %scheduled_date,
                    miles = workout.planned_distance,
                    workout_type = %workout.workout_type,
                    "added workout"
                );
                workouts.push(workout);
            }
        }
    }
}
