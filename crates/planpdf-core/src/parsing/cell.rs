use chrono::NaiveDate;

use crate::model::WorkoutRecord;
use crate::parsing::distance::extract_distance;
use crate::parsing::normalize::normalize_cell;
use crate::parsing::workout_type::classify_workout_type;

/// Longest workout name, in characters, ellipsis included.
pub const MAX_NAME_CHARS: usize = 100;
const ELLIPSIS: &str = "...";

/// Turn one table cell into a workout scheduled on `scheduled_date`.
///
/// Rest days, parties and cross-training without mileage ("XT", "XT + core")
/// are dropped, as is any cell without a plausible distance.
pub fn interpret_cell(cell_text: &str, scheduled_date: NaiveDate) -> Option<WorkoutRecord> {
    let text = normalize_cell(cell_text);
    if text.is_empty() {
        return None;
    }

    let upper = text.to_uppercase();
    if upper == "OFF" || upper == "PARTAY" {
        tracing::trace!(%scheduled_date, cell = %text, "rest day");
        return None;
    }
    // Cross training has no distance to track.
    if upper == "XT" || upper.starts_with("XT +") {
        tracing::trace!(%scheduled_date, cell = %text, "cross training dropped");
        return None;
    }

    let Some(planned_distance) = extract_distance(&text) else {
        tracing::debug!(%scheduled_date, cell = %text, "no distance found, skipping cell");
        return None;
    };

    Some(WorkoutRecord {
        name: workout_name(&text),
        workout_type: classify_workout_type(&text),
        planned_distance,
        scheduled_date,
        target_pace_min_sec: None,
        target_pace_max_sec: None,
    })
}

/// Truncate to [`MAX_NAME_CHARS`] characters, ending in "..." when cut.
pub fn workout_name(text: &str) -> String {
    if text.chars().count() <= MAX_NAME_CHARS {
        return text.to_string();
    }
    let keep = MAX_NAME_CHARS - ELLIPSIS.len();
    let mut name: String = text.chars().take(keep).collect();
    name.push_str(ELLIPSIS);
    name
}
