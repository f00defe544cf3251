use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded table: row 0 is the header, every cell may be missing.
pub type RawTable = Vec<Vec<Option<String>>>;

/// All tables found on a single page of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTables {
    /// 1-based page number.
    pub page_number: usize,
    pub tables: Vec<RawTable>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday first, matching the column order of a training week.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Days after the week start (Monday = 0).
    pub fn offset(&self) -> u64 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// Match a header cell against the full weekday name, ignoring case and
    /// surrounding whitespace.
    pub fn from_header(s: &str) -> Option<Weekday> {
        let lower = s.trim().to_lowercase();
        Weekday::ALL.into_iter().find(|d| d.name() == lower)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// Workout categories accepted by the workout-creation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutType {
    Easy,
    Tempo,
    Long,
    Speed,
    Recovery,
    CrossTraining,
    Rest,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Easy => "EASY",
            WorkoutType::Tempo => "TEMPO",
            WorkoutType::Long => "LONG",
            WorkoutType::Speed => "SPEED",
            WorkoutType::Recovery => "RECOVERY",
            WorkoutType::CrossTraining => "CROSS_TRAINING",
            WorkoutType::Rest => "REST",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled workout, shaped as the payload of a create-workout call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Cell text, at most 100 characters.
    pub name: String,
    pub workout_type: WorkoutType,
    /// Planned distance in miles, always within the plausible range.
    pub planned_distance: f64,
    pub scheduled_date: NaiveDate,
    /// Never set by extraction; callers may add pace targets before submitting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_pace_min_sec: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_pace_max_sec: Option<u32>,
}
