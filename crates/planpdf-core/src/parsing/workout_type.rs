use crate::model::WorkoutType;
use crate::parsing::normalize::normalize_cell;

/// One step of the classification cascade: the cell matches when its
/// lower-cased text contains any keyword (or is blank, if `blank` is set).
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    pub keywords: &'static [&'static str],
    pub blank: bool,
    pub workout_type: WorkoutType,
}

impl TypeRule {
    const fn any(keywords: &'static [&'static str], workout_type: WorkoutType) -> Self {
        TypeRule {
            keywords,
            blank: false,
            workout_type,
        }
    }

    pub fn matches(&self, lower: &str) -> bool {
        (self.blank && lower.trim().is_empty()) || self.keywords.iter().any(|k| lower.contains(k))
    }
}

/// Ordered, first match wins. The vocabularies overlap ("tempo" cells carry
/// "easy" warm-ups, intervals mention "pace"), so order decides.
pub const TYPE_RULES: &[TypeRule] = &[
    TypeRule::any(&["xt", "cross"], WorkoutType::CrossTraining),
    TypeRule {
        keywords: &["off"],
        blank: true,
        workout_type: WorkoutType::Rest,
    },
    TypeRule::any(&["tempo", "ghmp"], WorkoutType::Tempo),
    TypeRule::any(
        &[
            "interval", " x ", "@", "pace", "min on", "min off", "uphill", "5k pace", "10k pace",
            "400", "800", "1200", "warm-up",
        ],
        WorkoutType::Speed,
    ),
    TypeRule::any(&["long"], WorkoutType::Long),
    TypeRule::any(&["recovery"], WorkoutType::Recovery),
    TypeRule::any(&["easy"], WorkoutType::Easy),
    TypeRule::any(&["stride"], WorkoutType::Easy),
    TypeRule::any(&["race", "5 mc"], WorkoutType::Speed),
];

/// Used when no rule matches.
pub const DEFAULT_WORKOUT_TYPE: WorkoutType = WorkoutType::Easy;

/// Classify a workout description into one of the fixed workout types.
pub fn classify_workout_type(text: &str) -> WorkoutType {
    let lower = normalize_cell(text).to_lowercase();
    TYPE_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.workout_type)
        .unwrap_or(DEFAULT_WORKOUT_TYPE)
}
