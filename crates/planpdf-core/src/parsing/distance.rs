use crate::parsing::normalize::normalize_cell;
use regex::Regex;
use std::sync::LazyLock;

/// Shortest planned run we accept, in miles.
pub const MIN_DISTANCE_MILES: f64 = 0.5;
/// Longest planned run we accept, in miles.
pub const MAX_DISTANCE_MILES: f64 = 25.0;

/// Cell markers that never carry a distance.
const NO_DISTANCE_MARKERS: &[&str] = &["XT", "OFF", "PARTAY"];

/// One step of the distance cascade. Only the first match of `pattern` is
/// looked at; its `number` group must fall in the plausible range.
pub struct DistanceRule {
    pub name: &'static str,
    pub pattern: Regex,
}

/// Ordered, first match wins. Specific phrasing goes before the generic
/// fallbacks so "3 x 1 mile, cool down to 6 miles" reads as 6.
pub static DISTANCE_RULES: LazyLock<Vec<DistanceRule>> = LazyLock::new(|| {
    [
        ("to_miles", r"(?i)to\s+(?P<number>[0-9]+\.?[0-9]*)\s*(?:miles?|mi)"),
        ("total", r"(?i)(?P<number>[0-9]+\.?[0-9]*)\s*(?:miles?|mi)?\s+total"),
        ("miles", r"(?i)(?P<number>[0-9]+\.?[0-9]*)\s*(?:miles?|mi)\b"),
        ("leading_number", r"^(?P<number>[0-9]+\.?[0-9]*)\s+"),
        ("first_number", r"(?P<number>[0-9]+\.?[0-9]*)"),
    ]
    .into_iter()
    .map(|(name, pattern)| DistanceRule {
        name,
        pattern: Regex::new(pattern).unwrap(),
    })
    .collect()
});

impl DistanceRule {
    /// The plausible distance this rule reads from `text`, if any.
    pub fn apply(&self, text: &str) -> Option<f64> {
        let caps = self.pattern.captures(text)?;
        let distance: f64 = caps.name("number")?.as_str().parse().ok()?;
        is_plausible(distance).then_some(distance)
    }
}

/// Whether a distance is a believable single-day running distance.
pub fn is_plausible(miles: f64) -> bool {
    (MIN_DISTANCE_MILES..=MAX_DISTANCE_MILES).contains(&miles)
}

/// Extract the planned distance in miles from a workout description.
///
/// Handles cells like "3.5 easy", "5", "4 easy + strides",
/// "8 miles total" and "warm up, 4 x 800, cool down to 6 miles".
/// Returns `None` for rest and cross-training markers and for text without
/// a number in the plausible range.
pub fn extract_distance(text: &str) -> Option<f64> {
    let text = normalize_cell(text);
    if text.is_empty() {
        return None;
    }

    let upper = text.to_uppercase();
    if NO_DISTANCE_MARKERS.contains(&upper.as_str()) {
        return None;
    }

    DISTANCE_RULES.iter().find_map(|rule| {
        let found = rule.apply(&text);
        if let Some(miles) = found {
            tracing::trace!(rule = rule.name, miles, "distance rule matched");
        }
        found
    })
}
