//! Integration tests for extract_workouts() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built tables without invoking
//! pdftotext, so these tests run without poppler-utils.

use chrono::NaiveDate;
use planpdf_core::error::PlanImportError;
use planpdf_core::extraction::TableExtractor;
use planpdf_core::model::{PageTables, RawTable, WorkoutType};
use planpdf_core::{extract_workouts, try_extract_workouts, ExtractOptions};

enum MockExtractor {
    Pages(Vec<PageTables>),
    Fails,
    Panics,
}

impl TableExtractor for MockExtractor {
    fn extract_tables(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageTables>, PlanImportError> {
        match self {
            MockExtractor::Pages(pages) => Ok(pages.clone()),
            MockExtractor::Fails => Err(PlanImportError::Extraction("not a PDF".into())),
            MockExtractor::Panics => panic!("decoder blew up"),
        }
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn options() -> ExtractOptions {
    ExtractOptions {
        today: date(2026, 10, 19),
    }
}

fn plan_start() -> NaiveDate {
    date(2026, 7, 21)
}

fn row(cells: &[&str]) -> Vec<Option<String>> {
    cells
        .iter()
        .map(|c| if c.is_empty() { None } else { Some(c.to_string()) })
        .collect()
}

fn header() -> Vec<Option<String>> {
    row(&[
        "Week",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ])
}

fn page(number: usize, tables: Vec<RawTable>) -> PageTables {
    PageTables {
        page_number: number,
        tables,
    }
}

// ---------------------------------------------------------------------------
// Test 1: One week with rest, cross training and blank days
// ---------------------------------------------------------------------------
#[test]
fn single_week_yields_four_workouts() {
    let extractor = MockExtractor::Pages(vec![page(
        1,
        vec![vec![
            header(),
            row(&[
                "21-Jul",
                "3.5 easy",
                "XT",
                "5 tempo run",
                "OFF",
                "4 easy + strides",
                "",
                "10 long run",
            ]),
        ]],
    )]);

    let workouts = extract_workouts(&[], plan_start(), &extractor, &options());

    assert_eq!(workouts.len(), 4);
    let summary: Vec<(NaiveDate, WorkoutType, f64)> = workouts
        .iter()
        .map(|w| (w.scheduled_date, w.workout_type, w.planned_distance))
        .collect();
    assert_eq!(
        summary,
        vec![
            (date(2026, 7, 21), WorkoutType::Easy, 3.5),
            (date(2026, 7, 23), WorkoutType::Tempo, 5.0),
            (date(2026, 7, 25), WorkoutType::Easy, 4.0),
            (date(2026, 7, 27), WorkoutType::Long, 10.0),
        ]
    );
    assert_eq!(workouts[0].name, "3.5 easy");
    assert_eq!(workouts[2].name, "4 easy + strides");
}

// ---------------------------------------------------------------------------
// Test 2: Documents without tables
// ---------------------------------------------------------------------------
#[test]
fn no_tables_returns_empty() {
    let extractor = MockExtractor::Pages(vec![page(1, vec![]), page(2, vec![])]);
    assert!(extract_workouts(&[], plan_start(), &extractor, &options()).is_empty());

    let empty = MockExtractor::Pages(vec![]);
    assert!(extract_workouts(&[], plan_start(), &empty, &options()).is_empty());
}

// ---------------------------------------------------------------------------
// Test 3: An unreadable week token only costs its own row
// ---------------------------------------------------------------------------
#[test]
fn bad_week_token_does_not_stop_later_rows() {
    let extractor = MockExtractor::Pages(vec![page(
        1,
        vec![vec![
            header(),
            row(&["banana", "3 easy", "", "", "", "", "", "8 long"]),
            row(&["28-Jul", "4 easy", "", "", "", "", "", "11 long"]),
        ]],
    )]);

    let workouts = extract_workouts(&[], plan_start(), &extractor, &options());
    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[0].scheduled_date, date(2026, 7, 28));
    assert_eq!(workouts[1].scheduled_date, date(2026, 8, 3));
}

// ---------------------------------------------------------------------------
// Test 4: Plan spanning the year boundary
// ---------------------------------------------------------------------------
#[test]
fn weeks_after_new_year_roll_forward() {
    let extractor = MockExtractor::Pages(vec![page(
        1,
        vec![vec![
            header(),
            row(&["22-Dec", "3 easy"]),
            row(&["29-Dec", "", "", "", "", "", "", "12 long"]),
            row(&["5-Jan", "4 recovery"]),
        ]],
    )]);
    let opts = ExtractOptions {
        today: date(2026, 12, 1),
    };

    let workouts = extract_workouts(&[], plan_start(), &extractor, &opts);
    let dates: Vec<NaiveDate> = workouts.iter().map(|w| w.scheduled_date).collect();
    assert_eq!(
        dates,
        vec![date(2026, 12, 22), date(2027, 1, 4), date(2027, 1, 5)]
    );
    assert_eq!(workouts[2].workout_type, WorkoutType::Recovery);
}

// ---------------------------------------------------------------------------
// Test 5: Multi-page document accumulates in page order
// ---------------------------------------------------------------------------
#[test]
fn multi_page_accumulates_in_order() {
    let extractor = MockExtractor::Pages(vec![
        page(1, vec![vec![header(), row(&["21-Jul", "3 easy"])]]),
        page(2, vec![]),
        page(
            3,
            vec![
                vec![header()],
                vec![header(), row(&["28-Jul", "", "6 x 800"])],
            ],
        ),
    ]);

    let workouts = extract_workouts(&[], plan_start(), &extractor, &options());
    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[1].workout_type, WorkoutType::Speed);
    assert_eq!(workouts[1].planned_distance, 6.0);
    assert_eq!(workouts[1].scheduled_date, date(2026, 7, 29));
}

// ---------------------------------------------------------------------------
// Test 6: Document-level failures become an empty list
// ---------------------------------------------------------------------------
#[test]
fn decoder_error_returns_empty() {
    let workouts = extract_workouts(b"garbage", plan_start(), &MockExtractor::Fails, &options());
    assert!(workouts.is_empty());

    let err = try_extract_workouts(b"garbage", plan_start(), &MockExtractor::Fails, &options())
        .unwrap_err();
    assert!(matches!(err, PlanImportError::Extraction(_)));
}

#[test]
fn decoder_panic_returns_empty() {
    let workouts = extract_workouts(b"garbage", plan_start(), &MockExtractor::Panics, &options());
    assert!(workouts.is_empty());
}

// ---------------------------------------------------------------------------
// Test 7: Records serialize as create-workout payloads
// ---------------------------------------------------------------------------
#[test]
fn records_serialize_as_workout_payloads() {
    let extractor = MockExtractor::Pages(vec![page(
        1,
        vec![vec![header(), row(&["21-Jul", "5 tempo run"])]],
    )]);

    let workouts = extract_workouts(&[], plan_start(), &extractor, &options());
    let json = serde_json::to_value(&workouts).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "name": "5 tempo run",
            "workout_type": "TEMPO",
            "planned_distance": 5.0,
            "scheduled_date": "2026-07-21"
        }])
    );
}
