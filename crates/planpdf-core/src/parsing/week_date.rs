use chrono::{Datelike, Local, NaiveDate};

/// A week start further in the past than this is assumed to belong to next
/// year (a plan parsed in December that starts in January).
pub const YEAR_ROLLOVER_DAYS: i64 = 180;

/// Resolve a week token such as "21-Jul" against the local current date.
pub fn parse_week_date(token: &str) -> Option<NaiveDate> {
    resolve_week_date(token, Local::now().date_naive())
}

/// Resolve a "day-month" token (no year) to a calendar date.
///
/// The token is parsed with `today`'s year; when that lands more than
/// [`YEAR_ROLLOVER_DAYS`] before `today` it is parsed again with the
/// following year. Returns `None` when the token is not a valid day-month
/// pair, in which case the caller skips the row.
pub fn resolve_week_date(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    let token = token.trim();
    let year = today.year();

    let resolved = parse_with_year(token, year).and_then(|date| {
        if (today - date).num_days() > YEAR_ROLLOVER_DAYS {
            parse_with_year(token, year + 1)
        } else {
            Ok(date)
        }
    });

    match resolved {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(token, error = %e, "failed to parse week date");
            None
        }
    }
}

fn parse_with_year(token: &str, year: i32) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(&format!("{token}-{year}"), "%d-%b-%Y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_week_date_uses_local_today() {
        let today = Local::now().date_naive();
        let token = today.format("%d-%b").to_string();
        assert_eq!(parse_week_date(&token), Some(today));
        assert_eq!(parse_week_date("31-Foo"), None);
    }

    #[test]
    fn test_recent_date_keeps_current_year() {
        let today = date(2026, 10, 19);
        assert_eq!(resolve_week_date("21-Jul", today), Some(date(2026, 7, 21)));
    }

    #[test]
    fn test_upcoming_date_keeps_current_year() {
        let today = date(2026, 1, 10);
        assert_eq!(resolve_week_date("15-Dec", today), Some(date(2026, 12, 15)));
    }

    #[test]
    fn test_plan_starting_next_january_rolls_over() {
        let today = date(2026, 12, 15);
        assert_eq!(resolve_week_date("5-Jan", today), Some(date(2027, 1, 5)));
    }

    #[test]
    fn test_rollover_boundary_is_exclusive() {
        let today = date(2026, 10, 19);
        // 180 days back stays, 181 rolls forward
        assert_eq!(resolve_week_date("22-Apr", today), Some(date(2026, 4, 22)));
        assert_eq!(resolve_week_date("21-Apr", today), Some(date(2027, 4, 21)));
    }

    #[test]
    fn test_every_stale_token_rolls_forward() {
        let today = date(2026, 10, 19);
        let mut day = date(2026, 1, 1);
        while day.year() == 2026 {
            let token = day.format("%d-%b").to_string();
            let resolved = resolve_week_date(&token, today).unwrap();
            if (today - day).num_days() > YEAR_ROLLOVER_DAYS {
                assert_eq!(resolved, date(2027, day.month(), day.day()), "{token}");
            } else {
                assert_eq!(resolved, day, "{token}");
            }
            day += Duration::days(1);
        }
    }

    #[test]
    fn test_case_insensitive_month_and_padding() {
        let today = date(2026, 10, 19);
        assert_eq!(resolve_week_date(" 04-aug ", today), Some(date(2026, 8, 4)));
        assert_eq!(resolve_week_date("4-AUG", today), Some(date(2026, 8, 4)));
    }

    #[test]
    fn test_garbage_token_is_none() {
        let today = date(2026, 10, 19);
        assert_eq!(resolve_week_date("banana", today), None);
        assert_eq!(resolve_week_date("", today), None);
        assert_eq!(resolve_week_date("21/07", today), None);
        assert_eq!(resolve_week_date("21-Jul-2026", today), None);
    }

    #[test]
    fn test_leap_day_in_common_year_is_none() {
        assert_eq!(resolve_week_date("29-Feb", date(2026, 10, 19)), None);
        assert_eq!(resolve_week_date("29-Feb", date(2028, 1, 10)), Some(date(2028, 2, 29)));
    }
}
