// SPDX-License-Identifier: MIT

//! Date policy helpers for diary queries.
//!
//! FatSecret indexes diary days by an integer count of whole days since
//! 1970-01-01, not by any timestamp or string format. The clamping policy
//! lives here as named functions so tests can target it directly.

use chrono::{Days, Local, NaiveDate};

/// Integer count of whole days between 1970-01-01 and `date`.
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    // NaiveDate::default() is the Unix epoch, the vendor's day-indexing origin.
    (date - NaiveDate::default()).num_days()
}

/// Default diary date when none is requested: yesterday, local time.
pub fn default_diary_date() -> NaiveDate {
    yesterday(Local::now().date_naive())
}

/// Clamp a requested date against `today`: a date strictly in the future is
/// silently replaced with yesterday (the default), never rejected.
pub fn clamp_future_date(requested: NaiveDate, today: NaiveDate) -> NaiveDate {
    if requested > today {
        yesterday(today)
    } else {
        requested
    }
}

fn yesterday(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

/// Resolve the `date` query parameter to the date actually sent to the
/// vendor. `None` and unparseable values both fall back to yesterday.
pub fn resolve_diary_date(param: Option<&str>) -> NaiveDate {
    let today = Local::now().date_naive();
    match param.and_then(|s| s.parse::<NaiveDate>().ok()) {
        Some(date) => clamp_future_date(date, today),
        None => yesterday(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_days_since_epoch_origin() {
        assert_eq!(days_since_epoch(d("1970-01-01")), 0);
        assert_eq!(days_since_epoch(d("1970-01-02")), 1);
    }

    #[test]
    fn test_days_since_epoch_default_is_before_tomorrow() {
        let default = days_since_epoch(default_diary_date());
        let tomorrow = Local::now()
            .date_naive()
            .checked_add_days(Days::new(1))
            .unwrap();
        assert!(default >= 0);
        assert!(default < days_since_epoch(tomorrow));
    }

    #[test]
    fn test_clamp_passes_today_and_past() {
        let today = d("2026-08-29");
        assert_eq!(clamp_future_date(d("2026-08-29"), today), d("2026-08-29"));
        assert_eq!(clamp_future_date(d("2025-01-15"), today), d("2025-01-15"));
    }

    #[test]
    fn test_clamp_future_falls_back_to_yesterday() {
        let today = d("2026-08-29");
        assert_eq!(clamp_future_date(d("2026-08-30"), today), d("2026-08-28"));
        assert_eq!(clamp_future_date(d("2030-01-01"), today), d("2026-08-28"));
    }

    #[test]
    fn test_resolve_future_matches_no_date() {
        // A future date must resolve to the same day as passing no date.
        assert_eq!(resolve_diary_date(Some("2999-12-31")), resolve_diary_date(None));
        assert_eq!(resolve_diary_date(None), default_diary_date());
    }

    #[test]
    fn test_resolve_garbage_falls_back() {
        assert_eq!(resolve_diary_date(Some("not-a-date")), default_diary_date());
    }
}
