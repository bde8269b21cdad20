use chrono::{Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc, Weekday};
use hourtrack_core::{end_of_day_instant, WeekWindow, DEFAULT_REPORT_WEEKS};

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn pacific() -> FixedOffset {
    FixedOffset::west_opt(8 * 3600).unwrap()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn current_week_runs_sunday_through_saturday() {
    // 2023-04-05 is a Wednesday.
    let now = Utc.with_ymd_and_hms(2023, 4, 5, 12, 0, 0).unwrap();
    let window = WeekWindow::for_weeks_back(now, utc(), 0);

    assert_eq!(window.from_date, day(2023, 4, 2));
    assert_eq!(window.to_date, day(2023, 4, 8));
    assert_eq!(window.from_date.weekday(), Weekday::Sun);
    assert_eq!(window.to_date.weekday(), Weekday::Sat);
}

#[test]
fn report_windows_step_back_one_week_per_index() {
    let now = Utc.with_ymd_and_hms(2023, 4, 5, 12, 0, 0).unwrap();
    let windows = WeekWindow::report_windows(now, utc());

    assert_eq!(windows.len(), DEFAULT_REPORT_WEEKS);
    assert_eq!(windows[0].from_date, day(2023, 4, 2));
    for pair in windows.windows(2) {
        assert_eq!(pair[0].from_date - pair[1].from_date, Duration::weeks(1));
        assert_eq!(pair[0].to_date - pair[1].to_date, Duration::weeks(1));
    }
}

#[test]
fn week_membership_follows_the_reference_offset() {
    // 2023-04-02 04:00 UTC is still Saturday evening in UTC-8, so the
    // Pacific report week is the one ending April 1.
    let now = Utc.with_ymd_and_hms(2023, 4, 2, 4, 0, 0).unwrap();

    let utc_window = WeekWindow::for_weeks_back(now, utc(), 0);
    assert_eq!(utc_window.from_date, day(2023, 4, 2));

    let pacific_window = WeekWindow::for_weeks_back(now, pacific(), 0);
    assert_eq!(pacific_window.from_date, day(2023, 3, 26));
    assert_eq!(pacific_window.to_date, day(2023, 4, 1));
}

#[test]
fn end_instant_is_end_of_saturday_in_the_reference_offset() {
    let now = Utc.with_ymd_and_hms(2023, 4, 5, 12, 0, 0).unwrap();

    let utc_window = WeekWindow::for_weeks_back(now, utc(), 0);
    assert_eq!(
        utc_window.end_instant(),
        day(2023, 4, 8)
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap()
            .and_utc()
    );
}

#[test]
fn end_of_day_instant_shifts_with_the_offset() {
    let end = end_of_day_instant(day(2022, 12, 31), pacific());
    assert_eq!(
        end,
        day(2023, 1, 1)
            .and_hms_milli_opt(7, 59, 59, 999)
            .unwrap()
            .and_utc()
    );
}

#[test]
fn labels_use_the_report_date_format() {
    let now = Utc.with_ymd_and_hms(2023, 4, 5, 12, 0, 0).unwrap();
    let window = WeekWindow::for_weeks_back(now, utc(), 1);

    assert_eq!(window.from_label(), "Mar-26-23");
    assert_eq!(window.to_label(), "Apr-01-23");
}
