use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use hourtrack_core::{
    promised_hours, CommitmentChange, DEFAULT_WEEKLY_COMMITTED_HOURS, HISTORY_NOT_TRACKED,
};

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn pacific() -> FixedOffset {
    FixedOffset::west_opt(8 * 3600).unwrap()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn change(year: i32, month: u32, day: u32, hours: f64) -> CommitmentChange {
    CommitmentChange::new(
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
        hours,
    )
}

#[test]
fn absent_history_resolves_to_sentinel_for_any_date() {
    for end in [day(1999, 1, 1), day(2023, 2, 1), day(2030, 12, 31)] {
        assert_eq!(promised_hours(end, utc(), None), HISTORY_NOT_TRACKED);
    }
}

#[test]
fn empty_history_resolves_to_default_for_any_date() {
    for end in [day(1999, 1, 1), day(2023, 2, 1), day(2030, 12, 31)] {
        assert_eq!(
            promised_hours(end, utc(), Some(&[])),
            DEFAULT_WEEKLY_COMMITTED_HOURS
        );
    }
}

#[test]
fn resolves_the_step_function_across_a_two_change_history() {
    let history = [change(2023, 1, 1, 5.0), change(2023, 3, 1, 15.0)];

    assert_eq!(promised_hours(day(2022, 12, 31), utc(), Some(&history)), 0.0);
    assert_eq!(promised_hours(day(2023, 2, 1), utc(), Some(&history)), 5.0);
    assert_eq!(promised_hours(day(2023, 4, 1), utc(), Some(&history)), 15.0);
}

#[test]
fn latest_change_wins_for_any_later_week() {
    let history = [
        change(2022, 6, 1, 8.0),
        change(2022, 9, 1, 12.0),
        change(2023, 1, 15, 20.0),
    ];

    assert_eq!(promised_hours(day(2023, 1, 15), utc(), Some(&history)), 20.0);
    assert_eq!(promised_hours(day(2027, 7, 4), utc(), Some(&history)), 20.0);
}

#[test]
fn change_dated_exactly_at_the_cutoff_is_in_effect() {
    let at_cutoff = CommitmentChange::new(
        day(2023, 2, 1)
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap()
            .and_utc(),
        7.0,
    );

    assert_eq!(promised_hours(day(2023, 2, 1), utc(), Some(&[at_cutoff])), 7.0);
}

#[test]
fn change_one_millisecond_after_the_cutoff_is_not_in_effect() {
    let just_after = CommitmentChange::new(
        Utc.with_ymd_and_hms(2023, 2, 2, 0, 0, 0).unwrap(),
        7.0,
    );

    assert_eq!(promised_hours(day(2023, 2, 1), utc(), Some(&[just_after])), 0.0);
}

#[test]
fn unsorted_history_resolves_as_if_sorted() {
    let history = [change(2023, 3, 1, 15.0), change(2023, 1, 1, 5.0)];

    assert_eq!(promised_hours(day(2023, 2, 1), utc(), Some(&history)), 5.0);
    assert_eq!(promised_hours(day(2023, 4, 1), utc(), Some(&history)), 15.0);
}

#[test]
fn later_appended_change_wins_on_equal_timestamps() {
    let history = [change(2023, 1, 1, 5.0), change(2023, 1, 1, 8.0)];

    assert_eq!(promised_hours(day(2023, 2, 1), utc(), Some(&history)), 8.0);
}

#[test]
fn cutoff_is_normalized_in_the_reference_offset() {
    // Five hours into Jan 1 UTC: still Dec 31 in UTC-8, where the day ends
    // at 07:59:59.999Z on Jan 1.
    let history = [CommitmentChange::new(
        Utc.with_ymd_and_hms(2023, 1, 1, 5, 0, 0).unwrap(),
        5.0,
    )];

    assert_eq!(promised_hours(day(2022, 12, 31), utc(), Some(&history)), 0.0);
    assert_eq!(
        promised_hours(day(2022, 12, 31), pacific(), Some(&history)),
        5.0
    );
}

#[test]
fn repeated_calls_with_identical_inputs_agree() {
    let history = [change(2023, 1, 1, 5.0), change(2023, 3, 1, 15.0)];

    let first = promised_hours(day(2023, 2, 1), utc(), Some(&history));
    let second = promised_hours(day(2023, 2, 1), utc(), Some(&history));
    assert_eq!(first, second);
}

#[test]
fn input_history_is_left_untouched() {
    let history = [change(2023, 3, 1, 15.0), change(2023, 1, 1, 5.0)];
    let snapshot = history;

    promised_hours(day(2023, 2, 1), utc(), Some(&history));
    assert_eq!(history, snapshot);
}
