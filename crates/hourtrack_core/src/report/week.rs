//! Reporting week windows.
//!
//! # Responsibility
//! - Compute Sunday-through-Saturday week windows in a fixed reference
//!   offset.
//! - Provide the end-of-week cutoff instant used by promised-hours
//!   resolution.
//!
//! # Invariants
//! - Window boundaries are evaluated in the reference offset, not in UTC
//!   and not in the machine's local zone.
//! - `to_date` is always six days after `from_date`.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc, Weekday};

/// Number of windows in the weekly summaries report: the current week plus
/// three prior weeks.
pub const DEFAULT_REPORT_WEEKS: usize = 4;

const SECONDS_PER_HOUR: i32 = 3600;

/// Reference offset for report week boundaries.
///
/// The reporting calendar is pinned to US Pacific standard time.
pub fn default_report_offset() -> FixedOffset {
    FixedOffset::west_opt(8 * SECONDS_PER_HOUR).expect("UTC-8 is a valid offset")
}

/// One Sunday-through-Saturday reporting interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    /// First day of the week (a Sunday) in the reference offset.
    pub from_date: NaiveDate,
    /// Last day of the week (a Saturday) in the reference offset.
    pub to_date: NaiveDate,
    /// Offset the window boundaries were evaluated in.
    pub offset: FixedOffset,
}

impl WeekWindow {
    /// The week containing `now` (evaluated in `offset`), shifted back
    /// `weeks_back` whole weeks.
    pub fn for_weeks_back(now: DateTime<Utc>, offset: FixedOffset, weeks_back: u32) -> Self {
        let local_today = now.with_timezone(&offset).date_naive();
        let week = local_today.week(Weekday::Sun);
        let shift = Duration::weeks(i64::from(weeks_back));
        Self {
            from_date: week.first_day() - shift,
            to_date: week.last_day() - shift,
            offset,
        }
    }

    /// The report's windows, index 0 being the current week and each later
    /// index one week earlier.
    pub fn report_windows(now: DateTime<Utc>, offset: FixedOffset) -> Vec<Self> {
        (0..DEFAULT_REPORT_WEEKS)
            .map(|index| Self::for_weeks_back(now, offset, index as u32))
            .collect()
    }

    /// The instant this week ends: `to_date` at 23:59:59.999 in the
    /// reference offset.
    pub fn end_instant(&self) -> DateTime<Utc> {
        end_of_day_instant(self.to_date, self.offset)
    }

    /// First day formatted for display, e.g. `Jul-27-25`.
    pub fn from_label(&self) -> String {
        format_report_date(self.from_date)
    }

    /// Last day formatted for display, e.g. `Aug-02-25`.
    pub fn to_label(&self) -> String {
        format_report_date(self.to_date)
    }
}

/// Normalizes a calendar date to its end-of-day instant (23:59:59.999) in
/// the given offset.
pub fn end_of_day_instant(date: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    let end_of_day = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid wall-clock time");
    offset
        .from_local_datetime(&end_of_day)
        .single()
        .expect("fixed offsets map local times unambiguously")
        .with_timezone(&Utc)
}

fn format_report_date(date: NaiveDate) -> String {
    date.format("%b-%d-%y").to_string()
}
