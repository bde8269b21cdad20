//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `hourtrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::{TimeZone, Utc};
use hourtrack_core::{default_log_level, init_logging, promised_hours, CommitmentChange, WeekWindow};

fn main() {
    let log_dir = std::env::temp_dir().join("hourtrack-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    println!("hourtrack_core version={}", hourtrack_core::core_version());

    // One canned resolution to exercise the report path end to end.
    let now = Utc.with_ymd_and_hms(2023, 4, 5, 12, 0, 0).unwrap();
    let history = [
        CommitmentChange::new(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(), 5.0),
        CommitmentChange::new(Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap(), 15.0),
    ];

    for window in WeekWindow::report_windows(now, hourtrack_core::default_report_offset()) {
        let hours = promised_hours(window.to_date, window.offset, Some(&history));
        println!(
            "week {} to {} promised={hours}",
            window.from_label(),
            window.to_label()
        );
    }
}
