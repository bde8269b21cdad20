use chrono::{FixedOffset, TimeZone, Utc};
use hourtrack_core::db::open_db_in_memory;
use hourtrack_core::{
    visible_role_infos, CommitmentChange, InfoVisibility, ProfileRepository, ReportService,
    RoleInfo, Role, SqliteProfileRepository, UserProfile, WeeklyReportOptions,
    DEFAULT_REPORT_WEEKS,
};

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn options() -> WeeklyReportOptions {
    // 2023-04-05 is a Wednesday; the report windows end on Apr 8, Apr 1,
    // Mar 25 and Mar 18.
    WeeklyReportOptions {
        generated_at: Utc.with_ymd_and_hms(2023, 4, 5, 12, 0, 0).unwrap(),
        offset: utc(),
    }
}

fn change(year: i32, month: u32, day: u32, hours: f64) -> CommitmentChange {
    CommitmentChange::new(
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
        hours,
    )
}

#[test]
fn report_rows_cover_the_three_history_tiers() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::new(&conn);

    let mut legacy = UserProfile::new("Carol", "Zeta", Role::Volunteer);
    legacy.history_tracked = false;
    repo.create_profile(&legacy).unwrap();

    let fresh = UserProfile::new("Alice", "Young", Role::Administrator);
    repo.create_profile(&fresh).unwrap();

    let veteran = UserProfile::new("Bob", "Xu", Role::Manager);
    repo.create_profile(&veteran).unwrap();
    repo.append_commitment_change(veteran.uuid, &change(2023, 1, 1, 5.0))
        .unwrap();
    repo.append_commitment_change(veteran.uuid, &change(2023, 3, 22, 15.0))
        .unwrap();

    let service = ReportService::new(SqliteProfileRepository::new(&conn));
    let report = service.build_weekly_report(&options()).unwrap();

    assert_eq!(report.windows.len(), DEFAULT_REPORT_WEEKS);
    assert_eq!(report.rows.len(), 3);

    // Alphabetized by "first last".
    let names: Vec<String> = report
        .rows
        .iter()
        .map(|row| format!("{} {}", row.first_name, row.last_name))
        .collect();
    assert_eq!(names, vec!["Alice Young", "Bob Xu", "Carol Zeta"]);

    // Tracked but empty history: the default pledge for every week.
    assert_eq!(report.rows[0].promised_hours_by_week, vec![10.0; 4]);

    // The March 22 change covers the weeks ending Apr 8, Apr 1 and Mar 25;
    // the week ending Mar 18 still sees the January pledge.
    assert_eq!(
        report.rows[1].promised_hours_by_week,
        vec![15.0, 15.0, 15.0, 5.0]
    );

    // Untracked accounts resolve to the sentinel everywhere.
    assert_eq!(report.rows[2].promised_hours_by_week, vec![-1.0; 4]);
}

#[test]
fn report_on_an_empty_store_has_no_rows() {
    let conn = open_db_in_memory().unwrap();
    let service = ReportService::new(SqliteProfileRepository::new(&conn));

    let report = service.build_weekly_report(&options()).unwrap();
    assert_eq!(report.windows.len(), DEFAULT_REPORT_WEEKS);
    assert!(report.rows.is_empty());
}

fn info(name: &str, visibility: InfoVisibility) -> RoleInfo {
    RoleInfo {
        info_name: name.to_string(),
        info_content: format!("about {name}"),
        visibility,
    }
}

#[test]
fn role_infos_are_filtered_to_report_roles_and_annotated_for_the_viewer() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::new(&conn);
    repo.create_profile(&UserProfile::new("Alice", "Young", Role::Administrator))
        .unwrap();
    repo.create_profile(&UserProfile::new("Bob", "Xu", Role::Manager))
        .unwrap();
    repo.create_profile(&UserProfile::new("Carol", "Zeta", Role::Volunteer))
        .unwrap();

    let service = ReportService::new(SqliteProfileRepository::new(&conn));
    let report = service.build_weekly_report(&options()).unwrap();

    let infos = vec![
        info("AdministratorInfo", InfoVisibility::AdminsOnly),
        info("ManagerInfo", InfoVisibility::NonVolunteers),
        info("VolunteerInfo", InfoVisibility::Everyone),
        // No mentor appears in the report; this entry must be dropped.
        info("MentorInfo", InfoVisibility::Everyone),
    ];

    let for_volunteer = visible_role_infos(infos.clone(), &report.rows, Role::Volunteer);
    let summary: Vec<(&str, bool)> = for_volunteer
        .iter()
        .map(|visible| (visible.info.info_name.as_str(), visible.can_read))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("AdministratorInfo", false),
            ("ManagerInfo", false),
            ("VolunteerInfo", true),
        ]
    );

    let for_owner = visible_role_infos(infos, &report.rows, Role::Owner);
    assert!(for_owner.iter().all(|visible| visible.can_read));
}

#[test]
fn core_team_role_info_name_omits_the_space() {
    assert_eq!(
        hourtrack_core::role_info_name(Role::CoreTeam),
        "CoreTeamInfo"
    );
}
