#![forbid(unsafe_code)]
use chrono::{TimeZone, Utc};
use semainier::{
    model::{Shift, ShiftId, Weekday},
    planner::{EngineError, Planner, DEFAULT_COVERAGE_TARGET},
    Employee, EmployeeId,
};

fn shift(name: &str, department: &str, role: &str, day: Weekday, range: (&str, &str)) -> Shift {
    Shift {
        id: ShiftId::random(),
        employee_id: EmployeeId::new("emp-1"),
        employee_name: name.to_owned(),
        department: department.to_owned(),
        role: role.to_owned(),
        day,
        start_time: range.0.to_owned(),
        end_time: range.1.to_owned(),
        week_start: Utc.with_ymd_and_hms(2025, 9, 8, 0, 0, 0).unwrap(),
        status: "allocated".to_owned(),
    }
}

fn planner_with(shifts: Vec<Shift>) -> Planner {
    let mut p = Planner::new();
    p.roster_mut().shifts = shifts;
    p
}

#[test]
fn coverage_meets_target_exactly() {
    let shifts: Vec<Shift> = (0..37)
        .map(|i| {
            shift(
                &format!("Employee {i}"),
                "Inbound",
                "Packing",
                Weekday::Monday,
                ("8.00 am", "4.00 pm"),
            )
        })
        .collect();
    let p = planner_with(shifts);

    let report = p.coverage(None, None);
    assert_eq!(report.allocated, 37);
    assert_eq!(report.target, DEFAULT_COVERAGE_TARGET);
    assert_eq!(report.difference, 0);
    assert_eq!(report.percentage, 100);
}

#[test]
fn coverage_percentage_is_rounded() {
    let shifts: Vec<Shift> = (0..19)
        .map(|i| {
            shift(
                &format!("Employee {i}"),
                "Inbound",
                "Packing",
                Weekday::Monday,
                ("8.00 am", "4.00 pm"),
            )
        })
        .collect();
    let p = planner_with(shifts);

    // 19/37 = 51.35…% → arrondi à 51
    let report = p.coverage(None, None);
    assert_eq!(report.percentage, 51);
    assert_eq!(report.difference, -18);
}

#[test]
fn coverage_filters_by_day_from_calendar_date() {
    let p = planner_with(vec![
        shift("Alice Martin", "Inbound", "Packing", Weekday::Monday, ("8.00 am", "4.00 pm")),
        shift("Marc Dupont", "Inbound", "Packing", Weekday::Tuesday, ("8.00 am", "4.00 pm")),
    ]);

    // 2025-09-08 est un lundi
    let monday = Utc.with_ymd_and_hms(2025, 9, 8, 0, 0, 0).unwrap();
    let report = p.coverage_with_target(Some(monday), None, 1);
    assert_eq!(report.allocated, 1);
    assert_eq!(report.difference, 0);
}

#[test]
fn coverage_on_weekend_date_counts_nothing() {
    let p = planner_with(vec![shift(
        "Alice Martin",
        "Inbound",
        "Packing",
        Weekday::Monday,
        ("8.00 am", "4.00 pm"),
    )]);

    // 2025-09-13 est un samedi : aucun jour ouvré ne matche
    let saturday = Utc.with_ymd_and_hms(2025, 9, 13, 0, 0, 0).unwrap();
    let report = p.coverage_with_target(Some(saturday), None, 5);
    assert_eq!(report.allocated, 0);
    assert_eq!(report.difference, -5);
}

#[test]
fn coverage_filters_by_department() {
    let p = planner_with(vec![
        shift("Alice Martin", "Inbound", "Packing", Weekday::Monday, ("8.00 am", "4.00 pm")),
        shift("Marc Dupont", "Outbound", "Shipping", Weekday::Monday, ("8.00 am", "4.00 pm")),
    ]);

    let report = p.coverage_with_target(None, Some("Outbound"), 2);
    assert_eq!(report.allocated, 1);
    assert_eq!(report.percentage, 50);
}

#[test]
fn dashboard_accumulates_roles_and_total() {
    let p = planner_with(vec![
        shift("Alice Martin", "Inbound", "Packing", Weekday::Monday, ("8.00 am", "4.00 pm")),
        shift("Alice Martin", "Inbound", "Receiving", Weekday::Tuesday, ("9.00 am", "3.30 pm")),
    ]);

    let rows = p.weekly_dashboard(None).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.employee_name, "Alice Martin");
    assert_eq!(row.total_hours, 14.5);
    assert_eq!(row.roles["Packing"], 8.0);
    assert_eq!(row.roles["Receiving"], 6.5);
}

#[test]
fn dashboard_groups_by_name_and_department_pair() {
    // même personne sous deux libellés de département : deux lignes
    let p = planner_with(vec![
        shift("Alice Martin", "Inbound", "Packing", Weekday::Monday, ("8.00 am", "4.00 pm")),
        shift("Alice Martin", "Outbound", "Packing", Weekday::Tuesday, ("8.00 am", "4.00 pm")),
    ]);

    let rows = p.weekly_dashboard(None).unwrap();
    assert_eq!(rows.len(), 2);
    // ordre de première apparition, pas de tri
    assert_eq!(rows[0].department, "Inbound");
    assert_eq!(rows[1].department, "Outbound");
}

#[test]
fn dashboard_filters_by_week_calendar_day() {
    let mut other_week = shift(
        "Marc Dupont",
        "Inbound",
        "Packing",
        Weekday::Monday,
        ("8.00 am", "4.00 pm"),
    );
    other_week.week_start = Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap();

    let mut noisy = shift(
        "Alice Martin",
        "Inbound",
        "Packing",
        Weekday::Monday,
        ("8.00 am", "4.00 pm"),
    );
    // bruit d'heure stocké : doit quand même matcher le jour calendaire
    noisy.week_start = Utc.with_ymd_and_hms(2025, 9, 8, 11, 22, 33).unwrap();

    let p = planner_with(vec![other_week, noisy]);
    let week = Utc.with_ymd_and_hms(2025, 9, 8, 0, 0, 0).unwrap();
    let rows = p.weekly_dashboard(Some(week)).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_name, "Alice Martin");
}

#[test]
fn dashboard_propagates_format_errors() {
    let p = planner_with(vec![shift(
        "Alice Martin",
        "Inbound",
        "Packing",
        Weekday::Monday,
        ("8h00", "16h00"),
    )]);

    let err = p.weekly_dashboard(None).unwrap_err();
    assert!(matches!(err, EngineError::Format(_)));
}

#[test]
fn departments_are_seeded_once() {
    let mut p = Planner::new();
    let names: Vec<String> = p.departments().iter().map(|d| d.name.clone()).collect();
    assert_eq!(names, ["Inbound", "Inventory", "Outbound"]);
    assert_eq!(p.departments().len(), 3);

    let targets: Vec<u32> = p.departments().iter().map(|d| d.required_staff).collect();
    assert_eq!(targets, [12, 10, 15]);
}

#[test]
fn allocate_then_report_end_to_end() {
    let mut e = Employee::new("Alice Martin", "Inbound");
    e.competencies = vec!["Packing".to_owned()];
    e.availability.set(
        Weekday::Monday,
        semainier::Availability::Range("8.00 am - 4.00 pm".to_owned()),
    );

    let mut p = Planner::new();
    p.add_employees(vec![e]);
    let week = Utc.with_ymd_and_hms(2025, 9, 8, 0, 0, 0).unwrap();
    p.allocate_week(week).unwrap();

    let rows = p.weekly_dashboard(Some(week)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_hours, 8.0);
    assert_eq!(rows[0].roles["Packing"], 8.0);
}
