use crate::model::{
    Availability, Employee, EmployeeStatus, Roster, Shift, WeekAvailability, Weekday,
};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV, header :
/// `name,status,working_site,type,department,supervisor,monday,tuesday,wednesday,thursday,friday,competencies`
/// (compétences séparées par `;`, la première est le rôle principal ;
/// case de jour vide ou `Off` = indisponible).
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let status = rec.get(1).context("missing status")?.trim();
        let department = rec.get(4).context("missing department")?.trim();
        if name.is_empty() || department.is_empty() {
            bail!("invalid employee row (empty name or department)");
        }

        let mut employee = Employee::new(name, department);
        employee.status = parse_status(status)
            .with_context(|| format!("invalid status value for employee {name}"))?;
        if let Some(site) = rec.get(2) {
            employee.working_site = site.trim().to_owned();
        }
        if let Some(kind) = rec.get(3) {
            employee.contract_type = kind.trim().to_owned();
        }
        if let Some(sup) = rec.get(5) {
            employee.supervisor = sup.trim().to_owned();
        }

        let mut availability = WeekAvailability::default();
        for (offset, day) in Weekday::ALL.into_iter().enumerate() {
            if let Some(cell) = rec.get(6 + offset) {
                availability.set(day, Availability::from(cell.to_owned()));
            }
        }
        employee.availability = availability;

        if let Some(raw) = rec.get(11) {
            employee.competencies = raw
                .split(';')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_owned)
                .collect();
        }

        out.push(employee);
    }
    Ok(out)
}

fn parse_status(s: &str) -> anyhow::Result<EmployeeStatus> {
    match s.to_ascii_lowercase().as_str() {
        "active" | "" => Ok(EmployeeStatus::Active),
        "inactive" => Ok(EmployeeStatus::Inactive),
        _ => bail!("expected Active or Inactive"),
    }
}

/// Export JSON du roster (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV de shifts (déjà filtrés par l'appelant), header :
/// `id,employee,department,role,day,start,end,week_start,status`
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, shifts: &[&Shift]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "id",
        "employee",
        "department",
        "role",
        "day",
        "start",
        "end",
        "week_start",
        "status",
    ])?;
    for s in shifts {
        let week = s.week_start.format("%Y-%m-%d").to_string();
        w.write_record([
            s.id.as_str(),
            s.employee_name.as_str(),
            s.department.as_str(),
            s.role.as_str(),
            s.day.name(),
            s.start_time.as_str(),
            s.end_time.as_str(),
            week.as_str(),
            s.status.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
