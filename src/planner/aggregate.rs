use super::types::{DashboardRow, EngineError};
use crate::clock;
use crate::model::Shift;
use crate::week;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Agrège les shifts d'une semaine en heures par rôle et total par
/// paire (nom, département). Les lignes sortent dans l'ordre de première
/// apparition ; accumulation flottante, aucun arrondi ici.
pub(super) fn weekly_dashboard(
    shifts: &[Shift],
    week_start: Option<DateTime<Utc>>,
) -> Result<Vec<DashboardRow>, EngineError> {
    let mut rows: Vec<DashboardRow> = Vec::new();

    for shift in shifts {
        if let Some(start) = week_start {
            if !week::same_week(shift.week_start, start) {
                continue;
            }
        }

        let hours = clock::parse_clock(&shift.end_time)? - clock::parse_clock(&shift.start_time)?;

        let idx = rows
            .iter()
            .position(|r| r.employee_name == shift.employee_name && r.department == shift.department)
            .unwrap_or_else(|| {
                rows.push(DashboardRow {
                    employee_name: shift.employee_name.clone(),
                    department: shift.department.clone(),
                    roles: BTreeMap::new(),
                    total_hours: 0.0,
                });
                rows.len() - 1
            });
        let row = &mut rows[idx];

        *row.roles.entry(shift.role.clone()).or_insert(0.0) += hours;
        row.total_hours += hours;
    }

    Ok(rows)
}
