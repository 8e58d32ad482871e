use super::types::EngineError;
use crate::clock;
use crate::model::{Availability, Employee, Shift, ShiftId, Weekday, STATUS_ALLOCATED};
use crate::week;
use chrono::{DateTime, Utc};

/// Construit la semaine complète sans toucher au roster : un shift par
/// (employé actif, jour disponible), lundi → vendredi dans cet ordre.
///
/// Toute plage malformée fait échouer l'appel entier ; une allocation
/// partielle laisserait la semaine dans un état incohérent. Le rôle
/// principal n'est résolu qu'au moment d'émettre un shift : un employé
/// sans compétence mais sans aucun jour disponible ne bloque rien.
pub(super) fn build_week(
    employees: &[Employee],
    week_start: DateTime<Utc>,
) -> Result<Vec<Shift>, EngineError> {
    let week_start = week::day_start(week_start);
    let mut shifts = Vec::new();

    for employee in employees.iter().filter(|e| e.is_active()) {
        for day in Weekday::ALL {
            let range = match employee.availability_on(day) {
                Availability::Off => continue,
                Availability::Range(r) => r,
            };
            let role = employee
                .primary_role()
                .ok_or_else(|| EngineError::NoCompetency(employee.name.clone()))?;
            let (start, end) = clock::split_range(range)?;

            shifts.push(Shift {
                id: ShiftId::random(),
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                department: employee.department.clone(),
                role: role.to_owned(),
                day,
                start_time: start.to_owned(),
                end_time: end.to_owned(),
                week_start,
                status: STATUS_ALLOCATED.to_owned(),
            });
        }
    }

    Ok(shifts)
}
