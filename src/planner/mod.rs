mod aggregate;
mod allocate;
mod coverage;
mod types;

pub use types::{CoverageReport, DashboardRow, EngineError, DEFAULT_COVERAGE_TARGET};

use crate::model::{Department, Employee, EmployeeId, Roster, Shift, ShiftId, Weekday};
use crate::week;
use chrono::{DateTime, Utc};

/// Planner : encapsule un Roster et porte les opérations du moteur
/// (allocation hebdomadaire, rapports, cycle de vie des shifts).
/// Purement calculatoire ; la persistance est injectée autour.
#[derive(Debug, Default)]
pub struct Planner {
    roster: Roster,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            roster: Roster::default(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn add_employees(&mut self, employees: Vec<Employee>) {
        self.roster.employees.extend(employees);
    }

    pub fn remove_employee(&mut self, id: &EmployeeId) -> Result<Employee, EngineError> {
        let pos = self
            .roster
            .employees
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| EngineError::UnknownEmployee(id.as_str().to_owned()))?;
        Ok(self.roster.employees.remove(pos))
    }

    /// Départements connus ; sème les trois défauts si la collection est
    /// vide.
    pub fn departments(&mut self) -> &[Department] {
        if self.roster.departments.is_empty() {
            self.roster.departments = Department::defaults();
        }
        &self.roster.departments
    }

    /// Alloue la semaine entière : REMPLACEMENT COMPLET de la semaine
    /// cible. Tous les shifts dont le début de semaine tombe le même
    /// jour calendaire sont purgés avant insertion, y compris ceux
    /// ajoutés à la main — l'opération n'est ni additive ni un merge.
    /// Rejouer l'appel à roster constant redonne le même ensemble.
    ///
    /// L'exclusivité par semaine (pas d'allocations concurrentes sur la
    /// même semaine) est à la charge de l'appelant.
    pub fn allocate_week(&mut self, week_start: DateTime<Utc>) -> Result<Vec<Shift>, EngineError> {
        let created = allocate::build_week(&self.roster.employees, week_start)?;

        let key = week::day_start(week_start);
        self.roster
            .shifts
            .retain(|s| !week::same_week(s.week_start, key));
        self.roster.shifts.extend(created.iter().cloned());

        Ok(created)
    }

    /// Shifts filtrés par semaine (fenêtre inclusive de 7 jours) et/ou
    /// département.
    pub fn list_shifts(
        &self,
        week_start: Option<DateTime<Utc>>,
        department: Option<&str>,
    ) -> Vec<&Shift> {
        self.roster
            .shifts
            .iter()
            .filter(|s| week_start.map_or(true, |w| week::in_window(s.week_start, w)))
            .filter(|s| department.map_or(true, |dep| s.department == dep))
            .collect()
    }

    /// Couverture du jour/département face à l'objectif de site fixe.
    /// Le jour est dérivé du nom anglais du jour de la date fournie ;
    /// un samedi ou dimanche ne matche aucun shift ouvré.
    pub fn coverage(
        &self,
        date: Option<DateTime<Utc>>,
        department: Option<&str>,
    ) -> CoverageReport {
        self.coverage_with_target(date, department, DEFAULT_COVERAGE_TARGET)
    }

    pub fn coverage_with_target(
        &self,
        date: Option<DateTime<Utc>>,
        department: Option<&str>,
        target: i64,
    ) -> CoverageReport {
        match date {
            None => coverage::coverage(&self.roster.shifts, target, None, department),
            Some(d) => match Weekday::from_date(d.date_naive()) {
                Some(day) => coverage::coverage(&self.roster.shifts, target, Some(day), department),
                // week-end : rien d'alloué ce jour-là
                None => coverage::coverage(&[], target, None, department),
            },
        }
    }

    /// Tableau de bord hebdomadaire : heures par rôle et par personne.
    pub fn weekly_dashboard(
        &self,
        week_start: Option<DateTime<Utc>>,
    ) -> Result<Vec<DashboardRow>, EngineError> {
        aggregate::weekly_dashboard(&self.roster.shifts, week_start)
    }

    pub fn set_shift_status(&mut self, id: &ShiftId, status: &str) -> Result<(), EngineError> {
        let shift = self
            .roster
            .find_shift_mut(id)
            .ok_or_else(|| EngineError::UnknownShift(id.as_str().to_owned()))?;
        shift.status = status.to_owned();
        Ok(())
    }

    pub fn delete_shift(&mut self, id: &ShiftId) -> Result<Shift, EngineError> {
        let pos = self
            .roster
            .shifts
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| EngineError::UnknownShift(id.as_str().to_owned()))?;
        Ok(self.roster.shifts.remove(pos))
    }

    /// Supprime en bloc tous les shifts de la semaine ; retourne le
    /// nombre effacé. La semaine voisine n'est pas touchée.
    pub fn delete_week(&mut self, week_start: DateTime<Utc>) -> usize {
        let key = week::day_start(week_start);
        let before = self.roster.shifts.len();
        self.roster
            .shifts
            .retain(|s| !week::same_week(s.week_start, key));
        before - self.roster.shifts.len()
    }
}
