use super::types::CoverageReport;
use crate::model::{Shift, Weekday};

/// Compte les shifts du jour/département demandés face à l'objectif.
/// Aucun filtre = tout le stock de shifts, toutes semaines confondues.
pub(super) fn coverage(
    shifts: &[Shift],
    target: i64,
    day: Option<Weekday>,
    department: Option<&str>,
) -> CoverageReport {
    let allocated = shifts
        .iter()
        .filter(|s| day.map_or(true, |d| s.day == d))
        .filter(|s| department.map_or(true, |dep| s.department == dep))
        .count() as i64;

    CoverageReport {
        allocated,
        target,
        difference: allocated - target,
        percentage: ((allocated as f64 / target as f64) * 100.0).round() as i64,
    }
}
