use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Objectif d'effectif appliqué par défaut au rapport de couverture.
/// Valeur de site codée en dur, indépendante du filtre département
/// (limitation connue : ne lit pas `Department::required_staff`).
pub const DEFAULT_COVERAGE_TARGET: i64 = 37;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("malformed time string: {0}")]
    Format(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("unknown shift: {0}")]
    UnknownShift(String),
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("employee {0} has no competencies, cannot derive a role")]
    NoCompetency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Effectif alloué vs objectif pour un jour/département.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub allocated: i64,
    pub target: i64,
    pub difference: i64,
    pub percentage: i64,
}

/// Ligne du tableau de bord hebdomadaire : heures par rôle et total
/// pour une paire (nom d'employé, département).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRow {
    pub employee_name: String,
    pub department: String,
    pub roles: BTreeMap<String, f64>,
    pub total_hours: f64,
}
