#![forbid(unsafe_code)]
//! Semainier — bibliothèque d'allocation de shifts hebdomadaires locale (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Allocation par disponibilités fixes lundi → vendredi.
//! - Rapports : couverture journalière, heures par rôle et par personne.
//! - Tout en UTC ; semaines clés par leur lundi, comparées au jour
//!   calendaire près. L'appelant fournit le lundi lui-même.

pub mod clock;
pub mod io;
pub mod model;
pub mod planner;
pub mod storage;
pub mod week;

pub use model::{
    Availability, Department, Employee, EmployeeId, EmployeeStatus, Roster, Shift, ShiftId,
    WeekAvailability, Weekday, STATUS_ALLOCATED,
};
pub use planner::{
    CoverageReport, DashboardRow, EngineError, Planner, DEFAULT_COVERAGE_TARGET,
};
pub use storage::{JsonStorage, Storage};
