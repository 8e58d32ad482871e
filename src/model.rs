use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Employee
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Jour ouvré de la semaine (lundi → vendredi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Ordre fixe d'allocation.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Nom anglais, indépendant de la locale.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Weekday::ALL.into_iter().find(|d| d.name() == s)
    }

    /// `None` pour samedi/dimanche : aucun shift ouvré ne peut matcher.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        use chrono::Datelike;
        match date.weekday() {
            chrono::Weekday::Mon => Some(Weekday::Monday),
            chrono::Weekday::Tue => Some(Weekday::Tuesday),
            chrono::Weekday::Wed => Some(Weekday::Wednesday),
            chrono::Weekday::Thu => Some(Weekday::Thursday),
            chrono::Weekday::Fri => Some(Weekday::Friday),
            chrono::Weekday::Sat | chrono::Weekday::Sun => None,
        }
    }
}

/// Disponibilité d'un jour : plage horaire ou sentinelle "Off".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    #[default]
    Off,
    Range(String),
}

impl Availability {
    pub fn is_off(&self) -> bool {
        matches!(self, Availability::Off)
    }
}

impl From<String> for Availability {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "Off" {
            Availability::Off
        } else {
            Availability::Range(trimmed.to_owned())
        }
    }
}

impl From<Availability> for String {
    fn from(a: Availability) -> Self {
        match a {
            Availability::Off => "Off".to_owned(),
            Availability::Range(r) => r,
        }
    }
}

/// Une case par jour ouvré ; `Off` par défaut.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekAvailability {
    #[serde(default)]
    pub monday: Availability,
    #[serde(default)]
    pub tuesday: Availability,
    #[serde(default)]
    pub wednesday: Availability,
    #[serde(default)]
    pub thursday: Availability,
    #[serde(default)]
    pub friday: Availability,
}

impl WeekAvailability {
    pub fn on(&self, day: Weekday) -> &Availability {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
        }
    }

    pub fn set(&mut self, day: Weekday, slot: Availability) {
        match day {
            Weekday::Monday => self.monday = slot,
            Weekday::Tuesday => self.tuesday = slot,
            Weekday::Wednesday => self.wednesday = slot,
            Weekday::Thursday => self.thursday = slot,
            Weekday::Friday => self.friday = slot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

/// Employé du roster (entrée en lecture seule pour le moteur).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub status: EmployeeStatus,
    pub department: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub working_site: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contract_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub supervisor: String,
    #[serde(default)]
    pub availability: WeekAvailability,
    #[serde(default)]
    pub competencies: Vec<String>,
}

impl Employee {
    pub fn new<N: Into<String>, D: Into<String>>(name: N, department: D) -> Self {
        Self {
            id: EmployeeId::random(),
            name: name.into(),
            status: EmployeeStatus::Active,
            department: department.into(),
            working_site: String::new(),
            contract_type: String::new(),
            supervisor: String::new(),
            availability: WeekAvailability::default(),
            competencies: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    pub fn availability_on(&self, day: Weekday) -> &Availability {
        self.availability.on(day)
    }

    /// Rôle principal = première compétence de la liste (l'ordre compte).
    pub fn primary_role(&self) -> Option<&str> {
        self.competencies.first().map(String::as_str)
    }
}

/// Département et son objectif d'effectif.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub roles: Vec<String>,
    pub required_staff: u32,
}

impl Department {
    /// Les trois départements semés quand la collection est vide.
    pub fn defaults() -> Vec<Department> {
        vec![
            Department {
                name: "Inbound".to_owned(),
                roles: vec![
                    "Receiving".to_owned(),
                    "Packing".to_owned(),
                    "Inventory Management".to_owned(),
                ],
                required_staff: 12,
            },
            Department {
                name: "Inventory".to_owned(),
                roles: vec![
                    "Stock Auditing".to_owned(),
                    "Forklift Operation".to_owned(),
                    "Labeling".to_owned(),
                ],
                required_staff: 10,
            },
            Department {
                name: "Outbound".to_owned(),
                roles: vec![
                    "Shipping".to_owned(),
                    "Packing".to_owned(),
                    "Inventory Management".to_owned(),
                ],
                required_staff: 15,
            },
        ]
    }
}

/// Identifiant fort pour Shift
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub const STATUS_ALLOCATED: &str = "allocated";

fn default_status() -> String {
    STATUS_ALLOCATED.to_owned()
}

/// Shift concret produit par l'allocation (nom/département dénormalisés).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub department: String,
    pub role: String,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    /// Lundi identifiant la semaine (comparé au jour calendaire près).
    pub week_start: DateTime<Utc>,
    #[serde(default = "default_status")]
    pub status: String,
}

/// Roster complet : les trois collections persistées.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Roster {
    pub fn find_employee_by_name<'a>(&'a self, name: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.name == name)
    }
    pub fn find_employee_by_id<'a>(&'a self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
    pub fn find_shift_mut(&mut self, id: &ShiftId) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| &s.id == id)
    }
}
