#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use semainier::{
    io,
    model::{EmployeeId, ShiftId},
    planner::{Planner, DEFAULT_COVERAGE_TARGET},
    storage::{JsonStorage, Storage},
    week,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste d'allocation hebdomadaire (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de planning
    #[arg(long, global = true, default_value = "planning.json")]
    roster: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer des employés depuis un CSV
    ImportEmployees {
        #[arg(long)]
        csv: String,
    },

    /// Retirer un employé du roster (ses shifts déjà alloués restent)
    RemoveEmployee {
        #[arg(long)]
        employee_id: String,
    },

    /// Lister les départements (sème les trois défauts si vide)
    Departments,

    /// Allouer la semaine : REMPLACE tous les shifts de la semaine cible
    Allocate {
        /// Lundi de la semaine, `YYYY-MM-DD` ou RFC3339 UTC
        #[arg(long)]
        week_start: String,
    },

    /// Lister les shifts et optionnellement exporter
    List {
        #[arg(long)]
        week_start: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Couverture du jour face à l'objectif d'effectif
    Coverage {
        /// Date calendaire, `YYYY-MM-DD` ou RFC3339 UTC
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long, default_value_t = DEFAULT_COVERAGE_TARGET)]
        target: i64,
    },

    /// Tableau de bord hebdomadaire (heures par rôle/personne)
    Dashboard {
        #[arg(long)]
        week_start: Option<String>,
    },

    /// Changer le statut d'un shift
    SetStatus {
        #[arg(long)]
        shift_id: String,
        #[arg(long)]
        status: String,
    },

    /// Supprimer un shift individuel
    DeleteShift {
        #[arg(long)]
        shift_id: String,
    },

    /// Supprimer en bloc tous les shifts d'une semaine
    DeleteWeek {
        #[arg(long)]
        week_start: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster)?;
    let mut planner = Planner::new();
    *planner.roster_mut() = storage.load_or_default()?;

    let code = match cli.cmd {
        Commands::ImportEmployees { csv } => {
            let employees = io::import_employees_csv(csv)?;
            println!("Imported {} employee(s)", employees.len());
            planner.add_employees(employees);
            storage.save(planner.roster())?;
            0
        }
        Commands::RemoveEmployee { employee_id } => {
            let id = EmployeeId::new(employee_id);
            let removed = planner.remove_employee(&id)?;
            storage.save(planner.roster())?;
            println!("Removed employee {} ({})", removed.id.as_str(), removed.name);
            0
        }
        Commands::Departments => {
            for d in planner.departments() {
                println!(
                    "{} | target {} | roles: {}",
                    d.name,
                    d.required_staff,
                    d.roles.join(", ")
                );
            }
            storage.save(planner.roster())?;
            0
        }
        Commands::Allocate { week_start } => {
            let start = week::parse_week_start(&week_start)?;
            let created = planner.allocate_week(start)?;
            storage.save(planner.roster())?;
            println!(
                "Allocated {} shift(s) for week starting {}",
                created.len(),
                start.format("%Y-%m-%d")
            );
            0
        }
        Commands::List {
            week_start,
            department,
            out_json,
            out_csv,
        } => {
            let start = match week_start {
                Some(raw) => Some(week::parse_week_start(&raw)?),
                None => None,
            };
            let filtered = planner.list_shifts(start, department.as_deref());
            if let Some(path) = out_json {
                io::export_roster_json(path, planner.roster())?;
            }
            if let Some(path) = out_csv {
                // l'export respecte les mêmes filtres que l'impression
                io::export_shifts_csv(path, &filtered)?;
            }
            // impression compacte
            for s in &filtered {
                println!(
                    "{} | {} | {} {} → {} | {} / {} | {}",
                    s.id.as_str(),
                    s.employee_name,
                    s.day.name(),
                    s.start_time,
                    s.end_time,
                    s.department,
                    s.role,
                    s.status
                );
            }
            0
        }
        Commands::Coverage {
            date,
            department,
            target,
        } => {
            if target <= 0 {
                bail!("coverage target must be positive, got {target}");
            }
            let day = match date {
                Some(raw) => Some(week::parse_date(&raw)?),
                None => None,
            };
            let report = planner.coverage_with_target(day, department.as_deref(), target);
            println!(
                "allocated {} / target {} | difference {} | {}%",
                report.allocated, report.target, report.difference, report.percentage
            );
            // Code 2 = effectif sous l'objectif
            if report.difference < 0 {
                2
            } else {
                0
            }
        }
        Commands::Dashboard { week_start } => {
            let start = match week_start {
                Some(raw) => Some(week::parse_week_start(&raw)?),
                None => None,
            };
            for row in planner.weekly_dashboard(start)? {
                let roles: Vec<String> = row
                    .roles
                    .iter()
                    .map(|(role, hours)| format!("{role} {hours:.1}h"))
                    .collect();
                println!(
                    "{} | {} | {} | total {:.1}h",
                    row.employee_name,
                    row.department,
                    roles.join(", "),
                    row.total_hours
                );
            }
            0
        }
        Commands::SetStatus { shift_id, status } => {
            let sid = ShiftId::new(shift_id);
            planner.set_shift_status(&sid, &status)?;
            storage.save(planner.roster())?;
            0
        }
        Commands::DeleteShift { shift_id } => {
            let sid = ShiftId::new(shift_id);
            let removed = planner.delete_shift(&sid)?;
            storage.save(planner.roster())?;
            println!("Deleted shift {} ({})", removed.id.as_str(), removed.employee_name);
            0
        }
        Commands::DeleteWeek { week_start } => {
            let start = week::parse_week_start(&week_start)?;
            let deleted = planner.delete_week(start);
            storage.save(planner.roster())?;
            println!(
                "Deleted {} shift(s) for the week starting {}",
                deleted,
                start.format("%Y-%m-%d")
            );
            0
        }
    };

    std::process::exit(code);
}
