#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use campus_roster::{
    board::{find_by_name, Board, BoardRenderer, TextBoard},
    config::{export_config_json, load_config_from_file, RosterConfig},
    io,
    scheduler::Scheduler,
    storage::{JsonStorage, Storage},
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Génération et publication de plannings de service multi-campus
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de la session publiée
    #[arg(long, global = true, default_value = "roster-state.json")]
    state: String,

    /// Configuration JSON (quotas, jours fériés) ; configuration de référence sinon
    #[arg(long, global = true)]
    config: Option<String>,

    /// Secret d'administration (generate, swap)
    #[arg(long, global = true, env = "ROSTER_ADMIN_SECRET", hide_env_values = true)]
    secret: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Écrire la configuration de référence
    InitConfig {
        #[arg(long)]
        out: String,
    },

    /// Générer et publier un planning
    Generate {
        /// Effectif (.csv ou .xlsx)
        #[arg(long)]
        staff: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// YYYY-MM-DD (inclus)
        #[arg(long)]
        end: String,
    },

    /// Afficher le tableau croisé
    Show,

    /// Chercher les affectations d'une personne
    Find {
        #[arg(long)]
        name: String,
    },

    /// Échanger les personnes de deux affectations (positions de `find`/`export`)
    Swap {
        #[arg(long)]
        first: usize,
        #[arg(long)]
        second: usize,
    },

    /// Afficher les compteurs de charge
    Workload,

    /// Exporter le planning
    Export {
        /// Classeur XLSX (feuilles `Schedule` et `근무통계`)
        #[arg(long)]
        xlsx: Option<String>,
        #[arg(long)]
        schedule_csv: Option<String>,
        #[arg(long)]
        workload_csv: Option<String>,
        #[arg(long)]
        json: Option<String>,
    },

    /// Contrôler le planning publié
    Check {
        /// Export CSV des problèmes (optionnel)
        #[arg(long)]
        report: Option<String>,
    },
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {raw}"))
}

fn require_secret(config: &RosterConfig, given: Option<&str>) -> Result<()> {
    if !config.secret_matches(given) {
        bail!("admin secret required for this command");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let config = match &cli.config {
        Some(path) => load_config_from_file(path)?,
        None => RosterConfig::default(),
    };

    let storage = JsonStorage::open(&cli.state)?;
    let session = if storage.exists() {
        storage.load()?
    } else {
        Default::default()
    };
    let mut scheduler = Scheduler::new(config)?.with_session(session);
    let secret = cli.secret.as_deref();

    let code = match cli.cmd {
        Commands::InitConfig { out } => {
            export_config_json(&out, scheduler.config())?;
            println!("config written to {out}");
            0
        }
        Commands::Generate { staff, start, end } => {
            require_secret(scheduler.config(), secret)?;
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            if end < start {
                bail!("end date must not be before start date");
            }
            let people = io::import_staff(&staff)?;
            if people.is_empty() {
                bail!("roster {staff} contains no staff");
            }
            scheduler.generate(people, start, end);
            storage.save(scheduler.session())?;
            println!(
                "generated {} assignment(s) for {} staff",
                scheduler.schedule().len(),
                scheduler.workload().len()
            );
            0
        }
        Commands::Show => {
            if !scheduler.session().is_published() {
                println!("no schedule published yet");
            } else {
                let board = Board::build(scheduler.config(), scheduler.schedule());
                print!("{}", TextBoard.render(&board));
            }
            0
        }
        Commands::Find { name } => {
            let hits = find_by_name(scheduler.schedule(), &name);
            if hits.is_empty() {
                println!("no assignment found for {name}");
            }
            for (pos, r) in hits {
                println!(
                    "#{pos} | {} | {} | {} | {} | {}",
                    r.date, r.campus, r.location, r.staff_name, r.kind
                );
            }
            0
        }
        Commands::Swap { first, second } => {
            require_secret(scheduler.config(), secret)?;
            scheduler.swap(first, second)?;
            storage.save(scheduler.session())?;
            println!("swapped #{first} and #{second}");
            0
        }
        Commands::Workload => {
            for (name, count) in scheduler.workload().iter() {
                println!("{name} | {count}");
            }
            0
        }
        Commands::Export {
            xlsx,
            schedule_csv,
            workload_csv,
            json,
        } => {
            if let Some(path) = xlsx {
                io::export_workbook_xlsx(path, scheduler.schedule(), scheduler.workload())?;
            }
            if let Some(path) = schedule_csv {
                io::export_schedule_csv(path, scheduler.schedule())?;
            }
            if let Some(path) = workload_csv {
                io::export_workload_csv(path, scheduler.workload())?;
            }
            if let Some(path) = json {
                io::export_session_json(path, scheduler.session())?;
            }
            0
        }
        Commands::Check { report } => {
            let issues = scheduler.check();
            if issues.is_empty() {
                println!("OK: no issues");
                0
            } else {
                eprintln!("Found {} issue(s)", issues.len());
                if let Some(path) = report {
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["date", "campus", "location", "staff", "kind"])?;
                    for i in &issues {
                        let date = i.date.to_string();
                        w.write_record([
                            date.as_str(),
                            i.campus.as_str(),
                            i.location.as_str(),
                            i.staff_name.as_deref().unwrap_or(""),
                            i.kind.code(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}
