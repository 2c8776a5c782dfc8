#![forbid(unsafe_code)]
//! Campus roster : génération de plannings de service quotidiens multi-campus.
//!
//! - Affectations fixes, quotas par lieu, exclusion par catégorie de service.
//! - Équilibrage de charge : mélange aléatoire puis tri stable par compteur.
//! - Échanges manuels, contrôle du planning, vue croisée.
//! - Import CSV/XLSX, export CSV/JSON.

pub mod board;
pub mod calendar;
pub mod category;
pub mod config;
pub mod io;
pub mod model;
pub mod scheduler;
pub mod storage;

pub use board::{find_by_name, Board, BoardRenderer, BoardRow, TextBoard};
pub use calendar::working_days;
pub use category::{Categories, Category};
pub use config::{load_config_from_file, CampusQuota, LocationQuota, RosterConfig};
pub use model::{
    AssignmentKind, AssignmentRecord, DateRange, Schedule, Session, StaffMember, Workload,
};
pub use scheduler::{Issue, IssueKind, SchedError, Scheduler};
pub use storage::{JsonStorage, Storage};
