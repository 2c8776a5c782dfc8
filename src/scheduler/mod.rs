mod assignment;
pub mod balance;
pub mod capacity;
pub mod eligibility;
pub mod fixed;
mod issues;
mod mutate;
mod types;

pub use types::{Issue, IssueKind, SchedError};

use crate::config::RosterConfig;
use crate::model::{DateRange, Schedule, Session, StaffMember, Workload};
use chrono::NaiveDate;
use rand::Rng;

/// Scheduler : détient la configuration et le planning publié.
/// Créé vide, remplacé en bloc à chaque génération, modifié en place par `swap`.
#[derive(Debug, Default)]
pub struct Scheduler {
    config: RosterConfig,
    session: Session,
}

impl Scheduler {
    pub fn new(config: RosterConfig) -> Result<Self, SchedError> {
        config
            .validate()
            .map_err(|e| SchedError::InvalidConfig(e.to_string()))?;
        Ok(Self {
            config,
            session: Session::default(),
        })
    }

    /// Reprend un état déjà publié (chargé depuis le stockage).
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn schedule(&self) -> &Schedule {
        &self.session.schedule
    }

    pub fn workload(&self) -> &Workload {
        &self.session.workload
    }

    /// Génère un planning avec l'aléa global du thread.
    pub fn generate(&mut self, staff: Vec<StaffMember>, start: NaiveDate, end: NaiveDate) {
        self.generate_with_rng(staff, start, end, &mut rand::thread_rng());
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &mut self,
        staff: Vec<StaffMember>,
        start: NaiveDate,
        end: NaiveDate,
        rng: &mut R,
    ) {
        let (schedule, workload) = assignment::generate(&self.config, &staff, start, end, rng);
        self.session = Session {
            range: Some(DateRange { start, end }),
            staff,
            schedule,
            workload,
        };
    }

    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), SchedError> {
        mutate::swap(self, first, second)
    }

    /// Contrôle du planning courant (doublons, catégories, effectifs).
    pub fn check(&self) -> Vec<Issue> {
        issues::detect_issues(&self.config, &self.session)
    }
}
