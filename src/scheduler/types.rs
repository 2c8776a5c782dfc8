use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Même personne deux fois le même jour.
    DoubleBooked,
    /// Service et lieu de même catégorie (affectation régulière).
    CategoryClash,
    /// Campus non autorisé pour la personne (affectation régulière).
    CampusMismatch,
    Understaffed { required: u32, filled: u32 },
    Overstaffed { required: u32, filled: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub date: NaiveDate,
    pub campus: String,
    pub location: String,
    /// Vide pour les problèmes d'effectif.
    pub staff_name: Option<String>,
    pub kind: IssueKind,
}

impl IssueKind {
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::DoubleBooked => "double",
            IssueKind::CategoryClash => "category",
            IssueKind::CampusMismatch => "campus",
            IssueKind::Understaffed { .. } => "understaffed",
            IssueKind::Overstaffed { .. } => "overstaffed",
        }
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid schedule position {position} (schedule has {len} records)")]
    InvalidPosition { position: usize, len: usize },
    #[error("invalid fixed date: {0:?}")]
    InvalidDate(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
