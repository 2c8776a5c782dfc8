use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Valeurs de campus signifiant « n'importe quel campus ».
pub const ANY_CAMPUS: [&str; 2] = ["모두", "any"];

/// Lieu attribué à une date fixe sans lieu correspondant.
pub const UNSPECIFIED_LOCATION: &str = "미지정";

/// Membre du personnel (ligne du fichier d'effectifs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub campus: String,
    pub department: String,
    /// Jetons bruts, dans l'ordre du fichier (non encore validés).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixed_dates: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixed_locations: Vec<String>,
}

impl StaffMember {
    pub fn new<N: AsRef<str>, C: Into<String>, D: Into<String>>(
        name: N,
        campus: C,
        department: D,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_owned(),
            campus: campus.into().trim().to_owned(),
            department: department.into().trim().to_owned(),
            fixed_dates: Vec::new(),
            fixed_locations: Vec::new(),
        }
    }

    /// Ajoute des dates/lieux fixes à partir de listes séparées par des virgules.
    pub fn with_fixed(mut self, dates: &str, locations: &str) -> Self {
        self.fixed_dates = split_list(dates);
        self.fixed_locations = split_list(locations);
        self
    }

    pub fn works_anywhere(&self) -> bool {
        is_any_campus(&self.campus)
    }

    /// Le membre peut-il être affecté sur `campus` ?
    pub fn can_work_at(&self, campus: &str) -> bool {
        self.campus == campus || self.works_anywhere()
    }
}

pub fn is_any_campus(campus: &str) -> bool {
    let campus = campus.trim();
    ANY_CAMPUS.iter().any(|s| s.eq_ignore_ascii_case(campus))
}

/// Découpe une cellule « a, b, c » en jetons nettoyés. Une cellule vide donne une liste vide.
pub fn split_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|s| s.trim().to_owned()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentKind {
    Fixed,
    Regular,
}

impl AssignmentKind {
    /// Libellé utilisé dans les exports.
    pub fn label(self) -> &'static str {
        match self {
            AssignmentKind::Fixed => "고정",
            AssignmentKind::Regular => "일반",
        }
    }
}

impl fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Une affectation (date, campus, lieu, personne).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub date: NaiveDate,
    pub campus: String,
    pub location: String,
    pub staff_name: String,
    pub kind: AssignmentKind,
}

impl AssignmentRecord {
    pub fn matches_slot(&self, date: NaiveDate, campus: &str, location: &str) -> bool {
        self.date == date && self.campus == campus && self.location == location
    }
}

/// Planning ordonné ; seul `Scheduler::swap` modifie les noms en place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    records: Vec<AssignmentRecord>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: AssignmentRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&AssignmentRecord> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssignmentRecord> {
        self.records.iter()
    }

    pub fn on_date(&self, date: NaiveDate) -> impl Iterator<Item = &AssignmentRecord> {
        self.records.iter().filter(move |r| r.date == date)
    }

    pub(crate) fn records_mut(&mut self) -> &mut [AssignmentRecord] {
        &mut self.records
    }
}

impl From<Vec<AssignmentRecord>> for Schedule {
    fn from(records: Vec<AssignmentRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a AssignmentRecord;
    type IntoIter = std::slice::Iter<'a, AssignmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Compteurs de charge (nom → nombre d'affectations, fixes comprises).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workload {
    counts: BTreeMap<String, u32>,
}

impl Workload {
    /// Initialise chaque nom de l'effectif à zéro (doublons fusionnés).
    pub fn seeded<'a, I: IntoIterator<Item = &'a StaffMember>>(staff: I) -> Self {
        let counts = staff.into_iter().map(|s| (s.name.clone(), 0)).collect();
        Self { counts }
    }

    /// Recompte complet : nombre d'occurrences de chaque nom dans le planning.
    pub fn recount(staff: &[StaffMember], schedule: &Schedule) -> Self {
        let mut out = Self::seeded(staff);
        for record in schedule {
            out.increment(&record.staff_name);
        }
        out
    }

    pub fn get(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, name: &str) {
        *self.counts.entry(name.to_owned()).or_insert(0) += 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Plage de dates d'une génération (bornes incluses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// État courant : effectif, planning publié et compteurs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub range: Option<DateRange>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub workload: Workload,
}

impl Session {
    pub fn find_staff<'a>(&'a self, name: &str) -> Option<&'a StaffMember> {
        self.staff.iter().find(|s| s.name == name)
    }

    pub fn is_published(&self) -> bool {
        self.range.is_some()
    }
}
