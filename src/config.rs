use crate::model::is_any_campus;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Effectif requis pour un lieu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationQuota {
    pub name: String,
    pub required: u32,
}

/// Lieux d'un campus, dans l'ordre de remplissage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusQuota {
    pub campus: String,
    pub locations: Vec<LocationQuota>,
}

/// Configuration statique du moteur. L'ordre des campus puis des lieux
/// détermine la priorité quand les candidats manquent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub campuses: Vec<CampusQuota>,
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Secret partagé exigé par les commandes d'administration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_secret: Option<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            campuses: vec![
                campus(
                    "인천",
                    &[("생활관1", 2), ("생활관2", 2), ("생활관3", 2), ("상황실1", 3), ("도서관1", 2)],
                ),
                campus("경기", &[("생활관1", 2), ("생활관2", 2), ("상황실2", 3), ("도서관2", 2)]),
            ],
            holidays: [(2025, 10, 3), (2025, 10, 6), (2025, 10, 9)]
                .into_iter()
                .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
                .collect(),
            admin_secret: None,
        }
    }
}

fn campus(name: &str, locations: &[(&str, u32)]) -> CampusQuota {
    CampusQuota {
        campus: name.to_owned(),
        locations: locations
            .iter()
            .map(|(loc, required)| LocationQuota {
                name: (*loc).to_owned(),
                required: *required,
            })
            .collect(),
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.campuses.is_empty() {
            bail!("config must define at least one campus");
        }
        let mut seen = HashSet::new();
        for c in &self.campuses {
            let name = c.campus.trim();
            if name.is_empty() {
                bail!("campus name cannot be empty");
            }
            if is_any_campus(name) {
                bail!("campus name {name} is reserved");
            }
            if !seen.insert(name) {
                bail!("duplicate campus {name}");
            }
            let mut locs = HashSet::new();
            for loc in &c.locations {
                if loc.name.trim().is_empty() {
                    bail!("location name cannot be empty (campus {name})");
                }
                if !locs.insert(loc.name.trim()) {
                    bail!("duplicate location {} in campus {name}", loc.name);
                }
            }
        }
        Ok(())
    }

    /// Paires (campus, lieu, quota) dans l'ordre de configuration.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.campuses.iter().flat_map(|c| {
            c.locations
                .iter()
                .map(move |l| (c.campus.as_str(), l.name.as_str(), l.required))
        })
    }

    pub fn quota(&self, campus: &str, location: &str) -> Option<u32> {
        self.slots()
            .find(|(c, l, _)| *c == campus && *l == location)
            .map(|(_, _, q)| q)
    }

    pub fn secret_matches(&self, given: Option<&str>) -> bool {
        match &self.admin_secret {
            None => true,
            Some(expected) => given == Some(expected.as_str()),
        }
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<RosterConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: RosterConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn export_config_json<P: AsRef<Path>>(path: P, config: &RosterConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
