use super::SchedError;
use crate::model::{StaffMember, Workload, UNSPECIFIED_LOCATION};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Une date fixe résolue, avec son lieu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSlot {
    pub date: NaiveDate,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEntry {
    pub name: String,
    pub location: String,
    pub campus: String,
}

/// Affectations fixes groupées par date (ordre de l'effectif conservé).
#[derive(Debug, Clone, Default)]
pub struct FixedPlan {
    by_date: BTreeMap<NaiveDate, Vec<FixedEntry>>,
}

impl FixedPlan {
    pub fn on(&self, date: NaiveDate) -> &[FixedEntry] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// Appariement positionnel dates/lieux. Chaque jeton est parsé isolément :
/// une date invalide donne une erreur pour cette position seulement.
pub fn fixed_slots(member: &StaffMember) -> Vec<Result<FixedSlot, SchedError>> {
    let locations = &member.fixed_locations;
    member
        .fixed_dates
        .iter()
        .enumerate()
        .map(|(i, raw)| -> Result<FixedSlot, SchedError> {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| SchedError::InvalidDate(raw.clone()))?;
            let location = match locations.get(i) {
                Some(loc) => loc.trim(),
                None if locations.len() == 1 => locations[0].trim(),
                None => UNSPECIFIED_LOCATION,
            };
            let location = if location.is_empty() {
                UNSPECIFIED_LOCATION
            } else {
                location
            };
            Ok(FixedSlot {
                date,
                location: location.to_owned(),
            })
        })
        .collect()
}

/// Construit la table date → affectations fixes de `start..=end` (week-ends et
/// fériés compris) et incrémente la charge une fois par date retenue.
/// Un même nom n'est retenu qu'une fois par date.
pub fn resolve_fixed(
    staff: &[StaffMember],
    start: NaiveDate,
    end: NaiveDate,
    workload: &mut Workload,
) -> FixedPlan {
    let mut plan = FixedPlan::default();
    let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();

    for member in staff {
        for slot in fixed_slots(member) {
            let slot = match slot {
                Ok(slot) => slot,
                Err(err) => {
                    tracing::debug!(staff = %member.name, %err, "skipping fixed date");
                    continue;
                }
            };
            if slot.date < start || slot.date > end {
                tracing::debug!(staff = %member.name, date = %slot.date, "fixed date outside range");
                continue;
            }
            if !seen.insert((member.name.clone(), slot.date)) {
                tracing::debug!(staff = %member.name, date = %slot.date, "duplicate fixed date ignored");
                continue;
            }
            workload.increment(&member.name);
            plan.by_date.entry(slot.date).or_default().push(FixedEntry {
                name: member.name.clone(),
                location: slot.location,
                campus: member.campus.clone(),
            });
        }
    }

    plan
}
