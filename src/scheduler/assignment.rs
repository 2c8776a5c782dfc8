use super::{balance, capacity, eligibility, fixed};
use crate::calendar;
use crate::config::RosterConfig;
use crate::model::{AssignmentKind, AssignmentRecord, Schedule, StaffMember, Workload};
use chrono::NaiveDate;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};

pub(super) fn generate<R: Rng + ?Sized>(
    config: &RosterConfig,
    staff: &[StaffMember],
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
) -> (Schedule, Workload) {
    let mut workload = Workload::seeded(staff);
    let plan = fixed::resolve_fixed(staff, start, end, &mut workload);

    let working: BTreeSet<NaiveDate> = calendar::working_days(start, end, &config.holidays)
        .into_iter()
        .collect();
    // Les dates fixes de la période sont émises même hors jours ouvrés.
    let days: BTreeSet<NaiveDate> = working.iter().copied().chain(plan.dates()).collect();

    let mut schedule = Schedule::new();
    let mut short_slots = 0usize;

    for date in days {
        let day_start = schedule.len();
        let mut assigned_today: HashSet<String> = HashSet::new();

        for entry in plan.on(date) {
            schedule.push(AssignmentRecord {
                date,
                campus: entry.campus.clone(),
                location: entry.location.clone(),
                staff_name: entry.name.clone(),
                kind: AssignmentKind::Fixed,
            });
            assigned_today.insert(entry.name.clone());
        }

        if !working.contains(&date) {
            continue;
        }

        for (campus, location, required) in config.slots() {
            let today = &schedule.records()[day_start..];
            let Some(needed) = capacity::remaining(today, date, campus, location, required) else {
                continue;
            };

            let candidates =
                eligibility::eligible_candidates(staff, campus, location, &assigned_today);
            let chosen = balance::select_balanced(candidates, needed, &workload, rng);
            if chosen.len() < needed {
                short_slots += 1;
                tracing::warn!(
                    %date,
                    campus,
                    location,
                    needed,
                    assigned = chosen.len(),
                    "not enough eligible staff"
                );
            }

            for name in chosen {
                schedule.push(AssignmentRecord {
                    date,
                    campus: campus.to_owned(),
                    location: location.to_owned(),
                    staff_name: name.to_owned(),
                    kind: AssignmentKind::Regular,
                });
                workload.increment(name);
                assigned_today.insert(name.to_owned());
            }
        }
    }

    tracing::info!(
        %start,
        %end,
        working_days = working.len(),
        fixed = plan.len(),
        records = schedule.len(),
        short_slots,
        "schedule generated"
    );

    (schedule, workload)
}
