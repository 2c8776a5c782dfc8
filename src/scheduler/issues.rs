use super::types::{Issue, IssueKind};
use crate::calendar;
use crate::category::Category;
use crate::config::RosterConfig;
use crate::model::{AssignmentKind, Session};
use chrono::NaiveDate;
use std::collections::HashSet;

pub(super) fn detect_issues(config: &RosterConfig, session: &Session) -> Vec<Issue> {
    let mut out = Vec::new();
    let mut booked: HashSet<(NaiveDate, &str)> = HashSet::new();

    for record in &session.schedule {
        let issue = |kind| Issue {
            date: record.date,
            campus: record.campus.clone(),
            location: record.location.clone(),
            staff_name: Some(record.staff_name.clone()),
            kind,
        };

        if !booked.insert((record.date, record.staff_name.as_str())) {
            out.push(issue(IssueKind::DoubleBooked));
        }

        if record.kind != AssignmentKind::Regular {
            continue;
        }
        let Some(member) = session.find_staff(&record.staff_name) else {
            continue;
        };
        if Category::classify(&member.department).clashes_with(Category::classify(&record.location)) {
            out.push(issue(IssueKind::CategoryClash));
        }
        if !member.can_work_at(&record.campus) {
            out.push(issue(IssueKind::CampusMismatch));
        }
    }

    if let Some(range) = session.range {
        for date in calendar::working_days(range.start, range.end, &config.holidays) {
            for (campus, location, required) in config.slots() {
                let filled = session
                    .schedule
                    .on_date(date)
                    .filter(|r| r.campus == campus && r.location == location)
                    .count() as u32;
                let kind = if filled < required {
                    IssueKind::Understaffed { required, filled }
                } else if filled > required {
                    IssueKind::Overstaffed { required, filled }
                } else {
                    continue;
                };
                out.push(Issue {
                    date,
                    campus: campus.to_owned(),
                    location: location.to_owned(),
                    staff_name: None,
                    kind,
                });
            }
        }
    }

    out
}
