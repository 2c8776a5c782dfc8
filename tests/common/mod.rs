#![allow(dead_code)]
use campus_roster::{CampusQuota, LocationQuota, RosterConfig, StaffMember};
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn config(campuses: &[(&str, &[(&str, u32)])]) -> RosterConfig {
    RosterConfig {
        campuses: campuses
            .iter()
            .map(|(campus, locs)| CampusQuota {
                campus: (*campus).into(),
                locations: locs
                    .iter()
                    .map(|(name, required)| LocationQuota {
                        name: (*name).into(),
                        required: *required,
                    })
                    .collect(),
            })
            .collect(),
        holidays: Vec::new(),
        admin_secret: None,
    }
}

pub fn staff(name: &str, campus: &str, dept: &str) -> StaffMember {
    StaffMember::new(name, campus, dept)
}

/// Effectif varié sur les deux campus de référence.
pub fn mixed_roster() -> Vec<StaffMember> {
    let depts = ["생활관", "상황실", "도서관", "행정", "시설"];
    let campuses = ["인천", "경기", "모두"];
    (0..36)
        .map(|i| {
            staff(
                &format!("staff{i:02}"),
                campuses[i % campuses.len()],
                depts[i % depts.len()],
            )
        })
        .collect()
}
