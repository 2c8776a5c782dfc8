use crate::model::AssignmentRecord;
use chrono::NaiveDate;

/// Places restantes pour (date, campus, lieu) ; `None` si rien à pourvoir.
/// Un dépassement dû aux affectations fixes est toléré tel quel.
pub fn remaining(
    records: &[AssignmentRecord],
    date: NaiveDate,
    campus: &str,
    location: &str,
    required: u32,
) -> Option<usize> {
    let filled = filled(records, date, campus, location);
    let needed = (required as usize).saturating_sub(filled);
    (needed > 0).then_some(needed)
}

pub fn filled(records: &[AssignmentRecord], date: NaiveDate, campus: &str, location: &str) -> usize {
    records
        .iter()
        .filter(|r| r.matches_slot(date, campus, location))
        .count()
}
