#![forbid(unsafe_code)]
mod common;

use campus_roster::{IssueKind, SchedError, Scheduler};
use common::{config, date, staff};

fn fixed_only_scheduler() -> Scheduler {
    let mut s = Scheduler::new(config(&[("인천", &[])])).unwrap();
    s.generate(
        vec![
            staff("A", "인천", "일반").with_fixed("2025-11-03,2025-11-04", "도서관1"),
            staff("B", "인천", "일반").with_fixed("2025-11-04", "상황실1"),
        ],
        date(2025, 11, 3),
        date(2025, 11, 4),
    );
    s
}

#[test]
fn swap_exchanges_names_only() {
    let mut s = Scheduler::new(config(&[("인천", &[])])).unwrap();
    s.generate(
        vec![
            staff("A", "인천", "일반").with_fixed("2025-11-03", "도서관1"),
            staff("B", "인천", "일반").with_fixed("2025-11-04", "상황실1"),
        ],
        date(2025, 11, 3),
        date(2025, 11, 4),
    );

    s.swap(0, 1).unwrap();
    let records = s.schedule().records();
    assert_eq!((records[0].date, records[0].staff_name.as_str()), (date(2025, 11, 3), "B"));
    assert_eq!((records[1].date, records[1].staff_name.as_str()), (date(2025, 11, 4), "A"));
    assert_eq!(records[0].location, "도서관1");
    assert_eq!(records[1].location, "상황실1");
    assert_eq!(s.workload().get("A"), 1);
    assert_eq!(s.workload().get("B"), 1);
}

#[test]
fn swap_skips_validation_and_check_reports_it() {
    let mut s = fixed_only_scheduler();
    assert!(s.check().is_empty());

    s.swap(0, 2).unwrap();
    let names: Vec<_> = s.schedule().iter().map(|r| r.staff_name.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "A"]);
    assert_eq!(s.workload().get("A"), 2);
    assert_eq!(s.workload().get("B"), 1);

    let issues = s.check();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::DoubleBooked);
    assert_eq!(issues[0].date, date(2025, 11, 4));
    assert_eq!(issues[0].staff_name.as_deref(), Some("A"));
}

#[test]
fn swap_rejects_out_of_range_positions() {
    let mut s = fixed_only_scheduler();
    let before = s.schedule().clone();

    let err = s.swap(0, 5).unwrap_err();
    assert!(matches!(err, SchedError::InvalidPosition { position: 5, len: 3 }));
    assert_eq!(s.schedule(), &before);
}

#[test]
fn swap_with_itself_is_a_no_op() {
    let mut s = fixed_only_scheduler();
    let before = s.schedule().clone();
    s.swap(1, 1).unwrap();
    assert_eq!(s.schedule(), &before);
}

#[test]
fn check_reports_staffing_gaps() {
    let mut s = Scheduler::new(config(&[("인천", &[("상황실1", 3)])])).unwrap();
    s.generate(
        vec![staff("A", "인천", "일반")],
        date(2025, 11, 3),
        date(2025, 11, 3),
    );
    let issues = s.check();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::Understaffed { required: 3, filled: 1 });
    assert_eq!(issues[0].staff_name, None);
}
