#![forbid(unsafe_code)]
mod common;

use campus_roster::{
    find_by_name, AssignmentKind, AssignmentRecord, Board, BoardRenderer, Schedule, TextBoard,
};
use chrono::NaiveDate;
use common::{config, date};

fn record(d: NaiveDate, campus: &str, location: &str, name: &str, kind: AssignmentKind) -> AssignmentRecord {
    AssignmentRecord {
        date: d,
        campus: campus.into(),
        location: location.into(),
        staff_name: name.into(),
        kind,
    }
}

fn sample_schedule() -> Schedule {
    use AssignmentKind::{Fixed, Regular};
    Schedule::from(vec![
        record(date(2025, 11, 3), "인천", "상황실1", "A", Fixed),
        record(date(2025, 11, 3), "인천", "도서관1", "B", Regular),
        record(date(2025, 11, 3), "인천", "상황실1", "C", Regular),
        record(date(2025, 11, 4), "인천", "도서관1", "A", Regular),
        record(date(2025, 11, 4), "모두", "미지정", "D", Fixed),
    ])
}

#[test]
fn text_board_layout() {
    let cfg = config(&[("인천", &[("도서관1", 1), ("상황실1", 2)])]);
    let board = Board::build(&cfg, &sample_schedule());
    assert_eq!(board.dates, vec![date(2025, 11, 3), date(2025, 11, 4)]);
    assert_eq!(board.rows.len(), 3);

    insta::assert_snapshot!(TextBoard.render(&board));
}

#[test]
fn find_returns_positions() {
    let schedule = sample_schedule();
    let hits: Vec<usize> = find_by_name(&schedule, "A").into_iter().map(|(i, _)| i).collect();
    assert_eq!(hits, vec![0, 3]);
    assert!(find_by_name(&schedule, "  ").is_empty());
    assert!(find_by_name(&schedule, "Z").is_empty());
}
