#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn cli(state: &Path) -> Command {
    let mut cmd = Command::cargo_bin("campus-roster").unwrap();
    cmd.env_remove("ROSTER_ADMIN_SECRET")
        .arg("--state")
        .arg(state);
    cmd
}

fn write_staff(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("staff.csv");
    fs::write(
        &path,
        "이름,캠퍼스,소속,고정근무일자,고정근무지\n\
         김철수,인천,생활관,2025-11-03,상황실1\n\
         이영희,인천,행정,,\n\
         박민수,모두,도서관,,\n",
    )
    .unwrap();
    path
}

#[test]
fn generate_show_find_and_check() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.json");
    let staff = write_staff(dir.path());

    cli(&state)
        .args(["generate", "--start", "2025-11-03", "--end", "2025-11-04", "--staff"])
        .arg(&staff)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated"));
    assert!(state.exists());

    cli(&state)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-11-03(월)"))
        .stdout(predicate::str::contains("| 인천 | 상황실1 | 김철수"));

    cli(&state)
        .args(["find", "--name", "김철수"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0 | 2025-11-03 | 인천 | 상황실1 | 김철수 | 고정"));

    // trois personnes ne couvrent pas les quotas de référence
    cli(&state)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("issue(s)"));
}

#[test]
fn show_without_schedule() {
    let dir = tempdir().unwrap();
    cli(&dir.path().join("state.json"))
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("no schedule published yet"));
}

#[test]
fn admin_secret_guards_generate_and_swap() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.json");
    let staff = write_staff(dir.path());
    let cfg = dir.path().join("config.json");

    cli(&state)
        .args(["init-config", "--out"])
        .arg(&cfg)
        .assert()
        .success();
    let mut json: serde_json::Value = serde_json::from_slice(&fs::read(&cfg).unwrap()).unwrap();
    json["admin_secret"] = serde_json::Value::from("s3cret");
    fs::write(&cfg, serde_json::to_vec(&json).unwrap()).unwrap();

    let generate = |secret: Option<&str>| {
        let mut cmd = cli(&state);
        cmd.arg("--config").arg(&cfg);
        if let Some(s) = secret {
            cmd.args(["--secret", s]);
        }
        cmd.args(["generate", "--start", "2025-11-03", "--end", "2025-11-03", "--staff"])
            .arg(&staff);
        cmd
    };

    generate(None)
        .assert()
        .failure()
        .stderr(predicate::str::contains("admin secret required"));
    generate(Some("wrong")).assert().failure();
    generate(Some("s3cret")).assert().success();

    cli(&state)
        .arg("--config")
        .arg(&cfg)
        .args(["swap", "--first", "0", "--second", "1"])
        .assert()
        .failure();
    cli(&state)
        .arg("--config")
        .arg(&cfg)
        .args(["--secret", "s3cret", "swap", "--first", "0", "--second", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("swapped #0 and #1"));
}

#[test]
fn export_writes_csv_and_workbook() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.json");
    let staff = write_staff(dir.path());
    let sched = dir.path().join("schedule.csv");
    let work = dir.path().join("workload.csv");
    let book = dir.path().join("roster.xlsx");

    cli(&state)
        .args(["generate", "--start", "2025-11-03", "--end", "2025-11-07", "--staff"])
        .arg(&staff)
        .assert()
        .success();
    cli(&state)
        .args(["export", "--schedule-csv"])
        .arg(&sched)
        .arg("--workload-csv")
        .arg(&work)
        .arg("--xlsx")
        .arg(&book)
        .assert()
        .success();
    assert!(book.exists());

    let sched = fs::read_to_string(sched).unwrap();
    assert!(sched.starts_with("날짜,캠퍼스,근무지,직원,유형\n2025-11-03,인천,상황실1,김철수,고정\n"));
    let work = fs::read_to_string(work).unwrap();
    assert!(work.starts_with("직원 이름,횟수\n"));
    assert_eq!(work.lines().count(), 4);
}
