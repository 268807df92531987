// CLI tests driving the built binary through a pty
#![cfg(unix)]

mod common;

use rexpect::spawn;

const TIMEOUT_MS: u64 = 10000;
const BIN: &str = env!("CARGO_BIN_EXE_rostercheck");

#[test]
fn test_check_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("roster.pdf");
    let csv = dir.path().join("club.csv");
    common::write_roster_pdf(&pdf, common::ROSTER_PAGES);
    common::write_club_csv(&csv, common::CLUB_ROWS);
    let config = common::lopdf_only_config(dir.path());

    let cmd = format!(
        "{} --config {} check {} --club {} --plain",
        BIN,
        config.display(),
        pdf.display(),
        csv.display()
    );
    let mut p = spawn(&cmd, Some(TIMEOUT_MS)).unwrap();

    p.exp_string("Teams Violating Club Player Limit (> 1 per team):").unwrap();
    p.exp_string("- Lions FC has 2 club players.").unwrap();
    p.exp_string("Summary of Club Players on Rosters:").unwrap();
    p.exp_string("🔴 Lions FC: John Smith, Jane Doe").unwrap();
    p.exp_string("Tigers: Ava Reyes").unwrap();
    p.exp_string("Summary of Elite Teams and Players:").unwrap();
    p.exp_string("Elite Team: Kickers").unwrap();
    p.exp_string("Players: Ava Reyes").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_large_format_flag() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("roster.pdf");
    let csv = dir.path().join("club.csv");
    common::write_roster_pdf(&pdf, common::ROSTER_PAGES);
    common::write_club_csv(&csv, common::CLUB_ROWS);
    let config = common::lopdf_only_config(dir.path());

    let cmd = format!(
        "{} --config {} check {} --club {} --format large --plain",
        BIN,
        config.display(),
        pdf.display(),
        csv.display()
    );
    let mut p = spawn(&cmd, Some(TIMEOUT_MS)).unwrap();

    p.exp_string("No teams violating the 2 club player limit!").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_all_strategies_failing_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("roster.pdf");
    std::fs::write(&pdf, "not a pdf").unwrap();
    let config = common::write_config(dir.path(), &["pdftotext", "lopdf"], "/nonexistent/pdftotext");

    let cmd = format!("{} --config {} check {} --plain", BIN, config.display(), pdf.display());
    let mut p = spawn(&cmd, Some(TIMEOUT_MS)).unwrap();

    p.exp_string("pdftotext failed").unwrap();
    p.exp_string("Text extraction failed for all methods").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_dump_pages() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("roster.pdf");
    common::write_roster_pdf(&pdf, common::ROSTER_PAGES);

    let cmd = format!("{} dump {} --strategy lopdf", BIN, pdf.display());
    let mut p = spawn(&cmd, Some(TIMEOUT_MS)).unwrap();

    p.exp_string("=== Page 1 ===").unwrap();
    p.exp_string("Lions FCRosters").unwrap();
    p.exp_string("=== Page 2 ===").unwrap();
    p.exp_string("Kickers Rosters").unwrap();
    p.exp_eof().unwrap();
}
