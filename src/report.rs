// Terminal and JSON rendering of a check outcome
use crossterm::style::{style, Stylize};
use std::fmt::Write;

use crate::pipeline::CheckOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text { color: bool },
    Json,
}

pub fn render(outcome: &CheckOutcome, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text { color } => Ok(render_text(outcome, color)),
        OutputFormat::Json => serde_json::to_string_pretty(outcome),
    }
}

/// Prefix on summary lines of teams over the cap, with or without color
pub const VIOLATOR_MARKER: &str = "🔴";

/// Violations first, then the per-team summary, then the elite rosters.
/// Violating teams carry `VIOLATOR_MARKER` in the summary, and are red as
/// well when `color` is set.
pub fn render_text(outcome: &CheckOutcome, color: bool) -> String {
    let report = &outcome.report;
    let mut out = String::new();

    let _ = writeln!(out, "Game format: {}", outcome.format);
    let _ = writeln!(
        out,
        "Parsed {} teams ({} elite) via {}",
        outcome.teams,
        outcome.elite_teams.len(),
        outcome.extraction_method
    );
    out.push('\n');

    if report.is_clean() {
        let _ = writeln!(out, "✅ No teams violating the {} club player limit!", report.limit);
    } else {
        let _ = writeln!(out, "🚫 Teams Violating Club Player Limit (> {} per team):", report.limit);
        for v in &report.violations {
            if color {
                let _ = writeln!(
                    out,
                    "- {} has {} club players.",
                    style(&v.team).bold(),
                    style(v.club_players).bold()
                );
            } else {
                let _ = writeln!(out, "- {} has {} club players.", v.team, v.club_players);
            }
        }
    }

    out.push('\n');
    let _ = writeln!(out, "Summary of Club Players on Rosters:");
    if report.summary.is_empty() {
        let _ = writeln!(out, "(no club players found on any team)");
    }
    for entry in &report.summary {
        let players = entry.club_players.join(", ");
        let violating = report.is_violating(&entry.team);
        match (color, violating) {
            (true, true) => {
                let _ = writeln!(
                    out,
                    "{} {}: {}",
                    VIOLATOR_MARKER,
                    style(&entry.team).red().bold(),
                    style(players).red()
                );
            }
            (true, false) => {
                let _ = writeln!(out, "{}: {}", style(&entry.team).bold(), players);
            }
            (false, true) => {
                let _ = writeln!(out, "{} {}: {}", VIOLATOR_MARKER, entry.team, players);
            }
            (false, false) => {
                let _ = writeln!(out, "{}: {}", entry.team, players);
            }
        }
    }

    out.push('\n');
    let _ = writeln!(out, "🏆 Summary of Elite Teams and Players:");
    if outcome.elite_rosters.is_empty() {
        let _ = writeln!(out, "(no elite teams)");
    }
    for elite in &outcome.elite_rosters {
        if color {
            let _ = writeln!(out, "Elite Team: {}", style(&elite.team).bold());
        } else {
            let _ = writeln!(out, "Elite Team: {}", elite.team);
        }
        let _ = writeln!(out, "Players: {}", elite.players.join(", "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameFormat;
    use crate::violations::{EliteRoster, TeamSummary, TeamViolation, ViolationReport};

    fn outcome(violating: bool) -> CheckOutcome {
        let mut report = ViolationReport {
            limit: 1,
            violations: Vec::new(),
            summary: vec![
                TeamSummary { team: "Lions FC".into(), club_players: vec!["John Smith".into(), "Jane Doe".into()] },
                TeamSummary { team: "Tigers".into(), club_players: vec!["Bo Park".into()] },
            ],
        };
        if violating {
            report.violations.push(TeamViolation { team: "Lions FC".into(), club_players: 2 });
        }
        CheckOutcome {
            format: GameFormat::Small,
            extraction_method: "lopdf".into(),
            fallbacks: 1,
            teams: 3,
            elite_teams: vec!["Kickers".into()],
            elite_rosters: vec![EliteRoster {
                team: "Kickers".into(),
                players: vec!["Ava Reyes".into(), "John Smith".into()],
            }],
            club_players: 4,
            report,
        }
    }

    #[test]
    fn test_plain_violations() {
        let text = render_text(&outcome(true), false);
        assert!(text.contains("🚫 Teams Violating Club Player Limit (> 1 per team):"));
        assert!(text.contains("- Lions FC has 2 club players."));
        assert!(!text.contains('\u{1b}'));

        let lions = text.lines().find(|l| l.contains("Lions FC: ")).unwrap();
        let tigers = text.lines().find(|l| l.contains("Tigers: ")).unwrap();
        assert_eq!(lions, "🔴 Lions FC: John Smith, Jane Doe");
        assert_eq!(tigers, "Tigers: Bo Park");
    }

    #[test]
    fn test_no_marker_without_violations() {
        let text = render_text(&outcome(false), false);
        assert!(!text.contains(VIOLATOR_MARKER));
        assert!(text.contains("\nLions FC: John Smith, Jane Doe\n"));
    }

    #[test]
    fn test_plain_clean() {
        let text = render_text(&outcome(false), false);
        assert!(text.contains("✅ No teams violating the 1 club player limit!"));
        assert!(!text.contains("🚫"));
    }

    #[test]
    fn test_color_marks_violators() {
        let text = render_text(&outcome(true), true);
        assert!(text.contains(&format!("{} {}", VIOLATOR_MARKER, style("Lions FC").red().bold())));
        assert!(text.contains(&style("Tigers").bold().to_string()));
        let tigers = text.lines().find(|l| l.contains("Tigers")).unwrap();
        assert!(!tigers.contains(VIOLATOR_MARKER));
    }

    #[test]
    fn test_elite_section() {
        let text = render_text(&outcome(true), false);
        let section = text.split("🏆 Summary of Elite Teams and Players:").nth(1).unwrap();
        assert!(section.contains("Elite Team: Kickers\nPlayers: Ava Reyes, John Smith"));

        let mut none = outcome(false);
        none.elite_rosters.clear();
        assert!(render_text(&none, false).contains("(no elite teams)"));
    }

    #[test]
    fn test_json() {
        let json = render(&outcome(true), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["format"], "small");
        assert_eq!(value["limit"], 1);
        assert_eq!(value["violations"][0]["team"], "Lions FC");
        assert_eq!(value["summary"][1]["club_players"][0], "Bo Park");
        assert_eq!(value["elite_rosters"][0]["players"][1], "John Smith");
    }
}
