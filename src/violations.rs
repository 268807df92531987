// Club player cap enforcement
use serde::Serialize;
use std::collections::BTreeSet;

use crate::club::ClubPlayerSet;
use crate::roster::{title_case, Roster};

/// A team over the cap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamViolation {
    pub team: String,
    pub club_players: usize,
}

/// Club players found on one non-elite team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    pub team: String,
    /// Title-cased display names, roster order, duplicates kept
    pub club_players: Vec<String>,
}

/// Full roster of an elite team, listed for reference only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EliteRoster {
    pub team: String,
    /// Title-cased display names, roster order
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationReport {
    pub limit: usize,
    /// Teams whose club count exceeds `limit`, roster order
    pub violations: Vec<TeamViolation>,
    /// Every non-elite team with at least one club player, roster order
    pub summary: Vec<TeamSummary>,
}

impl ViolationReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violation_for(&self, team: &str) -> Option<usize> {
        self.violations
            .iter()
            .find(|v| v.team == team)
            .map(|v| v.club_players)
    }

    pub fn is_violating(&self, team: &str) -> bool {
        self.violation_for(team).is_some()
    }

    pub fn summary_for(&self, team: &str) -> Option<&[String]> {
        self.summary
            .iter()
            .find(|s| s.team == team)
            .map(|s| s.club_players.as_slice())
    }
}

/// Count club players on every non-elite team.
///
/// `club` must already contain the elite players. Elite teams are skipped
/// entirely; a player listed twice on one team counts twice.
pub fn check_violations(
    roster: &Roster,
    elite_teams: &BTreeSet<String>,
    club: &ClubPlayerSet,
    limit: usize,
) -> ViolationReport {
    let mut report = ViolationReport { limit, ..Default::default() };

    for team in roster.iter().filter(|t| !elite_teams.contains(&t.name)) {
        let found: Vec<String> = team
            .players
            .iter()
            .filter(|p| club.contains(p))
            .map(|p| title_case(p))
            .collect();

        if found.len() > limit {
            report.violations.push(TeamViolation {
                team: team.name.clone(),
                club_players: found.len(),
            });
        }
        if !found.is_empty() {
            report.summary.push(TeamSummary {
                team: team.name.clone(),
                club_players: found,
            });
        }
    }

    report
}

/// Elite teams with their players, roster order
pub fn elite_rosters(roster: &Roster, elite_teams: &BTreeSet<String>) -> Vec<EliteRoster> {
    roster
        .iter()
        .filter(|t| elite_teams.contains(&t.name))
        .map(|t| EliteRoster {
            team: t.name.clone(),
            players: t.players.iter().map(|p| title_case(p)).collect(),
        })
        .collect()
}
