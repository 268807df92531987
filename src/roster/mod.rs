// Structured rosters recovered from export text
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::types::TeamLevel;

pub mod line_classifier;
pub mod names;
pub mod parser;

pub use line_classifier::{classify_line, LineKind, NoiseFilter};
pub use names::{canonical_csv_name, normalize_player_name, title_case};
pub use parser::{Effect, ParserState, RosterParser};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    /// Level in force at the team's most recent header
    pub level: TeamLevel,
    /// Canonical names in PDF order, duplicates kept
    pub players: Vec<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, level: TeamLevel) -> Self {
        Self { name: name.into(), level, players: Vec::new() }
    }

    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(players.into_iter().map(Into::into));
        self
    }
}

/// Teams keyed by name, iterated in first-declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty roster for `name`. A repeated name loses its earlier
    /// players but keeps its original position.
    pub fn declare(&mut self, name: &str, level: TeamLevel) {
        match self.index.get(name) {
            Some(&i) => self.teams[i] = Team::new(name, level),
            None => {
                self.index.insert(name.to_string(), self.teams.len());
                self.teams.push(Team::new(name, level));
            }
        }
    }

    /// Append to a declared team; returns false if `team` is unknown
    pub fn push_player(&mut self, team: &str, player: String) -> bool {
        match self.index.get(team) {
            Some(&i) => {
                self.teams[i].players.push(player);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Team> {
        self.index.get(name).map(|&i| &self.teams[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl FromIterator<Team> for Roster {
    fn from_iter<I: IntoIterator<Item = Team>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for team in iter {
            roster.declare(&team.name, team.level);
            for player in team.players {
                roster.push_player(&team.name, player);
            }
        }
        roster
    }
}

/// Parser output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRoster {
    pub roster: Roster,
    /// Every team ever declared under an Elite level. Never shrinks.
    pub elite_teams: BTreeSet<String>,
    /// Everyone listed on an elite team; promoted to club status everywhere
    pub elite_players: BTreeSet<String>,
}

impl ParsedRoster {
    pub fn is_elite(&self, team: &str) -> bool {
        self.elite_teams.contains(team)
    }

    pub fn player_count(&self) -> usize {
        self.roster.iter().map(|t| t.players.len()).sum()
    }
}
