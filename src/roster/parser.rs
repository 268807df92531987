// Roster parser: a single pass over the export text as a small state machine
//
// `ParserState::step` is a pure transition (state, line) -> (state, effect).
// `RosterParser` folds it over the lines and applies the effects to a
// `ParsedRoster`. Malformed input degrades by omission, it never errors.

use tracing::debug;

use super::line_classifier::{classify_line, player_name_token, LineKind, NoiseFilter};
use super::names::normalize_player_name;
use super::ParsedRoster;
use crate::types::TeamLevel;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    pub current_team: Option<String>,
    /// Set by the column header, cleared by every team header
    pub recording_players: bool,
    pub current_level: TeamLevel,
}

/// What a line does to the roster being built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    DeclareTeam { name: String, level: TeamLevel },
    AddPlayer { team: Option<String>, name: String },
}

impl ParserState {
    pub fn step(self, kind: LineKind<'_>) -> (ParserState, Effect) {
        match kind {
            LineKind::Noise => (self, Effect::None),
            LineKind::LevelAnnouncement(level) => (
                ParserState { current_level: level, ..self },
                Effect::None,
            ),
            LineKind::TeamHeader(name) => {
                let effect = Effect::DeclareTeam {
                    name: name.to_string(),
                    level: self.current_level,
                };
                let state = ParserState {
                    current_team: Some(name.to_string()),
                    recording_players: false,
                    current_level: self.current_level,
                };
                (state, effect)
            }
            LineKind::ColumnHeader => (
                ParserState { recording_players: true, ..self },
                Effect::None,
            ),
            LineKind::Text(line) if self.recording_players && !line.trim().is_empty() => {
                let effect = Effect::AddPlayer {
                    team: self.current_team.clone(),
                    name: normalize_player_name(player_name_token(line)),
                };
                (self, effect)
            }
            LineKind::Text(_) => (self, Effect::None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RosterParser {
    noise: NoiseFilter,
}

impl RosterParser {
    pub fn new(noise: NoiseFilter) -> Self {
        Self { noise }
    }

    pub fn parse(&self, text: &str) -> ParsedRoster {
        let mut parsed = ParsedRoster::default();
        let mut state = ParserState::default();
        let mut ignored = 0usize;

        for line in text.split('\n') {
            let kind = classify_line(line, &self.noise);
            let (next, effect) = state.step(kind);
            state = next;
            if !apply(&mut parsed, effect) {
                ignored += 1;
            }
        }

        debug!(
            "parsed {} teams ({} elite), {} player rows, {} lines ignored",
            parsed.roster.len(),
            parsed.elite_teams.len(),
            parsed.player_count(),
            ignored
        );
        parsed
    }
}

/// Returns false when the effect changed nothing
fn apply(parsed: &mut ParsedRoster, effect: Effect) -> bool {
    match effect {
        Effect::None => false,
        Effect::DeclareTeam { name, level } => {
            parsed.roster.declare(&name, level);
            if level.is_elite() {
                parsed.elite_teams.insert(name);
            }
            true
        }
        Effect::AddPlayer { team, name } => {
            let Some(team) = team else {
                return false;
            };
            if parsed.is_elite(&team) {
                parsed.elite_players.insert(name.clone());
            }
            // a blank team name still collects elite players, never a roster
            !team.is_empty() && parsed.roster.push_player(&team, name)
        }
    }
}
