// Line-local classification of roster export text
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::NoiseConfig;
use crate::types::TeamLevel;

/// Print timestamp in the page header, e.g. `1/15/25, 3:04 PM`
static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}/\d{1,2}/\d{2}, \d{1,2}:\d{2} [APap][Mm]").expect("timestamp pattern")
});

/// `Lions FCRosters` -> `Lions FC` (shortest prefix before the first "Rosters")
static TEAM_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)Rosters").expect("team header pattern"));

const LEVEL_MARKER: &str = "->";
const COLUMN_HEADER: &str = "Name Gender Status";

/// What a single line is, before parser state is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Noise,
    LevelAnnouncement(TeamLevel),
    /// Trimmed team name
    TeamHeader(&'a str),
    ColumnHeader,
    /// Anything else; a player row if the parser is recording
    Text(&'a str),
}

/// Repeated page furniture to drop before classification
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    markers: Vec<String>,
}

impl NoiseFilter {
    pub fn new(institution_marker: &str, tracking_domain: &str) -> Self {
        // an empty marker would match every line
        let markers = [institution_marker, tracking_domain]
            .into_iter()
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
        Self { markers }
    }

    pub fn is_noise(&self, line: &str) -> bool {
        self.markers.iter().any(|m| line.contains(m.as_str())) || TIMESTAMP.is_match(line)
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::from(&NoiseConfig::default())
    }
}

impl From<&NoiseConfig> for NoiseFilter {
    fn from(config: &NoiseConfig) -> Self {
        Self::new(&config.institution_marker, &config.tracking_domain)
    }
}

/// First matching rule wins: noise, level, team header, column header, text
pub fn classify_line<'a>(line: &'a str, noise: &NoiseFilter) -> LineKind<'a> {
    if noise.is_noise(line) {
        return LineKind::Noise;
    }
    if line.contains(LEVEL_MARKER) {
        return LineKind::LevelAnnouncement(TeamLevel::from_announcement(line));
    }
    if let Some(name) = TEAM_HEADER.captures(line).and_then(|c| c.get(1)) {
        return LineKind::TeamHeader(name.as_str().trim());
    }
    if line.contains(COLUMN_HEADER) {
        return LineKind::ColumnHeader;
    }
    LineKind::Text(line)
}

/// Name part of a player row: everything before the first `" Male "`, then
/// before the first `" Female "`. Rows with neither keep the whole line.
pub fn player_name_token(line: &str) -> &str {
    let before_male = line.split(" Male ").next().unwrap_or(line);
    before_male.split(" Female ").next().unwrap_or(before_male)
}
