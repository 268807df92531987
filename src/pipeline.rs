// End-to-end check: club exports + roster PDF -> violation report
//
// Extraction and CSV loading are the only I/O. Everything after the text is
// in hand is a pure function of that text, the club set and the format.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::club::{load_club_set, ClubPlayerSet};
use crate::config::CheckerConfig;
use crate::pdf_extraction::{ExtractionResult, ExtractionRouter};
use crate::roster::{NoiseFilter, ParsedRoster, RosterParser};
use crate::types::{GameFormat, Result};
use crate::violations::{check_violations, elite_rosters, EliteRoster, ViolationReport};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub format: GameFormat,
    /// Strategy that produced the text
    pub extraction_method: String,
    pub fallbacks: usize,
    pub teams: usize,
    pub elite_teams: Vec<String>,
    /// Elite teams and their players, for the reference section of the report
    pub elite_rosters: Vec<EliteRoster>,
    /// Size of the club set after elite promotion
    pub club_players: usize,
    #[serde(flatten)]
    pub report: ViolationReport,
}

/// Club set with elite players promoted, checked against the format's cap
pub fn evaluate(parsed: &ParsedRoster, club: &ClubPlayerSet, format: GameFormat) -> (ClubPlayerSet, ViolationReport) {
    let mut club = club.clone();
    club.promote(&parsed.elite_players);
    let report = check_violations(&parsed.roster, &parsed.elite_teams, &club, format.max_club_players());
    (club, report)
}

pub struct Checker {
    router: ExtractionRouter,
    parser: RosterParser,
}

impl Checker {
    pub fn new(router: ExtractionRouter, parser: RosterParser) -> Self {
        Self { router, parser }
    }

    pub fn from_config(config: &CheckerConfig) -> Self {
        Self::new(
            ExtractionRouter::from_config(&config.extraction),
            RosterParser::new(NoiseFilter::from(&config.noise)),
        )
    }

    pub fn check(&self, pdf_path: &Path, club_csvs: &[PathBuf], format: GameFormat) -> Result<CheckOutcome> {
        // bad exports fail before the slow extraction starts
        let club = load_club_set(club_csvs)?;
        let extraction = self.router.extract_with_fallback(pdf_path)?;
        Ok(self.finish(extraction, &club, format))
    }

    /// Same as `check` for a PDF held in memory
    pub fn check_bytes(&self, pdf_bytes: &[u8], club_csvs: &[PathBuf], format: GameFormat) -> Result<CheckOutcome> {
        let club = load_club_set(club_csvs)?;
        let extraction = self.router.extract_bytes_with_fallback(pdf_bytes)?;
        Ok(self.finish(extraction, &club, format))
    }

    /// Parse already-extracted text
    pub fn check_text(&self, text: &str, club: &ClubPlayerSet, format: GameFormat) -> (ParsedRoster, ViolationReport) {
        let parsed = self.parser.parse(text);
        let (_, report) = evaluate(&parsed, club, format);
        (parsed, report)
    }

    fn finish(&self, extraction: ExtractionResult, club: &ClubPlayerSet, format: GameFormat) -> CheckOutcome {
        debug!(
            "{} gave {} chars in {}ms",
            extraction.method,
            extraction.text.len(),
            extraction.extraction_time_ms
        );
        let parsed = self.parser.parse(&extraction.text);
        let (club, report) = evaluate(&parsed, club, format);

        info!(
            "{} teams, {} elite, {} club players, {} violations",
            parsed.roster.len(),
            parsed.elite_teams.len(),
            club.len(),
            report.violations.len()
        );

        CheckOutcome {
            format,
            extraction_method: extraction.method,
            fallbacks: extraction.fallbacks,
            teams: parsed.roster.len(),
            elite_rosters: elite_rosters(&parsed.roster, &parsed.elite_teams),
            elite_teams: parsed.elite_teams.into_iter().collect(),
            club_players: club.len(),
            report,
        }
    }
}

/// One-shot check with a configured checker
pub fn run(pdf_path: &Path, club_csvs: &[PathBuf], format: GameFormat, config: &CheckerConfig) -> Result<CheckOutcome> {
    Checker::from_config(config).check(pdf_path, club_csvs, format)
}
