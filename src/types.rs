// Core types and error enums for rostercheck
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Division tier announced by a `->` line in the roster export
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamLevel {
    #[default]
    Regular,
    Elite,
}

impl TeamLevel {
    /// Level named by an announcement line such as `Winter Soccer -> Elite`
    pub fn from_announcement(line: &str) -> Self {
        if line.contains("Elite") {
            TeamLevel::Elite
        } else {
            TeamLevel::Regular
        }
    }

    pub fn is_elite(self) -> bool {
        matches!(self, TeamLevel::Elite)
    }
}

/// How many players a sport puts on the field at once. Picks the club cap.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameFormat {
    /// 5 or fewer players in the game at one time
    #[default]
    Small,
    /// 6 or more players in the game at one time
    Large,
}

impl GameFormat {
    pub const fn max_club_players(self) -> usize {
        match self {
            GameFormat::Small => 1,
            GameFormat::Large => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GameFormat::Small => "5 or fewer players (max 1 club player)",
            GameFormat::Large => "6 or more players (max 2 club players)",
        }
    }
}

impl fmt::Display for GameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text extraction engines, in the order the router tries them by default
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// poppler `pdftotext`, one call per page
    Pdftotext,
    /// pure-Rust lopdf text operators, page by page
    Lopdf,
    /// `pdftohtml` into a temp dir, markup stripped afterwards
    Html,
}

impl StrategyKind {
    pub const DEFAULT_ORDER: [StrategyKind; 3] =
        [StrategyKind::Pdftotext, StrategyKind::Lopdf, StrategyKind::Html];

    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Pdftotext => "pdftotext",
            StrategyKind::Lopdf => "lopdf",
            StrategyKind::Html => "html",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Error types

/// Failure of a single extraction strategy. Recoverable: the router moves on.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no HTML output found in {0}")]
    MissingOutput(PathBuf),

    #[error("no text extracted")]
    Empty,
}

/// One failed attempt, kept for the terminal error message
#[derive(Debug)]
pub struct StrategyAttempt {
    pub strategy: String,
    pub error: StrategyError,
}

fn list_attempts(attempts: &[StrategyAttempt]) -> String {
    attempts
        .iter()
        .map(|a| format!("{}: {}", a.strategy, a.error))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Text extraction failed for all methods ({})", list_attempts(.attempts))]
    AllStrategiesFailed { attempts: Vec<StrategyAttempt> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ClubCsvError {
    #[error("cannot open club roster {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed club roster {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("club roster {path} has no `{column}` column")]
    MissingColumn { path: PathBuf, column: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Anything that stops a check run
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    ClubCsv(#[from] ClubCsvError),
}

pub type Result<T> = std::result::Result<T, CheckError>;
