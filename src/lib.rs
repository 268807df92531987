// rostercheck library - roster PDF text -> club player violations
pub mod club;
pub mod config;
pub mod pdf_extraction;
pub mod pipeline;
pub mod report;
pub mod roster;
pub mod types;
pub mod violations;

pub use pipeline::{run, CheckOutcome, Checker};
pub use types::{CheckError, GameFormat, Result};
