//! Resting place for [MatchLogEntry]


use crate::matches::MatchRecord;
use chrono::NaiveDate;

/// What a match log feed yields for each of the meaningful lines of its source.\
/// Every variant has a `line_number` -- starting from 1 -- pointing back to the source line.
///
/// Blank lines, as well as lines found out of a dated block, yield nothing.
#[derive(Debug)]
pub enum MatchLogEntry {
    /// A date line opened a new block: the following matches were played in `date`
    MatchDate { line_number: u32, date: NaiveDate },
    /// A match was successfully parsed
    Match     { line_number: u32, record: MatchRecord },
    /// The line couldn't be taken for a match at all -- this also closes the current date block
    BlockEnded { line_number: u32, err: Box<dyn std::error::Error> },
    /// The line looks like a match, but some of its fields are unknown or violate the game rules.
    /// The date block continues.
    Rejected  { line_number: u32, err: Box<dyn std::error::Error> },
    /// The source couldn't be read
    Error     { line_number: u32, err: Box<dyn std::error::Error> },
}

impl MatchLogEntry {

    /// Returns true if the entry was not derived from an error
    pub fn is_ok(&self) -> bool {
        matches!(self, MatchLogEntry::MatchDate { .. } | MatchLogEntry::Match { .. })
    }

    /// Returns true if the entry reports a line that didn't make it into a match
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    pub fn unwrap_err(&self) -> &dyn std::error::Error {
        match self {
            MatchLogEntry::BlockEnded { err, .. } |
            MatchLogEntry::Rejected   { err, .. } |
            MatchLogEntry::Error      { err, .. } => err.as_ref(),
            _ => panic!("`MatchLogEntry` {self:?} is not an error"),
        }
    }

    /// Returns the source line number this entry was derived from
    pub fn line_number(&self) -> u32 {
        match self {
            MatchLogEntry::MatchDate  { line_number, .. } |
            MatchLogEntry::Match      { line_number, .. } |
            MatchLogEntry::BlockEnded { line_number, .. } |
            MatchLogEntry::Rejected   { line_number, .. } |
            MatchLogEntry::Error      { line_number, .. } => *line_number
        }
    }

}
