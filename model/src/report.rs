//! Contains the outcome of loading match logs, used to build reports

use crate::matches::MatchRecord;
use serde::Serialize;

/// Everything a match log load yielded: the good and the bad
#[derive(Debug, Default, Serialize)]
pub struct LoadedMatches {
    /// Successfully parsed matches, in source order
    pub matches: Vec<MatchRecord>,
    /// One human readable message for each line that was not loaded, in the form
    /// "Error at line N in file {path}: {message}"
    pub errors: Vec<String>,
}

impl LoadedMatches {

    /// Appends the contents of `other`, keeping the order
    pub fn extend(&mut self, other: LoadedMatches) {
        self.matches.extend(other.matches);
        self.errors.extend(other.errors);
    }

}
