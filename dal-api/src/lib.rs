//! Data Access Layer API: the contracts for obtaining match log entries from their sources

mod config;
pub use config::*;

use common::types::Result;
use model::log_entries::MatchLogEntry;
use std::pin::Pin;
use futures::Stream;


/// Feed for match log entries
pub trait MatchLogFeed {

    /// The name of the source, as it should appear in error messages -- the file path or "<stdin>"
    fn source_name(&self) -> &str;

    /// Consumes this object, returning a `Stream` which yields one [MatchLogEntry] for each meaningful line of the source.\
    /// Errors here mean the source couldn't even be opened.
    fn entries_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=MatchLogEntry>>>>;
}
