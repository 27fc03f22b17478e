//! Factory for obtaining one of the implementations of our DAO objects

use crate::{
    stdin_reader::MatchLogStdinReader,
    sync_file_reader::MatchLogFileSyncReader,
};
use dal_api::{Config, FileReaderInfo, MatchLogFeed};
use dbd_match_log::MatchLineParser;
use std::borrow::Cow;
use std::sync::Arc;


/// The log locator meaning "read from the standard input"
pub const STDIN_LOCATOR: &str = "-";

/// Instantiates a Data Access Object (dao) able to work on the contents of `log_locator` -- a match log file path
/// or [STDIN_LOCATOR] -- from which a [MatchLogFeed] is returned.
pub fn instantiate_match_log_feed(config: Arc<Config>, parser: Arc<MatchLineParser>, log_locator: &str) -> Box<dyn MatchLogFeed> {
    if log_locator == STDIN_LOCATOR {
        MatchLogStdinReader::new(config, parser)
    } else {
        MatchLogFileSyncReader::new(config, parser, FileReaderInfo { log_file_path: Cow::Owned(log_locator.to_string()) })
    }
}
