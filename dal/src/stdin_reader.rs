//! Resting place for [MatchLogStdinReader]


use crate::sync_reader::MatchLogSyncReader;
use common::types::Result;
use model::log_entries::MatchLogEntry;
use dal_api::{Config, MatchLogFeed};
use dbd_match_log::MatchLineParser;
use std::io::BufReader;
use std::pin::Pin;
use std::sync::Arc;
use futures::Stream;


/// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
const BUFFER_SIZE: usize = 1024*1024;

/// How the standard input is named in error messages
pub const STDIN_SOURCE_NAME: &str = "<stdin>";


/// [MatchLogFeed] implementation for reading match log entries from the standard input
pub struct MatchLogStdinReader {
    config: Arc<Config>,
    parser: Arc<MatchLineParser>,
}

impl MatchLogStdinReader {

    pub fn new(config: Arc<Config>, parser: Arc<MatchLineParser>) -> Box<Self> {
        Box::new(Self {
            config,
            parser,
        })
    }

}

impl MatchLogFeed for MatchLogStdinReader {

    fn source_name(&self) -> &str {
        STDIN_SOURCE_NAME
    }

    fn entries_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=MatchLogEntry>>>> {
        let reader = BufReader::with_capacity(BUFFER_SIZE, std::io::stdin());
        MatchLogSyncReader::new(self.config, self.parser, STDIN_SOURCE_NAME, reader)
            .entries_stream()
    }

}
