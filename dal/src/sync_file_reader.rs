//! Resting place for [MatchLogFileSyncReader]


use crate::sync_reader::MatchLogSyncReader;
use common::types::Result;
use model::log_entries::MatchLogEntry;
use dal_api::{Config, FileReaderInfo, MatchLogFeed};
use dbd_match_log::MatchLineParser;
use std::fs::File;
use std::io::BufReader;
use std::pin::Pin;
use std::sync::Arc;
use futures::Stream;


/// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
const BUFFER_SIZE: usize = 1024*1024;


/// [MatchLogFeed] implementation for reading match log entries from a file
pub struct MatchLogFileSyncReader<'a> {
    config: Arc<Config>,
    parser: Arc<MatchLineParser>,
    params: FileReaderInfo<'a>,
}

impl<'a> MatchLogFileSyncReader<'a> {

    pub fn new(config: Arc<Config>, parser: Arc<MatchLineParser>, params: FileReaderInfo<'a>) -> Box<Self> {
        Box::new(Self {
            config,
            parser,
            params,
        })
    }

}

impl<'a> MatchLogFeed for MatchLogFileSyncReader<'a> {

    fn source_name(&self) -> &str {
        &self.params.log_file_path
    }

    fn entries_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=MatchLogEntry>>>> {
        let file = File::open(self.params.log_file_path.as_ref())
            .map_err(|err| format!("Couldn't open match log file '{}' for reading: {err}", self.params.log_file_path))?;
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);
        MatchLogSyncReader::new(self.config, self.parser, &self.params.log_file_path, reader)
            .entries_stream()
    }

}
