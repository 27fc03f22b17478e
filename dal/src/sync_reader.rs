//! Resting place for [MatchLogSyncReader]


use common::types::Result;
use model::log_entries::MatchLogEntry;
use dal_api::{Config, MatchLogFeed};
use dbd_match_log::{deserialize_date_line, MatchLineParser, MatchLogSession};
use std::{
    pin::Pin,
    sync::Arc,
    task::Poll,
};
use futures::{Stream, stream, StreamExt};
use log::trace;


/// [MatchLogFeed] implementation for reading match log entries from any `BufRead`.\
/// Lines are only taken for matches inside a date block: the block is open after a date line (the session is *active*)
/// and gets closed by any line that can't be taken for a match (the session goes back to *idle*) -- lines
/// in between blocks are skipped.
pub struct MatchLogSyncReader<Reader: std::io::BufRead> {
    config: Arc<Config>,
    parser: Arc<MatchLineParser>,
    source_name: String,
    reader: Reader,
}

impl<Reader: std::io::BufRead> MatchLogSyncReader<Reader> {

    pub fn new(config: Arc<Config>, parser: Arc<MatchLineParser>, source_name: &str, reader: Reader) -> Box<Self> {
        Box::new(Self {
            config,
            parser,
            source_name: source_name.into(),
            reader,
        })
    }

}

impl<Reader: std::io::BufRead + 'static> MatchLogFeed for MatchLogSyncReader<Reader> {

    fn source_name(&self) -> &str {
        &self.source_name
    }

    fn entries_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=MatchLogEntry>>>> {
        let Self { config, parser, source_name, reader } = *self;
        let mut lines_iter = reader.lines().enumerate();
        let mut session = MatchLogSession::new(parser);

        let debug = config.debug;
        let stream = stream::poll_fn(move |_| loop {
            let Some((line_index, line_result)) = lines_iter.next()
            else {
                return Poll::Ready(None)
            };
            let line_number = line_index as u32 + 1;
            let entry = match line_result {
                Ok(line) => entry_for_line(&mut session, line_number, &line),
                Err(read_err) => Some(MatchLogEntry::Error { line_number, err: Box::from(format!("IO read error: {read_err}")) }),
            };
            match entry {
                Some(entry) => return Poll::Ready(Some(entry)),
                None => if debug {
                    trace!("'{source_name}': skipping line {line_number}, as it is blank or out of a dated block")
                },
            }
        });
        let stream: Pin<Box<dyn Stream<Item=MatchLogEntry>>> = if debug {
            Box::pin(stream
                .inspect(|yielded_entry| trace!("{yielded_entry:?}")))
        } else {
            Box::pin(stream)
        };
        Ok(stream)
    }

}

/// Feeds `line` to the `session`, returning the entry it yields -- if any
fn entry_for_line(session: &mut MatchLogSession, line_number: u32, line: &str) -> Option<MatchLogEntry> {
    if line.trim().is_empty() {
        return None
    }
    if let Some(date) = deserialize_date_line(line) {
        session.set_match_date(date);
        return Some(MatchLogEntry::MatchDate { line_number, date })
    }
    // idle: no block is open
    session.match_date()?;
    let entry = match session.parse(line) {
        Ok(record) => MatchLogEntry::Match { line_number, record },
        Err(parsing_err) if parsing_err.is_structural() => {
            session.end_block();
            MatchLogEntry::BlockEnded { line_number, err: Box::new(parsing_err) }
        },
        Err(parsing_err) => MatchLogEntry::Rejected { line_number, err: Box::new(parsing_err) },
    };
    Some(entry)
}
