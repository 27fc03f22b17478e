//! Loads matches out of match log feeds, collecting a human readable message for every line left behind

use bll_api::{Config, MatchLoadingApi};
use common::types::Result;
use dal_api::MatchLogFeed;
use model::{
    log_entries::MatchLogEntry,
    report::LoadedMatches,
};
use std::error::Error;
use std::sync::Arc;
use futures::executor::block_on_stream;
use log::{info, warn};


/// [MatchLoadingApi] implementation consuming the feeds synchronously
pub struct MatchLoading {
    config: Arc<Config>,
}

impl MatchLoadingApi for MatchLoading {

    fn new<IntoArcConfig: Into<Arc<Config>>>(config: IntoArcConfig) -> Self {
        Self {
            config: config.into(),
        }
    }

    fn load(&self, log_dao: Box<dyn MatchLogFeed>) -> Result<LoadedMatches> {
        let source_name = log_dao.source_name().to_string();
        let stream = log_dao.entries_stream()
            .map_err(|err| format!("load(): failed at fetching the match log entries `Stream`: {err}"))?;

        let mut loaded = LoadedMatches::default();
        for entry in block_on_stream(stream) {
            let (line_number, err, stop) = match entry {
                MatchLogEntry::MatchDate { .. } => continue,
                MatchLogEntry::Match { record, .. } => {
                    loaded.matches.push(record);
                    continue
                },
                MatchLogEntry::Rejected   { line_number, err } |
                MatchLogEntry::BlockEnded { line_number, err } => (line_number, err, self.config.stop_on_rejected_lines),
                MatchLogEntry::Error      { line_number, err } => (line_number, err, self.config.stop_on_feed_errors),
            };
            let message = issue_message(line_number, &source_name, &*err);
            if self.config.log_issues {
                warn!("{message}");
            }
            if stop {
                return Err(Box::from(message))
            }
            loaded.errors.push(message);
        }
        info!("'{source_name}': {} matches loaded; {} lines left behind", loaded.matches.len(), loaded.errors.len());
        Ok(loaded)
    }

    fn load_batch(&self, log_daos: Vec<Box<dyn MatchLogFeed>>) -> Result<LoadedMatches> {
        let mut loaded = LoadedMatches::default();
        for log_dao in log_daos {
            loaded.extend(self.load(log_dao)?);
        }
        Ok(loaded)
    }

}

/// The message for a line that couldn't be loaded -- `line_number` starts at 1
fn issue_message(line_number: u32, source_name: &str, err: &dyn Error) -> String {
    format!("Error at line {line_number} in file {source_name}: {err}")
}


/// Unit tests for the [loading](super) module
#[cfg(test)]
mod tests {
    use super::*;
    use dal::{
        catalog_reader::read_catalog,
        factory::instantiate_match_log_feed,
        sync_reader::MatchLogSyncReader,
    };
    use dbd_match_log::MatchLineParser;
    use std::io::Cursor;


    const CATALOG_FILE_LOCATION: &str = "../dal/tests/resources/catalog.json";
    const GOOD_LOG_FILE_LOCATION: &str = "../dal/tests/resources/good_matches.log";
    const MALFORMED_LOG_FILE_LOCATION: &str = "../dal/tests/resources/malformed_matches.log";


    /// Tests that one bad line doesn't prevent the good ones from being loaded
    #[test]
    fn partial_failure_tolerance() {
        let log = "21 05 2021\n\
                   Meg, escaped, (kindred II), (against trapper)\n\
                   Pig, 2 kills, (enduring III)\n";
        let loaded = MatchLoading::new(Config::default())
            .load(memory_feed(log))
            .expect("Loading shouldn't fail");
        assert_eq!(loaded.matches.len(), 1, "Unexpected number of matches");
        assert_eq!(loaded.errors, vec![String::from("Error at line 3 in file <memory>: no killer or survivor named 'Pig' was found")]);
    }

    /// Tests that every issue is reported with its location, in the source order
    #[test]
    fn issue_messages() {
        let loaded = MatchLoading::new(Config::default())
            .load(file_feed(MALFORMED_LOG_FILE_LOCATION))
            .expect("Loading shouldn't fail");
        assert_eq!(loaded.matches.len(), 1, "Unexpected number of matches");
        assert_eq!(loaded.errors, vec![
            String::from("Error at line 3 in file ../dal/tests/resources/malformed_matches.log: unknown map 'the moon'"),
            String::from("Error at line 4 in file ../dal/tests/resources/malformed_matches.log: 5 perks were listed, but no more than 4 may be equipped"),
            String::from("Error at line 6 in file ../dal/tests/resources/malformed_matches.log: no killer or survivor named 'Pig' was found"),
            String::from("Error at line 9 in file ../dal/tests/resources/malformed_matches.log: rank '50' is not a number from 1 to 20"),
        ]);
    }

    /// Tests that the pedantic setting stops at the first issue
    #[test]
    fn stop_on_rejected_lines() {
        let config = Config {
            log_issues: true,
            stop_on_rejected_lines: true,
            ..Config::default()
        };
        match MatchLoading::new(config).load(file_feed(MALFORMED_LOG_FILE_LOCATION)) {
            Ok(loaded) => panic!("Loading was expected to stop at the first issue, but it yielded {loaded:?}"),
            Err(err) => assert_eq!(err.to_string(), "Error at line 3 in file ../dal/tests/resources/malformed_matches.log: unknown map 'the moon'"),
        }
    }

    /// Tests that unreadable lines are reported as issues by default, but stop the loading when asked to
    #[test]
    fn feed_errors() {
        let log: &[u8] = b"21 05 2021\n\
                           Meg, escaped, (kindred II), (against trapper)\n\
                           Meg, escaped, (kindred \xff II), (against trapper)\n\
                           Meg, escaped, (kindred II), (against trapper)\n";
        let loaded = MatchLoading::new(Config::default())
            .load(memory_feed(log))
            .expect("Loading shouldn't fail");
        assert_eq!(loaded.matches.len(), 2, "Unexpected number of matches");
        assert_eq!(loaded.errors.len(), 1, "Unexpected number of issues: {:?}", loaded.errors);
        assert!(loaded.errors[0].starts_with("Error at line 3 in file <memory>: IO read error: "), "Unexpected issue: {}", loaded.errors[0]);

        let config = Config {
            stop_on_feed_errors: true,
            ..Config::default()
        };
        match MatchLoading::new(config).load(memory_feed(log)) {
            Ok(loaded) => panic!("Loading was expected to stop at the unreadable line, but it yielded {loaded:?}"),
            Err(err) => assert!(err.to_string().starts_with("Error at line 3 in file <memory>: IO read error: "), "Unexpected error: {err}"),
        }
    }

    /// Tests that batches are loaded in order, one after the other
    #[test]
    fn batch() {
        let loaded = MatchLoading::new(Config::default())
            .load_batch(vec![file_feed(GOOD_LOG_FILE_LOCATION), file_feed(MALFORMED_LOG_FILE_LOCATION)])
            .expect("Loading shouldn't fail");
        assert_eq!(loaded.matches.len(), 5 + 1, "Unexpected number of matches");
        assert_eq!(loaded.errors.len(), 4, "Unexpected number of issues");
        assert!(loaded.matches[0].is_killer() && loaded.matches[1].is_survivor(), "Matches are out of order");
    }

    /// Tests that missing files are errors, not issues
    #[test]
    fn missing_file() {
        let result = MatchLoading::new(Config::default())
            .load(file_feed("/tmp/non-existing.log"));
        assert!(result.is_err(), "Loading a missing file should fail");
    }


    fn parser() -> Arc<MatchLineParser> {
        let catalog = read_catalog(CATALOG_FILE_LOCATION).expect("Couldn't read the test catalog");
        Arc::new(MatchLineParser::new(catalog))
    }

    fn file_feed(log_file_path: &str) -> Box<dyn MatchLogFeed> {
        instantiate_match_log_feed(Arc::new(dal_api::Config::default()), parser(), log_file_path)
    }

    fn memory_feed(log: impl AsRef<[u8]>) -> Box<dyn MatchLogFeed> {
        MatchLogSyncReader::new(Arc::new(dal_api::Config::default()), parser(), "<memory>", Cursor::new(log.as_ref().to_vec()))
    }

}
