//! Loads Dead by Daylight matches from hand-typed match log files:
//!
//! ================================================================
//! Loads Dead by Daylight matches from hand-typed match log files,
//! reporting them -- and every line left behind -- as JSON.
//! By default, reads the match log from the standard input
//! ================================================================
//!
//! USAGE:
//!     app [FLAGS] [OPTIONS] --catalog <catalog>
//!
//! FLAGS:
//!         --compact     Outputs the JSON report in a single line
//!         --debug       Traces every line read from the match logs to stderr
//!     -h, --help        Prints help information
//!         --pedantic    Considers all issues as fatal -- even the ones that might be ignored (such as an invalid match line)
//!     -V, --version     Prints version information
//!         --verbose     Outputs any lines that couldn't be loaded to stderr, as they are found
//!
//! OPTIONS:
//!         --catalog <catalog>                     JSON file with the reference catalog of killers, survivors, perks, ...
//!         --log-file <log-file>...                Input file with match log lines -- may be repeated. "-" reads from the standard input
//!         --match-results <match-results>...      Comma separated survivor match results to accept
//!
//!
//! Explore some execution options:
//!  - ./target/debug/app --help
//!  - ./target/debug/app --catalog catalog.json --log-file 2021.log --log-file 2022.log      # loads both files, in order
//!  - ./target/debug/app --catalog catalog.json --pedantic < 2021.log                         # stops on the first line that can't be loaded
//!  - ./target/debug/app --catalog catalog.json --verbose --match-results Escaped,Sacrificed,Dead --log-file 2019.log

mod command_line;

use bll_api::MatchLoadingApi;
use dbd_match_log::{MatchLineParser, MatchResultVocabulary};
use log::LevelFilter;
use std::io::BufWriter;
use std::sync::Arc;

/// Buffer to allow efficient output operations
const OUTPUT_BUFFER_SIZE: usize = 1024 * 1024;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    let command_line_options = command_line::parse_from_args();

    // start the logger
    let log_level = if command_line_options.debug { LevelFilter::Trace } else { LevelFilter::Info };
    simple_logger::SimpleLogger::new().with_utc_timestamps().with_level(log_level).init().unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));

    let dal_config = Arc::new(dal_api::Config {
        debug: command_line_options.debug,
    });
    let logic_config = bll_api::Config {
        log_issues: command_line_options.verbose,
        stop_on_feed_errors: command_line_options.pedantic,
        stop_on_rejected_lines: command_line_options.pedantic,
    };
    let presentation_config = presentation::Config {
        pretty: !command_line_options.compact,
    };
    let presentation_writer = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, std::io::stdout());

    let catalog = dal::catalog_reader::read_catalog(&command_line_options.catalog)?;
    let match_results = MatchResultVocabulary::only(command_line_options.match_results.iter().copied());
    let parser = Arc::new(MatchLineParser::new(catalog).with_match_results(match_results));

    let log_daos = command_line_options.log_file.iter()
        .map(|log_locator| dal::factory::instantiate_match_log_feed(Arc::clone(&dal_config), Arc::clone(&parser), log_locator))
        .collect();
    let loaded_matches = bll::MatchLoading::new(logic_config).load_batch(log_daos)?;
    presentation::to_json(&presentation_config, &loaded_matches, presentation_writer)?;

    Ok(())
}
