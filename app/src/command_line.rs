//! Configs that are gathered from the command line -- see [CommandLineOptions]

use model::matches::SurvivorMatchResult;
use structopt::StructOpt;
use strum::IntoEnumIterator;


/// Command-line options
#[derive(Debug,StructOpt)]
#[structopt(about = "
================================================================
Loads Dead by Daylight matches from hand-typed match log files,
reporting them -- and every line left behind -- as JSON.
By default, reads the match log from the standard input
================================================================
")]
pub struct CommandLineOptions {

    // FLAGS
    ////////

    /// Outputs any lines that couldn't be loaded to stderr, as they are found
    #[structopt(long)]
    pub verbose: bool,

    /// Considers all issues as fatal -- even the ones that might be ignored (such as an invalid match line)
    #[structopt(long)]
    pub pedantic: bool,

    /// Traces every line read from the match logs to stderr
    #[structopt(long)]
    pub debug: bool,

    /// Outputs the JSON report in a single line
    #[structopt(long)]
    pub compact: bool,


    // OPTIONS
    //////////

    /// JSON file with the reference catalog of killers, survivors, perks, addons, items, offerings & realms
    #[structopt(long)]
    pub catalog: String,

    /// Input file with match log lines -- may be repeated. "-" reads from the standard input
    #[structopt(long)]
    pub log_file: Vec<String>,

    /// Comma separated survivor match results to accept, such as "Escaped,Sacrificed,BledOut". Defaults to all of them
    #[structopt(long, use_delimiter = true)]
    pub match_results: Vec<SurvivorMatchResult>,

}

pub fn parse_from_args() -> CommandLineOptions {
    fill_in_defaults(CommandLineOptions::from_args())
}

fn fill_in_defaults(mut command_line_options: CommandLineOptions) -> CommandLineOptions {
    if command_line_options.log_file.is_empty() {
        command_line_options.log_file.push(String::from(dal::factory::STDIN_LOCATOR));
    }
    if command_line_options.match_results.is_empty() {
        command_line_options.match_results.extend(SurvivorMatchResult::iter());
    }
    command_line_options
}


/// Unit tests for the [command_line](super) module
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let command_line_options = fill_in_defaults(CommandLineOptions::from_iter(["app", "--catalog", "catalog.json"]));
        assert_eq!(command_line_options.log_file, vec![String::from("-")]);
        assert_eq!(command_line_options.match_results.len(), SurvivorMatchResult::iter().count());
        assert!(!command_line_options.pedantic && !command_line_options.verbose);
    }

    #[test]
    fn repeated_and_delimited_options() {
        let command_line_options = fill_in_defaults(CommandLineOptions::from_iter([
            "app", "--catalog", "catalog.json",
            "--log-file", "2021.log", "--log-file", "2022.log",
            "--match-results", "Escaped,BledOut",
        ]));
        assert_eq!(command_line_options.log_file, vec![String::from("2021.log"), String::from("2022.log")]);
        assert_eq!(command_line_options.match_results, vec![SurvivorMatchResult::Escaped, SurvivorMatchResult::BledOut]);
    }

    #[test]
    fn unknown_match_result() {
        let result = CommandLineOptions::from_iter_safe(["app", "--catalog", "catalog.json", "--match-results", "Teleported"]);
        assert!(result.is_err(), "An unknown match result should be refused");
    }

}
