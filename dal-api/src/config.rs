//! Resting place for DAL's [Config] & friends

use std::borrow::Cow;


/// Configuration for the DAL crate
#[derive(Debug)]
pub struct Config {

    /// If true, every entry yielded by the feeds -- as well as every skipped line -- is trace logged
    pub debug: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
        }
    }
}


/// Parameters for the feeds reading from files
#[derive(Debug)]
pub struct FileReaderInfo<'a> {
    pub log_file_path: Cow<'a, str>,
}
