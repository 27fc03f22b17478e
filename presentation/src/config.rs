//! Resting place for Presentation's [Config] & friends

/// Configuration for the Presentation crate
#[derive(Debug)]
pub struct Config {

    /// If true, the JSON report is indented for human eyes
    pub pretty: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: true,
        }
    }
}
