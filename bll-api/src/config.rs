//! Resting place for BLL's [Config] & friends


/// Configuration to dictate the tunable behaviors of the Business Logic Layer
#[derive(Debug)]
pub struct Config {

    /// Log::warn! of any issues that happen during match log loading.\
    /// If either [Self::stop_on_feed_errors] or [Self::stop_on_rejected_lines] are set to false,
    /// IO errors or lines that couldn't be loaded won't cause the loading to stop.
    /// With this setting, you have the option to visualize any issues as they happen.
    pub log_issues: bool,

    /// If false, IO errors are reported along with the loaded matches.\
    /// If true, causes the error to propagate and the loading to stop.
    pub stop_on_feed_errors: bool,

    /// If false, lines that couldn't be taken for matches are reported along with the loaded matches.\
    /// If true, the first of such lines causes the loading to stop with an error.
    pub stop_on_rejected_lines: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_issues: false,
            stop_on_feed_errors: false,
            stop_on_rejected_lines: false,
        }
    }
}
