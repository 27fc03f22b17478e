//! Small crate to be a central point for presentation requisites.
//!
//! Simply shows the [LoadedMatches] as a Json

mod config;
pub use config::Config;

use std::io::Write;
use log::debug;
use model::report::LoadedMatches;


/// Writes `loaded_matches` to `writer` as a JSON object with the `matches` and `errors` arrays
pub fn to_json(config: &Config, loaded_matches: &LoadedMatches, mut writer: impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let serialization_result = if config.pretty {
        serde_json::to_writer_pretty(&mut writer, loaded_matches)
    } else {
        serde_json::to_writer(&mut writer, loaded_matches)
    };
    serialization_result
        .map_err(|err| format!("presentation: to_json(): Error writing `LoadedMatches` to the given `writer`: {err}"))?;
    writer.write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|err| format!("presentation: to_json(): Error flushing the given `writer`: {err}"))?;
    debug!("presentation: to_json(): report written with {} matches and {} errors", loaded_matches.matches.len(), loaded_matches.errors.len());
    Ok(())
}
