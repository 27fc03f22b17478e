//! Parser for hand-typed Dead by Daylight match logs.
//!
//! See [deserializer] for the line formats & [MatchLineParser] for the entry point.

pub mod errors;
pub mod fields;
pub mod vocabulary;
pub mod deserializer;

#[cfg(test)]
mod test_catalog;

pub use errors::MatchParsingError;
pub use vocabulary::MatchResultVocabulary;
pub use deserializer::{deserialize_date_line, MatchLineParser, MatchLogSession};
