//! Business entities shared by all the layers:
//!   - the reference [catalog::Catalog] match log lines may refer to;
//!   - the [matches::MatchRecord]s parsed out of those lines;
//!   - the [log_entries::MatchLogEntry]s a match log feed yields;
//!   - the [report::LoadedMatches] a load results in.

pub mod catalog;
pub mod matches;
pub mod log_entries;
pub mod report;
