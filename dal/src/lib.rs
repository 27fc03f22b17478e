//! Data Access Layer: match log feeds reading from files or the standard input, plus the catalog reader

pub mod factory;
pub mod catalog_reader;
pub mod sync_file_reader;
pub mod sync_reader;
pub mod stdin_reader;
