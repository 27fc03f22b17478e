//! Utilities shared by all the layers of the match log loader

pub mod types;
