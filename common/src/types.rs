//! Contains some types used across the layers

use std::result;


/// The error channel crossing layer boundaries: any error, already carrying a context message
pub type Result<T> = result::Result<T, Box<dyn std::error::Error>>;
