//! Business Logic Layer: loads matches out of match log feeds

pub mod loading;

pub use loading::MatchLoading;
