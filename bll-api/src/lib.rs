//! Business Logic Layer API: the contracts for loading matches out of match log feeds

mod config;
pub use config::*;

use common::types::Result;
use dal_api::MatchLogFeed;
use model::report::LoadedMatches;
use std::sync::Arc;


pub trait MatchLoadingApi {

    /// Creates a new instance
    fn new<IntoArcConfig: Into<Arc<Config>>>(config: IntoArcConfig) -> Self;

    /// Loads every match of `log_dao`, along with a message for every line that couldn't be loaded.
    fn load(&self, log_dao: Box<dyn MatchLogFeed>) -> Result<LoadedMatches>;

    /// Loads each of the `log_daos`, one after the other, concatenating the results in the given order.
    fn load_batch(&self, log_daos: Vec<Box<dyn MatchLogFeed>>) -> Result<LoadedMatches>;

}
