//! Persisted game results and the statistics derived from them

mod record;
mod standings;
mod store;

pub use record::{GameResult, ResultHistory};
pub use standings::Standings;
pub use store::{ResultStore, StoreError};
