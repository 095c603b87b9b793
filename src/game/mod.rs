mod session;
mod stats_store;

pub use session::{seed_from_env, GameError, GameSession, GuessOutcome, SessionState};
pub use stats_store::{StatisticsStore, StoreError, STATS_FILE};
