use crate::game::stats_store::{StatisticsStore, StoreError};
use crate::model::{GameRecord, Guess, Score, Secret, TimerState, ValidationError};
use log::{debug, trace};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    Won,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    Continue(Score),
    Won(GameRecord),
}

/// One round from secret generation to the winning guess. Invalid input
/// never touches the counter or the clock; the record is appended to the
/// store at the moment of the win, so an abandoned round leaves no trace.
pub struct GameSession<'a> {
    store: &'a StatisticsStore,
    secret: Secret,
    guess_count: u32,
    timer: TimerState,
    state: SessionState,
}

impl<'a> GameSession<'a> {
    pub fn new(store: &'a StatisticsStore, secret: Secret) -> Self {
        Self {
            store,
            secret,
            guess_count: 0,
            timer: TimerState::default(),
            state: SessionState::AwaitingGuess,
        }
    }

    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        let guess = Guess::parse(input)?;

        self.guess_count += 1;
        let score = Score::of(&self.secret, &guess);
        trace!(target: "session", "guess {} ({:?}) scored {:?}", self.guess_count, guess, score);

        if !score.is_win() {
            return Ok(GuessOutcome::Continue(score));
        }

        self.timer = self.timer.ended(SystemTime::now());
        let record = GameRecord::new(self.guess_count, self.timer.elapsed().as_secs_f64());
        self.store.append(&record)?;
        self.state = SessionState::Won;
        debug!(target: "session", "won in {} guesses, {}s", record.guesses, record.time);
        Ok(GuessOutcome::Won(record))
    }
}

pub fn seed_from_env() -> Option<u64> {
    std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::UsingLogger;
    use std::fs;
    use test_context::test_context;

    fn temp_store(name: &str) -> StatisticsStore {
        let path = std::env::temp_dir().join(format!(
            "bullscows_session_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        StatisticsStore::new(path)
    }

    #[test]
    fn test_invalid_guesses_do_not_count() {
        let store = temp_store("invalid");
        let mut session = GameSession::new(&store, Secret::parse("1405"));

        assert!(matches!(
            session.guess("0145"),
            Err(GameError::Validation(ValidationError::LeadingZero))
        ));
        assert!(matches!(
            session.guess("1122"),
            Err(GameError::Validation(ValidationError::DuplicateDigits))
        ));
        assert_eq!(session.guess_count(), 0);
        assert_eq!(session.state(), SessionState::AwaitingGuess);
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_full_round_records_valid_attempts_only(_: &mut UsingLogger) {
        let store = temp_store("full_round");
        let mut session = GameSession::new(&store, Secret::parse("1405"));

        assert!(session.guess("0145").is_err());
        assert!(session.guess("1122").is_err());

        match session.guess("5043") {
            Ok(GuessOutcome::Continue(score)) => {
                assert_eq!(score, Score { bulls: 0, cows: 3 });
            }
            other => panic!("unexpected outcome: {:?}", other.map_err(|e| e.to_string())),
        }
        assert_eq!(session.guess_count(), 1);

        match session.guess("1405") {
            Ok(GuessOutcome::Won(record)) => {
                assert_eq!(record.guesses, 2);
                assert!(record.time >= 0.0);
            }
            other => panic!("unexpected outcome: {:?}", other.map_err(|e| e.to_string())),
        }
        assert_eq!(session.state(), SessionState::Won);

        let records = store.load();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].guesses, 2);
    }

    #[test]
    fn test_abandoned_round_persists_nothing() {
        let store = temp_store("abandoned");
        let mut session = GameSession::new(&store, Secret::parse("1405"));

        assert!(matches!(
            session.guess("2345"),
            Ok(GuessOutcome::Continue(_))
        ));
        drop(session);

        assert!(store.load().is_empty());
    }
}
