use chrono::Local;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One persisted entry per won round. Field names are the on-disk JSON
/// keys; existing statistics files must keep parsing across releases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub date: String,
    pub guesses: u32,
    pub time: f64,
}

impl GameRecord {
    pub fn new(guesses: u32, elapsed_seconds: f64) -> Self {
        Self {
            date: Local::now().format(DATE_FORMAT).to_string(),
            guesses,
            time: (elapsed_seconds * 100.0).round() / 100.0,
        }
    }
}

/// Aggregates over the whole statistics log.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_games: usize,
    pub best_guesses: u32,
    pub avg_guesses: f64,
    pub fastest_time: f64,
    pub avg_time: f64,
    /// The last (up to) 5 records, oldest first.
    pub recent: Vec<GameRecord>,
}

impl Summary {
    pub fn from_records(records: &[GameRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let total_games = records.len();
        let best_guesses = records.iter().map(|r| r.guesses).fold(u32::MAX, u32::min);
        let avg_guesses =
            records.iter().map(|r| r.guesses as f64).sum::<f64>() / total_games as f64;
        let fastest_time = records.iter().map(|r| r.time).fold(f64::INFINITY, f64::min);
        let avg_time = records.iter().map(|r| r.time).sum::<f64>() / total_games as f64;

        let skip = total_games.saturating_sub(5);
        let recent = records[skip..].to_vec();

        Some(Self {
            total_games,
            best_guesses,
            avg_guesses,
            fastest_time,
            avg_time,
            recent,
        })
    }
}
