use std::time::{Duration, SystemTime};

/// Wall-clock measurement for one round. Purely observational; never
/// persisted and never used as a deadline.
#[derive(Clone, Debug)]
pub struct TimerState {
    pub started_timestamp: SystemTime,
    pub ended_timestamp: Option<SystemTime>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            started_timestamp: SystemTime::now(),
            ended_timestamp: None,
        }
    }
}

impl TimerState {
    pub fn elapsed(&self) -> Duration {
        let until_time = self.ended_timestamp.unwrap_or(SystemTime::now());

        until_time
            .duration_since(self.started_timestamp)
            .unwrap_or(Duration::default())
    }

    pub fn ended(&self, now: SystemTime) -> TimerState {
        let mut new_state = self.clone();
        new_state.ended_timestamp = Some(now);
        new_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_with_end() {
        let now = SystemTime::now();
        let timer = TimerState {
            started_timestamp: now,
            ended_timestamp: Some(now + Duration::from_secs(10)),
        };

        assert_eq!(timer.elapsed(), Duration::from_secs(10));
    }

    #[test]
    fn test_elapsed_running() {
        let timer = TimerState {
            started_timestamp: SystemTime::now() - Duration::from_secs(5),
            ended_timestamp: None,
        };

        // Real clock, so just verify a lower bound.
        assert!(timer.elapsed() >= Duration::from_secs(5));
    }

    #[test]
    fn test_ended_freezes_elapsed() {
        let now = SystemTime::now();
        let timer = TimerState {
            started_timestamp: now,
            ended_timestamp: None,
        }
        .ended(now + Duration::from_secs(3));

        assert_eq!(timer.elapsed(), Duration::from_secs(3));
    }
}
