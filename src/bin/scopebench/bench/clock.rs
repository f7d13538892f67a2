use tokio::time::Instant;

pub trait Clock {
    /// Current time in whole milliseconds.
    fn now_millis(&self) -> u64;
}

/// Milliseconds elapsed since the clock was created. Never goes backward, so
/// the difference of two readings is never negative.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock(Instant);

impl Default for MonotonicClock {
    fn default() -> Self {
        Self(Instant::now())
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.0.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Clock, MonotonicClock};

    #[tokio::test(start_paused = true)]
    async fn tracks_advanced_time() {
        let clock = MonotonicClock::default();
        assert_eq!(clock.now_millis(), 0);

        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_eq!(clock.now_millis(), 1500);
    }

    #[tokio::test(start_paused = true)]
    async fn truncates_sub_millisecond_remainder() {
        let clock = MonotonicClock::default();

        tokio::time::advance(Duration::from_micros(999)).await;
        assert_eq!(clock.now_millis(), 0);

        tokio::time::advance(Duration::from_micros(1_500)).await;
        assert_eq!(clock.now_millis(), 2);
    }
}
